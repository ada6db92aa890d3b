use ndarray::ArrayView1;

/// Computes the dot product kernel function.
pub fn kernel(xi: ArrayView1<f64>, xj: ArrayView1<f64>) -> f64 {
    xi.dot(&xj)
}
