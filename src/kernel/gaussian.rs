//! Gaussian kernel function
use ndarray::ArrayView1;

/// Computes simple Gaussian kernel function.
pub fn kernel(xi: ArrayView1<f64>, xj: ArrayView1<f64>, gamma: f64) -> f64 {
    let dij = xi
        .iter()
        .zip(xj.iter())
        .fold(0.0, |acc, (xik, xjk)| acc + (xik - xjk).powi(2));
    (-gamma * dij).exp()
}
