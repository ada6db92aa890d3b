use super::Kernel;
use ndarray::{Array2, ArrayView2};

/// Builds the symmetric affinity matrix of `x` for the given kernel.
///
/// Only the lower triangle is evaluated, the upper one is mirrored.
pub fn affinity_matrix_with(x: ArrayView2<f64>, kernel: &Kernel) -> Array2<f64> {
    let n = x.nrows();
    let mut kernel_matrix = Array2::zeros((n, n));
    for i in 0..n {
        let xi = x.row(i);
        kernel_matrix[(i, i)] = kernel.diag(xi);
        for j in 0..i {
            let kij = kernel.compute(xi, x.row(j));
            kernel_matrix[(i, j)] = kij;
            kernel_matrix[(j, i)] = kij;
        }
    }
    kernel_matrix
}
