//! Dual training problem over the coefficients α
use ndarray::{s, Array, Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::error::Result;
use crate::qp::QuadraticProgram;

/// Builds the dual problem
///
/// ```text
/// min ½ αᵀ (y yᵀ ⊙ K) α - 1ᵀα   s.t.  0 ≤ α_i ≤ c,  yᵀα = 0
/// ```
///
/// for the kernel matrix `k` of the training samples.
pub fn dual(k: ArrayView2<f64>, y: ArrayView1<f64>, c: f64) -> Result<QuadraticProgram> {
    let n = y.len();
    let mut p = Array2::<f64>::zeros((n, n));
    for ((i, j), pij) in p.indexed_iter_mut() {
        *pij = y[i] * y[j] * k[(i, j)];
    }
    let q = Array::from_elem(n, -1.0);

    // box constraints: -α ≤ 0 and α ≤ c
    let mut g = Array2::<f64>::zeros((2 * n, n));
    let mut h = Array1::<f64>::zeros(2 * n);
    for i in 0..n {
        g[(i, i)] = -1.0;
        g[(n + i, i)] = 1.0;
    }
    h.slice_mut(s![n..]).fill(c);

    let a = y.to_owned().insert_axis(Axis(0));
    QuadraticProgram::new(p, q, g, h)?.with_equality(a, Array1::zeros(1))
}
