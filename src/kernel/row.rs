use ndarray::{Array2, ArrayView1, ArrayView2};

/// Evaluates `fun` on every pair of rows of `a` and `b`.
///
/// Entry `(t, i)` of the result is `fun(a[t], b[i])`.
pub fn pairwise<F>(a: ArrayView2<f64>, b: ArrayView2<f64>, fun: F) -> Array2<f64>
where
    F: Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64,
{
    let mut out = Array2::zeros((a.nrows(), b.nrows()));
    for (mut row_t, at) in out.outer_iter_mut().zip(a.outer_iter()) {
        for (kti, bi) in row_t.iter_mut().zip(b.outer_iter()) {
            *kti = fun(at, bi);
        }
    }
    out
}
