//! Primal training problems over `(w, b)`
//!
//! Every sample is padded with a constant `1` so that the bias becomes the
//! last component of the variable vector.
use ndarray::{s, Array, Array1, Array2, ArrayView1, ArrayView2};

use crate::error::Result;
use crate::qp::QuadraticProgram;

/// Builds `G = -(y ⊙ [x | 1])` and `h = -1`, i.e. `y_i (w·x_i + b) ≥ 1`.
fn margin_constraints(x: &ArrayView2<f64>, y: &ArrayView1<f64>) -> (Array2<f64>, Array1<f64>) {
    let (n, m) = x.dim();
    let mut g = Array2::<f64>::zeros((n, m + 1));
    for (i, (mut gi, xi)) in g.outer_iter_mut().zip(x.outer_iter()).enumerate() {
        let yi = y[i];
        gi.slice_mut(s![..m]).assign(&xi.mapv(|xik| -yi * xik));
        gi[m] = -yi;
    }
    (g, Array::from_elem(n, -1.0))
}

/// Hard margin problem `min ½‖(w, b)‖²  s.t.  y_i (w·x_i + b) ≥ 1`.
///
/// The bias is part of the quadratic term.
pub fn hard_margin(x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<QuadraticProgram> {
    let m = x.ncols();
    let (g, h) = margin_constraints(&x, &y);
    QuadraticProgram::new(Array2::eye(m + 1), Array1::zeros(m + 1), g, h)
}

/// Soft margin problem with the penalty `c` on the bias:
/// `min ½‖w‖² + c·b  s.t.  y_i (w·x_i + b) ≥ 1`.
///
/// There are no slack variables, so the constraints are those of
/// [`hard_margin`].
pub fn bias_penalty(x: ArrayView2<f64>, y: ArrayView1<f64>, c: f64) -> Result<QuadraticProgram> {
    let m = x.ncols();
    let mut p = Array2::<f64>::eye(m + 1);
    p[(m, m)] = 0.0;
    let mut q = Array1::<f64>::zeros(m + 1);
    q[m] = c;
    let (g, h) = margin_constraints(&x, &y);
    QuadraticProgram::new(p, q, g, h)
}

/// Soft margin problem with one slack variable per sample:
/// `min ½‖w‖² + c·Σξ_i  s.t.  y_i (w·x_i + b) ≥ 1 - ξ_i, ξ_i ≥ 0`.
///
/// The variables are ordered `(w, b, ξ)`.
pub fn slack(x: ArrayView2<f64>, y: ArrayView1<f64>, c: f64) -> Result<QuadraticProgram> {
    let (n, m) = x.dim();
    let size = m + 1 + n;
    let mut p = Array2::<f64>::zeros((size, size));
    for k in 0..m {
        p[(k, k)] = 1.0;
    }
    let mut q = Array1::<f64>::zeros(size);
    q.slice_mut(s![m + 1..]).fill(c);

    let (g_margin, h_margin) = margin_constraints(&x, &y);
    let mut g = Array2::<f64>::zeros((2 * n, size));
    let mut h = Array1::<f64>::zeros(2 * n);
    g.slice_mut(s![..n, ..m + 1]).assign(&g_margin);
    h.slice_mut(s![..n]).assign(&h_margin);
    for i in 0..n {
        g[(i, m + 1 + i)] = -1.0;
        g[(n + i, m + 1 + i)] = -1.0;
    }
    QuadraticProgram::new(p, q, g, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn hard_margin_matrices() {
        let x = array![[1.0, 2.0], [-3.0, 0.5]];
        let y = array![1.0, -1.0];
        let qp = hard_margin(x.view(), y.view()).unwrap();
        assert_eq!(qp.p(), &Array2::<f64>::eye(3));
        assert_eq!(qp.q(), &array![0.0, 0.0, 0.0]);
        assert_eq!(qp.g(), &array![[-1.0, -2.0, -1.0], [-3.0, 0.5, 1.0]]);
        assert_eq!(qp.h(), &array![-1.0, -1.0]);
        assert!(qp.equality().is_none());
    }

    #[test]
    fn bias_penalty_matrices() {
        let x = array![[1.0, 2.0], [-3.0, 0.5]];
        let y = array![1.0, -1.0];
        let qp = bias_penalty(x.view(), y.view(), 0.7).unwrap();
        assert_eq!(
            qp.p(),
            &array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]
        );
        assert_eq!(qp.q(), &array![0.0, 0.0, 0.7]);
        assert_eq!(qp.g(), hard_margin(x.view(), y.view()).unwrap().g());
    }

    #[test]
    fn slack_matrices() {
        let x = array![[2.0], [-1.0]];
        let y = array![1.0, -1.0];
        let qp = slack(x.view(), y.view(), 3.0).unwrap();
        assert_eq!(qp.size(), 4);
        assert_eq!(qp.q(), &array![0.0, 0.0, 3.0, 3.0]);
        assert_eq!(qp.p()[(0, 0)], 1.0);
        assert_eq!(qp.p().sum(), 1.0);
        assert_eq!(
            qp.g(),
            &array![
                [-2.0, -1.0, -1.0, 0.0],
                [-1.0, 1.0, 0.0, -1.0],
                [0.0, 0.0, -1.0, 0.0],
                [0.0, 0.0, 0.0, -1.0],
            ]
        );
        assert_eq!(qp.h(), &array![-1.0, -1.0, 0.0, 0.0]);
    }
}
