use ndarray::{Array1, Array2};

use crate::error::{Result, SvmError};

/// A dense convex quadratic program in the form
/// `min ½xᵀPx + qᵀx  s.t.  Gx ≤ h, Ax = b`.
#[derive(Clone, Debug)]
pub struct QuadraticProgram {
    p: Array2<f64>,
    q: Array1<f64>,
    g: Array2<f64>,
    h: Array1<f64>,
    equality: Option<(Array2<f64>, Array1<f64>)>,
}

fn check(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(SvmError::ShapeMismatch {
            what,
            expected,
            found,
        })
    }
}

impl QuadraticProgram {
    /// Creates the inequality-constrained problem `(P, q, G, h)`.
    ///
    /// `P` has to be symmetric positive semidefinite; only its upper
    /// triangle is passed on to the solver.
    pub fn new(p: Array2<f64>, q: Array1<f64>, g: Array2<f64>, h: Array1<f64>) -> Result<Self> {
        let n = q.len();
        check("objective matrix rows", n, p.nrows())?;
        check("objective matrix columns", n, p.ncols())?;
        check("inequality matrix columns", n, g.ncols())?;
        check("inequality right-hand side", g.nrows(), h.len())?;
        Ok(QuadraticProgram {
            p,
            q,
            g,
            h,
            equality: None,
        })
    }

    /// Adds the equality constraints `Ax = b`.
    pub fn with_equality(mut self, a: Array2<f64>, b: Array1<f64>) -> Result<Self> {
        check("equality matrix columns", self.size(), a.ncols())?;
        check("equality right-hand side", a.nrows(), b.len())?;
        self.equality = Some((a, b));
        Ok(self)
    }

    /// Returns the number of variables.
    pub fn size(&self) -> usize {
        self.q.len()
    }

    pub fn p(&self) -> &Array2<f64> {
        &self.p
    }

    pub fn q(&self) -> &Array1<f64> {
        &self.q
    }

    pub fn g(&self) -> &Array2<f64> {
        &self.g
    }

    pub fn h(&self) -> &Array1<f64> {
        &self.h
    }

    /// Returns `(A, b)` if equality constraints are present.
    pub fn equality(&self) -> Option<(&Array2<f64>, &Array1<f64>)> {
        self.equality.as_ref().map(|(a, b)| (a, b))
    }

    /// Evaluates the objective function at `x`.
    pub fn objective(&self, x: &[f64]) -> f64 {
        let x = ndarray::aview1(x);
        0.5 * x.dot(&self.p.dot(&x)) + self.q.dot(&x)
    }

    /// Largest violation of any constraint at `x`.
    pub fn violation(&self, x: &[f64]) -> f64 {
        let x = ndarray::aview1(x);
        let ineq = (self.g.dot(&x) - &self.h).fold(0.0_f64, |acc, &r| acc.max(r));
        match &self.equality {
            Some((a, b)) => (a.dot(&x) - b).fold(ineq, |acc, &r| acc.max(r.abs())),
            None => ineq,
        }
    }
}
