//! Quadratic programs of the SVM training problems
//!
//! The functions in [`primal`] and [`dual`] only build a
//! [`QuadraticProgram`](crate::qp::QuadraticProgram); solving it is left to
//! a [`QpSolver`](crate::qp::QpSolver).
pub mod dual;
pub mod primal;

use ndarray::{ArrayView1, ArrayView2};

use crate::error::{Result, SvmError};

/// Checks that `x` has one row per label and at least one sample and feature.
pub fn check_dataset(x: &ArrayView2<f64>, y: &ArrayView1<f64>) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(SvmError::ShapeMismatch {
            what: "number of labels",
            expected: x.nrows(),
            found: y.len(),
        });
    }
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(SvmError::InvalidParameter(format!(
            "dataset of shape {:?} is empty",
            x.dim()
        )));
    }
    Ok(())
}

/// Checks that every label is either -1 or +1.
pub fn check_labels(y: &ArrayView1<f64>) -> Result<()> {
    match y.iter().position(|&yi| yi != 1.0 && yi != -1.0) {
        Some(index) => Err(SvmError::InvalidLabel {
            index,
            value: y[index],
        }),
        None => Ok(()),
    }
}

/// Checks that `c` is a finite regularization parameter, `c > 0` unless `allow_zero`.
pub fn check_regularization(c: f64, allow_zero: bool) -> Result<()> {
    let valid = c.is_finite() && (c > 0.0 || (allow_zero && c == 0.0));
    if valid {
        Ok(())
    } else {
        Err(SvmError::InvalidParameter(format!(
            "regularization has to be {}, got {}",
            if allow_zero { "non-negative" } else { "positive" },
            c
        )))
    }
}

/// Checks that the support tolerance is finite and non-negative.
pub fn check_tolerance(tol: f64) -> Result<()> {
    if tol.is_finite() && tol >= 0.0 {
        Ok(())
    } else {
        Err(SvmError::InvalidParameter(format!(
            "support tolerance has to be non-negative, got {}",
            tol
        )))
    }
}
