//! Error types of the crate
use serde::Serialize;
use thiserror::Error;

use crate::status::StatusCode;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, SvmError>;

/// Errors of the training routines
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum SvmError {
    /// The solver found no point satisfying the constraints
    #[error("quadratic program is infeasible")]
    InfeasibleProblem,
    /// The solver stopped without a solution for another reason
    #[error("QP solver did not find a solution: {0}")]
    SolverFailed(StatusCode),
    /// Unknown kernel name
    #[error("unsupported kernel type {0}")]
    UnsupportedKernel(String),
    /// Known kernel name without an implementation
    #[error("not implemented: {0}")]
    NotImplemented(String),
    /// Inconsistent array dimensions
    #[error("shape mismatch in {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Quantity being checked
        what: &'static str,
        /// Required size
        expected: usize,
        /// Actual size
        found: usize,
    },
    /// A label other than -1 and +1
    #[error("label {value} at index {index} is neither -1 nor +1")]
    InvalidLabel {
        /// Position of the label
        index: usize,
        /// Offending value
        value: f64,
    },
    /// Parameter out of range
    #[error("invalid parameter {0}")]
    InvalidParameter(String),
    /// The bias cannot be recovered
    #[error("no support vectors found to recover the bias")]
    NoSupportVectors,
    /// Every fold of a cross-validation run failed
    #[error("every cross-validation fold failed")]
    NoSuccessfulFold,
}

impl SvmError {
    /// Maps a non-optimal solver status onto an error.
    pub fn from_status(code: StatusCode) -> Self {
        match code {
            StatusCode::Infeasible => SvmError::InfeasibleProblem,
            code => SvmError::SolverFailed(code),
        }
    }
}
