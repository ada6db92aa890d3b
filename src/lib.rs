//! Train SVM classifiers by solving quadratic programs.
//!
//! The primal problem over `(w, b)` is handled in [`primal`], the dual
//! problem over the coefficients α (with cross-validation) in [`dual`].
//! Both build a [`qp::QuadraticProgram`] and pass it to a [`qp::QpSolver`].
#![warn(missing_docs)]

pub mod boundary;
pub mod dual;
mod error;
pub mod kernel;
mod predict;
pub mod primal;
pub mod problem;
pub mod qp;
mod status;
pub mod support;

pub use crate::boundary::DecisionBoundary;
pub use crate::error::{Result, SvmError};
pub use crate::kernel::{affinity_matrix, Kernel, KernelParams};
pub use crate::status::{Solution, StatusCode};
pub use crate::support::{support_vectors, SupportVectors};
