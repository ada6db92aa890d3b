//! Training an SVM through its dual quadratic program
//!
//! The dual problem only needs the affinity (kernel) matrix of the training
//! samples, see [`crate::kernel`].
mod crossval;
mod model;
mod params;

pub use self::crossval::{cross_validate, split, CrossValidation, FoldReport, FoldScores, FoldSplit};
pub use self::model::{fit, DualModel};
pub use self::params::Params;
