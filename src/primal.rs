//! Training a linear SVM through its primal quadratic program
mod params;
mod solve;

pub use self::params::{Formulation, Params};
pub use self::solve::{solve, solve_with};
