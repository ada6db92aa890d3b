use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Possible outcomes of a call to the QP solver
pub enum StatusCode {
    /// Solution found (up to defined tolerance)
    Optimal,
    /// Solution found with reduced accuracy
    AlmostOptimal,
    /// No point satisfies the constraints
    Infeasible,
    /// Objective is unbounded below on the feasible set
    Unbounded,
    /// Maximum number of iterations reached
    MaxSteps,
    /// Time limit reached
    TimeLimit,
    /// Solver stopped because of numerical trouble
    NumericalError,
}

impl StatusCode {
    /// Checks whether the status carries a usable solution.
    pub fn is_solved(&self) -> bool {
        matches!(self, StatusCode::Optimal | StatusCode::AlmostOptimal)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            StatusCode::Optimal => "optimal",
            StatusCode::AlmostOptimal => "almost optimal",
            StatusCode::Infeasible => "infeasible",
            StatusCode::Unbounded => "unbounded",
            StatusCode::MaxSteps => "maximum number of steps reached",
            StatusCode::TimeLimit => "time limit reached",
            StatusCode::NumericalError => "numerical error",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A struct containing the outcome of a QP solve
pub struct Solution {
    /// Optimal point (empty unless the status is solved)
    pub x: Vec<f64>,
    /// Objective function value at `x`
    pub value: f64,
    /// Outcome of the solver
    pub code: StatusCode,
    /// Number of conducted steps
    pub steps: usize,
    /// Elapsed time (in seconds)
    pub time: f64,
}
