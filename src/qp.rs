//! Dense convex quadratic programs and the solver interface
//!
//! A [`QuadraticProgram`] describes
//!
//! ```text
//! minimize    ½ xᵀ P x + qᵀ x
//! subject to  G x ≤ h
//!             A x = b   (optional)
//! ```
//!
//! Training routines only talk to a [`QpSolver`], so any backend can be
//! plugged in. [`ClarabelSolver`] is the default one.
mod backend;
mod params;
mod program;

pub use self::backend::ClarabelSolver;
pub use self::params::Params;
pub use self::program::QuadraticProgram;

use crate::error::Result;
use crate::status::Solution;

/// Interface of a solver for convex quadratic programs.
pub trait QpSolver: Sync {
    /// Solves the given problem.
    ///
    /// Returns `Ok` with a [`Solution`] whenever the backend ran, whatever
    /// its outcome; callers inspect [`Solution::code`].
    fn solve(&self, problem: &QuadraticProgram) -> Result<Solution>;
}

/// Solves `problem` and returns the optimal point, turning any non-solved
/// outcome into an error.
pub fn solve_checked(solver: &dyn QpSolver, problem: &QuadraticProgram) -> Result<Vec<f64>> {
    let solution = solver.solve(problem)?;
    log::debug!(
        "qp with {} variables: {} after {} steps ({:.3}s), reported objective {:.6}",
        problem.size(),
        solution.code,
        solution.steps,
        solution.time,
        solution.value,
    );
    if solution.code.is_solved() {
        if solution.x.len() != problem.size() {
            return Err(crate::SvmError::ShapeMismatch {
                what: "solution vector",
                expected: problem.size(),
                found: solution.x.len(),
            });
        }
        log::debug!(
            "objective {:.6}, constraint violation {:.3e}",
            problem.objective(&solution.x),
            problem.violation(&solution.x)
        );
        Ok(solution.x)
    } else {
        Err(crate::SvmError::from_status(solution.code))
    }
}
