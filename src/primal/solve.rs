use ndarray::{s, ArrayView1, ArrayView2};

use super::params::{Formulation, Params};
use crate::boundary::DecisionBoundary;
use crate::error::Result;
use crate::problem::{self, check_dataset, check_labels, check_regularization};
use crate::qp::{self, QpSolver};

/// Solves the primal problem for samples `x` and labels `y` in {-1, +1}.
///
/// Without `regularization` the hard margin problem is solved, which is
/// infeasible unless the data is linearly separable. With `Some(c)` the
/// penalty `c` is placed on the bias.
pub fn solve(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    regularization: Option<f64>,
    solver: &dyn QpSolver,
) -> Result<DecisionBoundary> {
    let params = Params::new().with_regularization(regularization);
    solve_with(x, y, &params, solver)
}

/// Solves the primal problem in the given [`Formulation`].
pub fn solve_with(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    params: &Params,
    solver: &dyn QpSolver,
) -> Result<DecisionBoundary> {
    check_dataset(&x, &y)?;
    check_labels(&y)?;
    let qp = match params.formulation {
        Formulation::Hard => problem::primal::hard_margin(x, y)?,
        Formulation::BiasPenalty(c) => {
            check_regularization(c, true)?;
            problem::primal::bias_penalty(x, y, c)?
        }
        Formulation::Slack(c) => {
            check_regularization(c, true)?;
            problem::primal::slack(x, y, c)?
        }
    };
    log::debug!(
        "primal {:?}: {} samples, {} features",
        params.formulation,
        x.nrows(),
        x.ncols()
    );

    let sol = qp::solve_checked(solver, &qp)?;

    // variables are (w, b) followed by the slacks, if any
    let m = x.ncols();
    let sol = ndarray::aview1(&sol);
    let weights = sol.slice(s![..m]).to_owned();
    let bias = sol[m];
    log::info!("weights: {}; bias: {}", weights, bias);
    Ok(DecisionBoundary::new(weights, bias))
}
