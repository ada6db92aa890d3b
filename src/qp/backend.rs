use clarabel::algebra::CscMatrix;
use clarabel::solver::*;
use ndarray::{s, Array2, ArrayView2};

use super::{Params, QpSolver, QuadraticProgram};
use crate::error::Result;
use crate::status::{Solution, StatusCode};

/// [`QpSolver`] backed by the Clarabel interior-point method.
#[derive(Clone, Debug, Default)]
pub struct ClarabelSolver {
    params: Params,
}

impl ClarabelSolver {
    /// Creates a solver with the given settings.
    pub fn new(params: Params) -> Self {
        ClarabelSolver { params }
    }

    fn settings(&self) -> DefaultSettings<f64> {
        DefaultSettings {
            max_iter: self.params.max_steps,
            time_limit: self.params.time_limit,
            tol_gap_abs: self.params.tol_gap_abs,
            tol_gap_rel: self.params.tol_gap_rel,
            tol_feas: self.params.tol_feas,
            verbose: self.params.verbose,
            ..DefaultSettings::default()
        }
    }
}

/// Converts a dense matrix to compressed sparse column format, keeping only
/// the upper triangle if requested.
fn to_csc(mat: ArrayView2<f64>, upper: bool) -> CscMatrix<f64> {
    let (m, n) = mat.dim();
    let mut colptr = Vec::with_capacity(n + 1);
    let mut rowval = Vec::new();
    let mut nzval = Vec::new();
    colptr.push(0);
    for j in 0..n {
        let rows = if upper { (j + 1).min(m) } else { m };
        for i in 0..rows {
            let v = mat[(i, j)];
            if v != 0.0 {
                rowval.push(i);
                nzval.push(v);
            }
        }
        colptr.push(rowval.len());
    }
    CscMatrix::new(m, n, colptr, rowval, nzval)
}

fn status_code(status: &SolverStatus) -> StatusCode {
    match status {
        SolverStatus::Solved => StatusCode::Optimal,
        SolverStatus::AlmostSolved => StatusCode::AlmostOptimal,
        SolverStatus::PrimalInfeasible | SolverStatus::AlmostPrimalInfeasible => {
            StatusCode::Infeasible
        }
        SolverStatus::DualInfeasible | SolverStatus::AlmostDualInfeasible => {
            StatusCode::Unbounded
        }
        SolverStatus::MaxIterations => StatusCode::MaxSteps,
        SolverStatus::MaxTime => StatusCode::TimeLimit,
        _ => StatusCode::NumericalError,
    }
}

impl QpSolver for ClarabelSolver {
    fn solve(&self, problem: &QuadraticProgram) -> Result<Solution> {
        let n = problem.size();
        let n_ineq = problem.g().nrows();
        let n_eq = problem.equality().map_or(0, |(a, _)| a.nrows());

        // stack [A; G] so that the zero cone comes first
        let mut a_all = Array2::zeros((n_eq + n_ineq, n));
        let mut b_all = vec![0.0; n_eq + n_ineq];
        if let Some((a, b)) = problem.equality() {
            a_all.slice_mut(s![..n_eq, ..]).assign(a);
            for (k, &bk) in b.iter().enumerate() {
                b_all[k] = bk;
            }
        }
        a_all.slice_mut(s![n_eq.., ..]).assign(problem.g());
        for (k, &hk) in problem.h().iter().enumerate() {
            b_all[n_eq + k] = hk;
        }

        let mut cones: Vec<SupportedConeT<f64>> = Vec::with_capacity(2);
        if n_eq > 0 {
            cones.push(SupportedConeT::ZeroConeT(n_eq));
        }
        if n_ineq > 0 {
            cones.push(SupportedConeT::NonnegativeConeT(n_ineq));
        }

        let p = to_csc(problem.p().view(), true);
        let a = to_csc(a_all.view(), false);
        let q = problem.q().to_vec();

        let mut solver = DefaultSolver::new(&p, &q, &a, &b_all, &cones, self.settings());
        solver.solve();

        let code = status_code(&solver.solution.status);
        let x = if code.is_solved() {
            solver.solution.x.clone()
        } else {
            Vec::new()
        };
        Ok(Solution {
            x,
            value: solver.solution.obj_val,
            code,
            steps: solver.solution.iterations as usize,
            time: solver.solution.solve_time,
        })
    }
}
