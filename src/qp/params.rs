use serde::{Deserialize, Serialize};

/// Parameters of the interior-point QP solver
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Params {
    /// Maximum number of iterations
    pub max_steps: u32,
    /// Time limit (in seconds)
    pub time_limit: f64,
    /// Absolute tolerance on the duality gap
    pub tol_gap_abs: f64,
    /// Relative tolerance on the duality gap
    pub tol_gap_rel: f64,
    /// Tolerance on primal and dual feasibility
    pub tol_feas: f64,
    /// Prints the solver's progress table
    pub verbose: bool,
}

impl Params {
    const DEFAULT_MAX_STEPS: u32 = 200;
    const DEFAULT_TIME_LIMIT: f64 = f64::INFINITY;
    const DEFAULT_TOL: f64 = 1e-8;
    const DEFAULT_TOL_FEAS: f64 = 1e-8;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            max_steps: Self::DEFAULT_MAX_STEPS,
            time_limit: Self::DEFAULT_TIME_LIMIT,
            tol_gap_abs: Self::DEFAULT_TOL,
            tol_gap_rel: Self::DEFAULT_TOL,
            tol_feas: Self::DEFAULT_TOL_FEAS,
            verbose: false,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_time_limit(mut self, time_limit: f64) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets both duality gap tolerances.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol_gap_abs = tol;
        self.tol_gap_rel = tol;
        self
    }

    pub fn with_tol_feas(mut self, tol_feas: f64) -> Self {
        self.tol_feas = tol_feas;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
