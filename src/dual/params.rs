use serde::{Deserialize, Serialize};

/// Parameters of the cross-validated dual training
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Params {
    /// Upper bound `C` on the coefficients
    pub regularization: f64,
    /// Number of folds
    pub folds: usize,
    /// Seed of the random permutation defining the folds
    pub seed: u64,
    /// Coefficients below this value count as zero; for the bias, the
    /// distance to the bounds is measured relative to `max(C, 1)`
    pub support_tolerance: f64,
    /// Runs the folds on the rayon thread pool
    pub parallel: bool,
}

impl Params {
    const DEFAULT_REGULARIZATION: f64 = 1.0;
    const DEFAULT_FOLDS: usize = 5;
    const DEFAULT_SEED: u64 = 42;
    /// Default of [`Params::support_tolerance`]
    pub const DEFAULT_SUPPORT_TOLERANCE: f64 = 1e-6;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            regularization: Self::DEFAULT_REGULARIZATION,
            folds: Self::DEFAULT_FOLDS,
            seed: Self::DEFAULT_SEED,
            support_tolerance: Self::DEFAULT_SUPPORT_TOLERANCE,
            parallel: false,
        }
    }

    pub fn with_regularization(mut self, regularization: f64) -> Self {
        self.regularization = regularization;
        self
    }

    pub fn with_folds(mut self, folds: usize) -> Self {
        self.folds = folds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_support_tolerance(mut self, support_tolerance: f64) -> Self {
        self.support_tolerance = support_tolerance;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
