use serde::{Deserialize, Serialize};

/// Variants of the primal training problem
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Formulation {
    /// Hard margin, the bias is regularized as well
    Hard,
    /// Soft margin with the penalty `C` acting on the bias only
    BiasPenalty(f64),
    /// Soft margin with one slack variable per sample and penalty `C`
    Slack(f64),
}

/// Parameters of the primal training problem
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Params {
    /// Formulation of the quadratic program
    pub formulation: Formulation,
}

impl Params {
    const DEFAULT_FORMULATION: Formulation = Formulation::Hard;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            formulation: Self::DEFAULT_FORMULATION,
        }
    }

    /// Chooses hard margin for `None` and the bias penalty `C` otherwise.
    pub fn with_regularization(mut self, regularization: Option<f64>) -> Self {
        self.formulation = match regularization {
            None => Formulation::Hard,
            Some(c) => Formulation::BiasPenalty(c),
        };
        self
    }

    pub fn with_formulation(mut self, formulation: Formulation) -> Self {
        self.formulation = formulation;
        self
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
