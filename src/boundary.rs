//! Linear decision boundaries
use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SvmError};
use crate::problem::check_dataset;

/// The hyperplane `w·x + b = 0` of a linear classifier `sign(w·x + b)`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionBoundary {
    weights: Array1<f64>,
    bias: f64,
}

impl DecisionBoundary {
    pub fn new(weights: Array1<f64>, bias: f64) -> Self {
        DecisionBoundary { weights, bias }
    }

    /// Returns the weight vector `w`.
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    /// Returns the bias `b`.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Number of features the boundary expects.
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    fn check_features(&self, x: &ArrayView2<f64>) -> Result<()> {
        if x.ncols() == self.dim() {
            Ok(())
        } else {
            Err(SvmError::ShapeMismatch {
                what: "feature dimension",
                expected: self.dim(),
                found: x.ncols(),
            })
        }
    }

    /// Evaluates `w·x + b` for a single sample.
    pub fn decision(&self, xi: ArrayView1<f64>) -> f64 {
        self.weights.dot(&xi) + self.bias
    }

    /// Evaluates `w·x + b` for every row of `x`.
    pub fn decision_function(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        self.check_features(&x)?;
        Ok(x.dot(&self.weights) + self.bias)
    }

    /// Predicts labels in {-1, +1}; a zero decision value counts as +1.
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        Ok(self.decision_function(x)?.mapv(sign))
    }

    /// Fraction of samples whose predicted label equals `y`.
    pub fn accuracy(&self, x: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<f64> {
        check_dataset(&x, &y)?;
        let predicted = self.predict(x)?;
        Ok(accuracy(predicted.view(), y))
    }
}

/// Sign of a decision value with `sign(0) = 1`.
pub(crate) fn sign(v: f64) -> f64 {
    if v >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Fraction of equal entries; the inputs have equal length.
pub(crate) fn accuracy(predicted: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    if y.is_empty() {
        return 0.0;
    }
    let correct = predicted
        .iter()
        .zip(y.iter())
        .filter(|(p, yi)| p == yi)
        .count();
    correct as f64 / y.len() as f64
}
