use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::boundary::{accuracy, sign, DecisionBoundary};
use crate::error::{Result, SvmError};
use crate::predict::predict;
use crate::problem::{self, check_labels, check_regularization, check_tolerance};
use crate::qp::{self, QpSolver};

/// Solution of the dual training problem
///
/// The model refers to its training samples only through kernel values, so
/// every method taking `k` expects `k[(t, i)] = K(x_t, x_i)` with `x_i`
/// running over the training samples.
#[derive(Clone, Debug)]
pub struct DualModel {
    alpha: Array1<f64>,
    labels: Array1<f64>,
    bias: f64,
    regularization: f64,
    support: Vec<usize>,
}

/// Checks that `k` is square and matches the labels.
pub(crate) fn check_affinities(k: &ArrayView2<f64>, y: &ArrayView1<f64>) -> Result<()> {
    if k.nrows() != k.ncols() {
        return Err(SvmError::ShapeMismatch {
            what: "affinity matrix columns",
            expected: k.nrows(),
            found: k.ncols(),
        });
    }
    if k.nrows() != y.len() {
        return Err(SvmError::ShapeMismatch {
            what: "number of labels",
            expected: k.nrows(),
            found: y.len(),
        });
    }
    Ok(())
}

/// Fits a [`DualModel`] on the affinity matrix `k` of all samples.
///
/// `tolerance` is the support threshold, usually
/// [`Params::DEFAULT_SUPPORT_TOLERANCE`](super::Params::DEFAULT_SUPPORT_TOLERANCE).
pub fn fit(
    k: ArrayView2<f64>,
    y: ArrayView1<f64>,
    regularization: f64,
    tolerance: f64,
    solver: &dyn QpSolver,
) -> Result<DualModel> {
    check_affinities(&k, &y)?;
    check_labels(&y)?;
    check_regularization(regularization, false)?;
    check_tolerance(tolerance)?;
    if y.is_empty() {
        return Err(SvmError::InvalidParameter("no training samples".to_string()));
    }
    train(k, y, regularization, tolerance, solver)
}

/// Solves the dual problem and recovers the bias; inputs are validated.
pub(crate) fn train(
    k: ArrayView2<f64>,
    y: ArrayView1<f64>,
    c: f64,
    tol: f64,
    solver: &dyn QpSolver,
) -> Result<DualModel> {
    // yᵀα = 0 with α ≥ 0 leaves only α = 0 for a single class
    if !(y.iter().any(|&yi| yi > 0.0) && y.iter().any(|&yi| yi < 0.0)) {
        log::debug!("dual: training labels contain a single class");
        return Err(SvmError::NoSupportVectors);
    }
    let qp = problem::dual::dual(k, y, c)?;
    let sol = qp::solve_checked(solver, &qp)?;

    // the interior point is never exactly on the bounds
    let alpha: Array1<f64> = sol
        .iter()
        .map(|&ai| if ai <= tol { 0.0 } else { ai.min(c) })
        .collect();

    // the solver accuracy scales with C
    let margin = tol * c.max(1.0);
    let free: Vec<usize> = (0..alpha.len())
        .filter(|&j| alpha[j] > margin && alpha[j] < c - margin)
        .collect();
    let support = if free.is_empty() {
        log::debug!("no free support vectors, using all nonzero coefficients for the bias");
        (0..alpha.len()).filter(|&j| alpha[j] > 0.0).collect()
    } else {
        free
    };
    if support.is_empty() {
        return Err(SvmError::NoSupportVectors);
    }

    let bias = support
        .iter()
        .map(|&j| y[j] - predict(k.row(j), alpha.view(), y, 0.0))
        .sum::<f64>()
        / support.len() as f64;
    log::debug!(
        "dual: {} nonzero coefficients, {} used for the bias {}",
        alpha.iter().filter(|&&ai| ai > 0.0).count(),
        support.len(),
        bias
    );

    Ok(DualModel {
        alpha,
        labels: y.to_owned(),
        bias,
        regularization: c,
        support,
    })
}

impl DualModel {
    /// Returns the coefficients α.
    pub fn alpha(&self) -> ArrayView1<'_, f64> {
        self.alpha.view()
    }

    /// Returns the labels of the training samples.
    pub fn labels(&self) -> ArrayView1<'_, f64> {
        self.labels.view()
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn regularization(&self) -> f64 {
        self.regularization
    }

    /// Indices of the support vectors used to recover the bias.
    pub fn support(&self) -> &[usize] {
        &self.support
    }

    /// Number of training samples.
    pub fn size(&self) -> usize {
        self.alpha.len()
    }

    fn check_training_columns(&self, k: &ArrayView2<f64>) -> Result<()> {
        if k.ncols() == self.size() {
            Ok(())
        } else {
            Err(SvmError::ShapeMismatch {
                what: "kernel values per sample",
                expected: self.size(),
                found: k.ncols(),
            })
        }
    }

    /// Evaluates `Σ α_i y_i K(x_i, x_t) + b` for every row of `k`.
    pub fn decision_function(&self, k: ArrayView2<f64>) -> Result<Array1<f64>> {
        self.check_training_columns(&k)?;
        Ok(k.outer_iter()
            .map(|kt| predict(kt, self.alpha.view(), self.labels.view(), self.bias))
            .collect())
    }

    /// Predicts labels in {-1, +1}; a zero decision value counts as +1.
    pub fn predict(&self, k: ArrayView2<f64>) -> Result<Array1<f64>> {
        Ok(self.decision_function(k)?.mapv(sign))
    }

    /// Fraction of rows of `k` whose predicted label equals `y`.
    pub fn accuracy(&self, k: ArrayView2<f64>, y: ArrayView1<f64>) -> Result<f64> {
        if k.nrows() != y.len() {
            return Err(SvmError::ShapeMismatch {
                what: "number of labels",
                expected: k.nrows(),
                found: y.len(),
            });
        }
        let predicted = self.predict(k)?;
        Ok(accuracy(predicted.view(), y))
    }

    /// Computes `w = Σ α_i y_i x_i` for the training samples `x`.
    ///
    /// Only meaningful if the model was trained with the product kernel.
    pub fn linear_weights(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        if x.nrows() != self.size() {
            return Err(SvmError::ShapeMismatch {
                what: "number of training samples",
                expected: self.size(),
                found: x.nrows(),
            });
        }
        let ay = &self.alpha * &self.labels;
        Ok(x.t().dot(&ay))
    }

    /// Linear decision boundary of a model trained with the product kernel.
    pub fn linear_boundary(&self, x: ArrayView2<f64>) -> Result<DecisionBoundary> {
        Ok(DecisionBoundary::new(self.linear_weights(x)?, self.bias))
    }
}
