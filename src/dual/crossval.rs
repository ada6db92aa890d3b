use ndarray::{ArrayView1, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::model::{check_affinities, train};
use super::params::Params;
use crate::error::{Result, SvmError};
use crate::problem::{check_labels, check_regularization, check_tolerance};
use crate::qp::QpSolver;

/// Indices of the training and test samples of one fold
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoldSplit {
    /// Training indices
    pub train: Vec<usize>,
    /// Test indices
    pub test: Vec<usize>,
}

/// Accuracies reached in one fold
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoldScores {
    /// Accuracy on the training samples
    pub train_accuracy: f64,
    /// Accuracy on the held-out samples
    pub test_accuracy: f64,
}

/// Outcome of one fold
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FoldReport {
    /// Fold index
    pub fold: usize,
    /// Scores, or the error that stopped the fold
    pub outcome: Result<FoldScores>,
}

/// Outcome of a cross-validation run
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CrossValidation {
    /// Reports ordered by fold index
    pub folds: Vec<FoldReport>,
    /// Mean test accuracy over the folds that succeeded
    pub mean_test_accuracy: f64,
}

impl CrossValidation {
    /// Number of folds that failed.
    pub fn failures(&self) -> usize {
        self.folds.iter().filter(|f| f.outcome.is_err()).count()
    }
}

/// Splits `n` samples into `folds` folds after a seeded shuffle.
///
/// Every fold tests on `n / folds` samples; the remaining `n % folds`
/// samples are always used for training.
pub fn split(n: usize, folds: usize, seed: u64) -> Result<Vec<FoldSplit>> {
    if folds < 2 {
        return Err(SvmError::InvalidParameter(format!(
            "at least 2 folds are needed, got {}",
            folds
        )));
    }
    let n_test = n / folds;
    if n_test == 0 {
        return Err(SvmError::InvalidParameter(format!(
            "{} samples are too few for {} folds",
            n, folds
        )));
    }
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(&mut StdRng::seed_from_u64(seed));

    Ok((0..folds)
        .map(|fold| {
            let (start, end) = (fold * n_test, (fold + 1) * n_test);
            FoldSplit {
                train: perm[..start].iter().chain(&perm[end..]).copied().collect(),
                test: perm[start..end].to_vec(),
            }
        })
        .collect())
}

fn score_fold(
    k: &ArrayView2<f64>,
    y: &ArrayView1<f64>,
    split: &FoldSplit,
    params: &Params,
    solver: &dyn QpSolver,
) -> Result<FoldScores> {
    let k_train = k.select(Axis(0), &split.train).select(Axis(1), &split.train);
    let y_train = y.select(Axis(0), &split.train);
    let model = train(
        k_train.view(),
        y_train.view(),
        params.regularization,
        params.support_tolerance,
        solver,
    )?;
    let train_accuracy = model.accuracy(k_train.view(), y_train.view())?;

    let k_test = k.select(Axis(0), &split.test).select(Axis(1), &split.train);
    let y_test = y.select(Axis(0), &split.test);
    let test_accuracy = model.accuracy(k_test.view(), y_test.view())?;
    Ok(FoldScores {
        train_accuracy,
        test_accuracy,
    })
}

fn run_fold(
    k: &ArrayView2<f64>,
    y: &ArrayView1<f64>,
    fold: usize,
    split: &FoldSplit,
    params: &Params,
    solver: &dyn QpSolver,
) -> FoldReport {
    let outcome = score_fold(k, y, split, params, solver);
    match &outcome {
        Ok(scores) => {
            log::info!("fold {}: train accuracy={}", fold, scores.train_accuracy);
            log::info!("fold {}: test accuracy={}", fold, scores.test_accuracy);
        }
        Err(err) => log::warn!("fold {}: {}", fold, err),
    }
    FoldReport { fold, outcome }
}

/// Cross-validates the dual SVM on the affinity matrix `affinities`.
///
/// Shape, label and parameter errors abort the run. A fold whose training
/// fails is reported in its [`FoldReport`] and the remaining folds still
/// run.
pub fn cross_validate(
    affinities: ArrayView2<f64>,
    y: ArrayView1<f64>,
    params: &Params,
    solver: &dyn QpSolver,
) -> Result<CrossValidation> {
    check_affinities(&affinities, &y)?;
    check_labels(&y)?;
    check_regularization(params.regularization, false)?;
    check_tolerance(params.support_tolerance)?;
    let splits = split(y.len(), params.folds, params.seed)?;

    let folds: Vec<FoldReport> = if params.parallel {
        splits
            .par_iter()
            .enumerate()
            .map(|(fold, s)| run_fold(&affinities, &y, fold, s, params, solver))
            .collect()
    } else {
        splits
            .iter()
            .enumerate()
            .map(|(fold, s)| run_fold(&affinities, &y, fold, s, params, solver))
            .collect()
    };

    let test_accuracies: Vec<f64> = folds
        .iter()
        .filter_map(|f| f.outcome.as_ref().ok())
        .map(|scores| scores.test_accuracy)
        .collect();
    if test_accuracies.is_empty() {
        return Err(SvmError::NoSuccessfulFold);
    }
    let mean_test_accuracy = test_accuracies.iter().sum::<f64>() / test_accuracies.len() as f64;
    log::info!("average test accuracy: {}", mean_test_accuracy);

    Ok(CrossValidation {
        folds,
        mean_test_accuracy,
    })
}
