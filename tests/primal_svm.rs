mod common;

use approx::assert_abs_diff_eq;
use qpsvm::primal::{self, Formulation, Params};
use qpsvm::qp::ClarabelSolver;
use qpsvm::{support_vectors, SvmError};

#[test]
fn hard_margin_separates_clusters() {
    common::init_logging();
    let (x, y) = common::clusters(25, 4.0, 0.7, 3);
    let boundary = primal::solve(x.view(), y.view(), None, &ClarabelSolver::default()).unwrap();
    let margins = boundary.decision_function(x.view()).unwrap() * &y;
    for &mi in margins.iter() {
        assert!(mi >= 1.0 - 1e-6, "margin {} below 1", mi);
    }
    assert_abs_diff_eq!(boundary.accuracy(x.view(), y.view()).unwrap(), 1.0);
}

#[test]
fn hard_margin_fails_on_overlapping_data() {
    common::init_logging();
    let (x, y) = common::noisy_line();
    let err = primal::solve(x.view(), y.view(), None, &ClarabelSolver::default()).unwrap_err();
    assert_eq!(err, SvmError::InfeasibleProblem);
}

#[test]
fn slack_accuracy_grows_with_regularization() {
    common::init_logging();
    let (x, y) = common::noisy_line();
    let solver = ClarabelSolver::default();
    let accuracies: Vec<f64> = [0.001, 0.01, 0.1, 1.0, 10.0, 100.0]
        .iter()
        .map(|&c| {
            let params = Params::new().with_formulation(Formulation::Slack(c));
            let boundary = primal::solve_with(x.view(), y.view(), &params, &solver).unwrap();
            boundary.accuracy(x.view(), y.view()).unwrap()
        })
        .collect();
    for pair in accuracies.windows(2) {
        assert!(pair[0] <= pair[1], "accuracies {:?}", accuracies);
    }
    assert_abs_diff_eq!(accuracies[0], 7.0 / 11.0);
    assert_abs_diff_eq!(accuracies[5], 10.0 / 11.0);
}

#[test]
fn bias_penalty_keeps_separable_data_separated() {
    common::init_logging();
    let (x, y) = common::clusters(20, 3.0, 0.5, 11);
    let solver = ClarabelSolver::default();
    let mut last = 0.0;
    for &c in [0.0, 0.1, 1.0, 10.0].iter() {
        let boundary = primal::solve(x.view(), y.view(), Some(c), &solver).unwrap();
        let accuracy = boundary.accuracy(x.view(), y.view()).unwrap();
        assert!(accuracy >= last);
        last = accuracy;
    }
    assert_abs_diff_eq!(last, 1.0);
}

#[test]
fn support_vectors_of_fitted_boundary() {
    common::init_logging();
    let (x, y) = common::clusters(20, 3.0, 1.0, 5);
    let params = Params::new().with_formulation(Formulation::BiasPenalty(0.0));
    let boundary =
        primal::solve_with(x.view(), y.view(), &params, &ClarabelSolver::default()).unwrap();
    let eps = 1e-4;
    let sv = support_vectors(x.view(), y.view(), &boundary, eps).unwrap();

    // without a penalty on the bias, margins on both sides are touched
    assert!(sv.positive.nrows() >= 1);
    assert!(sv.negative.nrows() >= 1);

    let on_margin = |i: usize| (y[i] * boundary.decision(x.row(i)) - 1.0).abs() < eps;
    let expected_positive = (0..y.len()).filter(|&i| y[i] > 0.0 && on_margin(i)).count();
    let expected_negative = (0..y.len()).filter(|&i| y[i] < 0.0 && on_margin(i)).count();
    assert_eq!(sv.positive.nrows(), expected_positive);
    assert_eq!(sv.negative.nrows(), expected_negative);
    for xi in sv.positive.outer_iter() {
        assert_abs_diff_eq!(boundary.decision(xi), 1.0, epsilon = eps);
    }
    for xi in sv.negative.outer_iter() {
        assert_abs_diff_eq!(boundary.decision(xi), -1.0, epsilon = eps);
    }
}
