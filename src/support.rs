//! Support vectors of a linear decision boundary
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::boundary::DecisionBoundary;
use crate::error::{Result, SvmError};
use crate::problem::check_dataset;

/// Default tolerance of the margin condition
pub const DEFAULT_EPS: f64 = 1e-3;

/// Samples lying on the margins of a decision boundary
#[derive(Clone, Debug, PartialEq)]
pub struct SupportVectors {
    /// Support vectors of the positive class (one per row)
    pub positive: Array2<f64>,
    /// Margin line the positive support vectors lie on
    pub positive_boundary: DecisionBoundary,
    /// Support vectors of the negative class (one per row)
    pub negative: Array2<f64>,
    /// Margin line the negative support vectors lie on
    pub negative_boundary: DecisionBoundary,
}

/// Collects every sample with `|y_i (w·x_i + b) - 1| < eps`, split by label.
///
/// All samples are inspected; the predicted class plays no role.
pub fn support_vectors(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    boundary: &DecisionBoundary,
    eps: f64,
) -> Result<SupportVectors> {
    check_dataset(&x, &y)?;
    if x.ncols() != boundary.dim() {
        return Err(SvmError::ShapeMismatch {
            what: "feature dimension",
            expected: boundary.dim(),
            found: x.ncols(),
        });
    }

    let mut positive = Vec::new();
    let mut negative = Vec::new();
    for (i, (xi, &yi)) in x.outer_iter().zip(y.iter()).enumerate() {
        let diff = (yi * boundary.decision(xi) - 1.0).abs();
        if diff < eps {
            if yi < 0.0 {
                negative.push(i);
            } else {
                positive.push(i);
            }
        }
    }
    log::debug!(
        "{} positive and {} negative support vectors",
        positive.len(),
        negative.len()
    );

    Ok(SupportVectors {
        positive: x.select(Axis(0), &positive),
        positive_boundary: boundary.clone(),
        negative: x.select(Axis(0), &negative),
        negative_boundary: boundary.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn inspects_every_sample() {
        // boundary x₁ = 0 with margins at x₁ = ±1
        let boundary = DecisionBoundary::new(array![1.0, 0.0], 0.0);
        let x = array![
            [3.0, 0.0],
            [-2.0, 1.0],
            [1.0, 5.0],
            [-1.0, -4.0],
            [1.0005, 2.0],
            [-1.0, 0.0],
        ];
        let y = array![1.0, -1.0, 1.0, -1.0, 1.0, -1.0];
        let sv = support_vectors(x.view(), y.view(), &boundary, DEFAULT_EPS).unwrap();
        assert_eq!(sv.positive, array![[1.0, 5.0], [1.0005, 2.0]]);
        assert_eq!(sv.negative, array![[-1.0, -4.0], [-1.0, 0.0]]);
        assert_eq!(sv.positive_boundary, boundary);
        assert_eq!(sv.negative_boundary, boundary);
    }

    #[test]
    fn last_sample_only() {
        let boundary = DecisionBoundary::new(array![0.5], 0.5);
        let x = array![[4.0], [2.0], [-5.0], [1.0]];
        let y = array![1.0, 1.0, -1.0, 1.0];
        let sv = support_vectors(x.view(), y.view(), &boundary, 1e-9).unwrap();
        assert_eq!(sv.positive, array![[1.0]]);
        assert_eq!(sv.negative.nrows(), 0);
        assert_eq!(sv.negative.ncols(), 1);
    }

    #[test]
    fn rejects_wrong_shapes() {
        let boundary = DecisionBoundary::new(array![1.0, 0.0], 0.0);
        let x = array![[1.0], [2.0]];
        assert!(matches!(
            support_vectors(x.view(), array![1.0, -1.0].view(), &boundary, DEFAULT_EPS),
            Err(SvmError::ShapeMismatch { .. })
        ));
    }
}
