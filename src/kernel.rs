//! Kernel functions and affinity matrices
mod gaussian;
mod precomputed;
mod product;
mod row;

pub use self::precomputed::affinity_matrix_with;
pub use self::row::pairwise;

use ndarray::{Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SvmError};

/// Kernel names that are commonly asked for but not provided by this crate
const NOT_PROVIDED: [&str; 3] = ["polynomial", "sigmoid", "laplacian"];

/// Parameters of the kernel functions
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct KernelParams {
    /// Width parameter γ of the Gaussian kernel (`1 / d` if unset)
    pub gamma: Option<f64>,
}

impl KernelParams {
    pub fn new() -> Self {
        KernelParams { gamma: None }
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }
}

/// A kernel function `K(xi, xj)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Kernel {
    /// Dot product `xi · xj`
    Product,
    /// Gaussian kernel `exp(-γ‖xi - xj‖²)`
    Rbf {
        /// Width parameter
        gamma: f64,
    },
}

impl Kernel {
    /// Resolves a kernel by name (`"product"` or `"rbf"`) for data of dimension `dim`.
    pub fn from_name(name: &str, params: &KernelParams, dim: usize) -> Result<Kernel> {
        match name {
            "product" => Ok(Kernel::Product),
            "rbf" => {
                let gamma = params.gamma.unwrap_or(1.0 / dim.max(1) as f64);
                Kernel::rbf(gamma)
            }
            _ if NOT_PROVIDED.contains(&name) => {
                Err(SvmError::NotImplemented(format!("kernel type {}", name)))
            }
            _ => Err(SvmError::UnsupportedKernel(name.to_string())),
        }
    }

    /// Creates a Gaussian kernel with a positive width parameter.
    pub fn rbf(gamma: f64) -> Result<Kernel> {
        if gamma > 0.0 && gamma.is_finite() {
            Ok(Kernel::Rbf { gamma })
        } else {
            Err(SvmError::InvalidParameter(format!(
                "gamma has to be positive, got {}",
                gamma
            )))
        }
    }

    /// Evaluates the kernel function.
    pub fn compute(&self, xi: ArrayView1<f64>, xj: ArrayView1<f64>) -> f64 {
        match *self {
            Kernel::Product => product::kernel(xi, xj),
            Kernel::Rbf { gamma } => gaussian::kernel(xi, xj, gamma),
        }
    }

    /// Evaluates `K(xi, xi)`.
    pub fn diag(&self, xi: ArrayView1<f64>) -> f64 {
        match *self {
            Kernel::Product => product::kernel(xi, xi),
            Kernel::Rbf { .. } => 1.0,
        }
    }
}

/// Builds the affinity matrix `M[i, j] = K(x_i, x_j)` for the kernel named `name`.
///
/// The name is resolved before any kernel value is computed.
pub fn affinity_matrix(x: ArrayView2<f64>, name: &str, params: &KernelParams) -> Result<Array2<f64>> {
    let kernel = Kernel::from_name(name, params, x.ncols())?;
    log::debug!("affinity matrix of {} samples with {:?}", x.nrows(), kernel);
    Ok(affinity_matrix_with(x, &kernel))
}

/// Builds the matrix `M[t, i] = K(a_t, b_i)` between two sets of samples.
pub fn cross_affinity(a: ArrayView2<f64>, b: ArrayView2<f64>, kernel: &Kernel) -> Result<Array2<f64>> {
    if a.ncols() != b.ncols() {
        return Err(SvmError::ShapeMismatch {
            what: "feature dimension",
            expected: b.ncols(),
            found: a.ncols(),
        });
    }
    Ok(pairwise(a, b, |xi, xj| kernel.compute(xi, xj)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn data() -> Array2<f64> {
        array![[1.0, 2.0], [-1.0, 0.5], [3.0, -2.0], [0.0, 0.0]]
    }

    #[test]
    fn product_is_dot() {
        let x = data();
        let m = affinity_matrix(x.view(), "product", &KernelParams::new()).unwrap();
        assert_eq!(m.dim(), (4, 4));
        for i in 0..4 {
            for j in 0..4 {
                assert_abs_diff_eq!(m[(i, j)], x.row(i).dot(&x.row(j)));
                assert_eq!(m[(i, j)], m[(j, i)]);
            }
        }
    }

    #[test]
    fn rbf_properties() {
        let x = data();
        let params = KernelParams::new().with_gamma(0.3);
        let m = affinity_matrix(x.view(), "rbf", &params).unwrap();
        for i in 0..4 {
            assert_abs_diff_eq!(m[(i, i)], 1.0);
            for j in 0..4 {
                assert_eq!(m[(i, j)], m[(j, i)]);
                assert!(m[(i, j)] > 0.0 && m[(i, j)] <= 1.0);
            }
        }
        // ‖x_0 - x_1‖² = 4 + 2.25
        assert_abs_diff_eq!(m[(0, 1)], (-0.3 * 6.25_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn rbf_default_gamma() {
        let kernel = Kernel::from_name("rbf", &KernelParams::new(), 4).unwrap();
        assert_eq!(kernel, Kernel::Rbf { gamma: 0.25 });
        assert!(matches!(
            Kernel::from_name("rbf", &KernelParams::new().with_gamma(-1.0), 4),
            Err(SvmError::InvalidParameter(_))
        ));
    }

    #[test]
    fn unknown_kernels_fail() {
        let x = data();
        assert_eq!(
            affinity_matrix(x.view(), "bogus", &KernelParams::new()),
            Err(SvmError::UnsupportedKernel("bogus".to_string()))
        );
        assert!(matches!(
            affinity_matrix(x.view(), "polynomial", &KernelParams::new()),
            Err(SvmError::NotImplemented(_))
        ));
    }

    #[test]
    fn cross_affinity_against_training_points() {
        let x = data();
        let kernel = Kernel::rbf(0.5).unwrap();
        let new = array![[1.0, 2.0], [0.0, 1.0]];
        let k = cross_affinity(new.view(), x.view(), &kernel).unwrap();
        assert_eq!(k.dim(), (2, 4));
        assert_abs_diff_eq!(k[(0, 0)], 1.0);
        assert_abs_diff_eq!(k[(1, 3)], (-0.5_f64).exp(), epsilon = 1e-12);
        assert!(cross_affinity(array![[1.0]].view(), x.view(), &kernel).is_err());
    }
}
