#![allow(dead_code)]
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Two Gaussian clusters around `(c, c)` (label +1) and `(-c, -c)` (label -1).
pub fn clusters(n_per_class: usize, c: f64, sigma: f64, seed: u64) -> (Array2<f64>, Array1<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, sigma).unwrap();
    let n = 2 * n_per_class;
    let mut x = Array2::zeros((n, 2));
    let mut y = Array1::zeros(n);
    for i in 0..n {
        let (center, label) = if i % 2 == 0 { (c, 1.0) } else { (-c, -1.0) };
        x[(i, 0)] = center + normal.sample(&mut rng);
        x[(i, 1)] = center + normal.sample(&mut rng);
        y[i] = label;
    }
    (x, y)
}

/// Points on a circle of radius 1 (label +1) and of radius 3 (label -1).
pub fn rings(n_per_class: usize) -> (Array2<f64>, Array1<f64>) {
    let n = 2 * n_per_class;
    let mut x = Array2::zeros((n, 2));
    let mut y = Array1::zeros(n);
    for k in 0..n_per_class {
        let phi = 2.0 * std::f64::consts::PI * k as f64 / n_per_class as f64;
        x[(2 * k, 0)] = phi.cos();
        x[(2 * k, 1)] = phi.sin();
        y[2 * k] = 1.0;
        x[(2 * k + 1, 0)] = 3.0 * (phi + 0.1).cos();
        x[(2 * k + 1, 1)] = 3.0 * (phi + 0.1).sin();
        y[2 * k + 1] = -1.0;
    }
    (x, y)
}

/// One-dimensional data with label noise: the best linear classifier gets
/// 10 of 11 samples right.
pub fn noisy_line() -> (Array2<f64>, Array1<f64>) {
    let x = Array2::from_shape_vec(
        (11, 1),
        vec![1.0, 1.5, 2.0, 3.0, 4.0, 0.4, -1.0, -2.0, -3.0, 2.5, -0.3],
    )
    .unwrap();
    let y = Array1::from(vec![
        1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0, 1.0,
    ]);
    (x, y)
}
