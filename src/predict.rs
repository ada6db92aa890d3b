use ndarray::ArrayView1;

/// Evaluate the decision function `Σ α_i y_i K(x_i, x) + b` for a particular sample.
///
/// `ki` holds the kernel values of the sample against the training points.
pub fn predict(ki: ArrayView1<f64>, a: ArrayView1<f64>, y: ArrayView1<f64>, b: f64) -> f64 {
    let mut v = 0.0;
    for ((&ai, &yi), &kij) in a.iter().zip(y.iter()).zip(ki.iter()) {
        if ai == 0.0 {
            continue;
        }
        v += ai * yi * kij;
    }
    v + b
}
