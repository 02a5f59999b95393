use approx::relative_eq;

/// Checks that two scalars agree within `tolerance`, either absolutely or
/// relative to the larger magnitude.
/// Panics with both values and the difference otherwise.
pub fn check_scalar_near(actual: f64, expected: f64, tolerance: f64) {
    if !relative_eq!(actual, expected, epsilon = tolerance, max_relative = tolerance) {
        panic!(
            "Scalar mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            actual,
            expected,
            (actual - expected).abs(),
            tolerance
        );
    }
}

/// Central finite-difference estimate of `f'(x)`.
pub fn central_difference<F: Fn(f64) -> f64>(f: F, x: f64, epsilon: f64) -> f64 {
    (f(x + epsilon) - f(x - epsilon)) / (2.0 * epsilon)
}
