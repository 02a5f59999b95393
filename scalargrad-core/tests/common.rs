// Shared helpers for the integration tests. Each test binary uses a subset,
// hence the allow(dead_code).

#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The four-example regression set used throughout the end-to-end tests.
#[allow(dead_code)]
pub(crate) fn toy_data() -> (Vec<Vec<f64>>, Vec<f64>) {
    let xs = vec![
        vec![2.0, 3.0, -1.0],
        vec![3.0, -1.0, 0.5],
        vec![0.5, 1.0, 1.0],
        vec![1.0, 1.0, -1.0],
    ];
    let ys = vec![1.0, -1.0, -1.0, 1.0];
    (xs, ys)
}
