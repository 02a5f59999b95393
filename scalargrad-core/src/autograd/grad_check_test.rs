use super::*;

const EPS: f64 = 1e-6;
const TOL: f64 = 1e-4;

#[test]
fn test_check_grad_product_passes() {
    let result = check_grad(|_, v| v[0] * v[1] + v[0].exp(), &[1.5, -0.7], EPS, TOL);
    assert_eq!(result, Ok(()));
}

#[test]
fn test_check_grad_division_passes() {
    let result = check_grad(|_, v| (v[0] - 2.0) / v[1], &[0.3, 1.7], EPS, TOL);
    assert_eq!(result, Ok(()));
}

#[test]
fn test_check_grad_reports_silu_mismatch() {
    match check_grad(|_, v| v[0].silu(), &[0.0], EPS, TOL) {
        Err(GradCheckError::GradientMismatch {
            input_index,
            analytical_grad,
            numerical_grad,
            ..
        }) => {
            assert_eq!(input_index, 0);
            approx::assert_relative_eq!(analytical_grad, 0.25, epsilon = 1e-12);
            approx::assert_relative_eq!(numerical_grad, 0.5, epsilon = 1e-6);
        }
        other => panic!("expected a gradient mismatch, got {:?}", other),
    }
}

#[test]
fn test_check_grad_rejects_nan_input() {
    let result = check_grad(|_, v| v[0] * 2.0, &[f64::NAN], EPS, TOL);
    assert_eq!(
        result,
        Err(GradCheckError::GraphError(ScalarGradError::NonNumericLiteral(
            "NaN".to_string()
        )))
    );
}

#[test]
fn test_check_grad_rejects_invalid_epsilon() {
    assert_eq!(
        check_grad(|_, v| v[0], &[1.0], 0.0, TOL),
        Err(GradCheckError::InvalidEpsilon(0.0))
    );
    assert!(matches!(
        check_grad(|_, v| v[0], &[1.0], f64::NAN, TOL),
        Err(GradCheckError::InvalidEpsilon(_))
    ));
}

#[test]
fn test_check_grad_overflow_is_reported() {
    let result = check_grad(|_, v| v[0].exp(), &[1000.0], EPS, TOL);
    assert!(matches!(
        result,
        Err(GradCheckError::NumericalGradNaNOrInfinite { input_index: 0, .. })
    ));
}

#[test]
fn test_check_grad_uses_graph_argument() {
    let result = check_grad(
        |graph, v| {
            let offset = graph.leaf(3.0);
            (v[0] + offset).tanh()
        },
        &[-2.5],
        EPS,
        TOL,
    );
    assert_eq!(result, Ok(()));
}
