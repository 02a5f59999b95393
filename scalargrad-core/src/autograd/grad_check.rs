use crate::error::ScalarGradError;
use crate::graph::{Graph, Value};
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },

    #[error("Epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f64),

    #[error("Graph error during gradient check: {0}")]
    GraphError(#[from] ScalarGradError),
}

/// Checks analytical gradients against central finite differences.
///
/// `func` builds a scalar expression from leaves holding `inputs`. It is run
/// once on a fresh graph with a backward pass, then twice more per input with
/// that input shifted by `±epsilon`. The numerical estimate
/// `(f(x+ε) − f(x−ε)) / 2ε` must agree with the analytical gradient within
/// `tolerance`, either absolutely or relative to the larger of the two.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Value<'g>,
{
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(GradCheckError::InvalidEpsilon(epsilon));
    }

    // --- Analytical pass ---
    let graph = Graph::new();
    let leaves = inputs
        .iter()
        .map(|&x| graph.from_literal(x))
        .collect::<Result<Vec<_>, _>>()?;
    let output = func(&graph, &leaves);
    output.backward();
    let analytical: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    // --- Numerical pass, one input at a time ---
    for (input_index, &analytical_grad) in analytical.iter().enumerate() {
        let loss_plus = evaluate(&func, inputs, input_index, epsilon);
        let loss_minus = evaluate(&func, inputs, input_index, -epsilon);
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index,
                value: analytical_grad,
            });
        }

        debug!(
            "check_grad: input {} analytical {} numerical {}",
            input_index, analytical_grad, numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

/// Forward-only evaluation with one input shifted by `delta`.
fn evaluate<F>(func: &F, inputs: &[f64], index: usize, delta: f64) -> f64
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Value<'g>,
{
    let graph = Graph::with_capacity(inputs.len());
    let leaves: Vec<Value<'_>> = inputs
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.leaf(if i == index { x + delta } else { x }))
        .collect();
    let output = func(&graph, &leaves);
    output.data()
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
