use crate::error::ScalarGradError;
use crate::graph::{Graph, Value};

/// Sum (not mean) of squared errors: `Σ (prediction − target)^2`.
///
/// Each square is a `pow` node, so the loss is an ordinary graph node whose
/// backward pass reaches every prediction. An empty batch yields a zero leaf.
///
/// # Errors
/// [`ScalarGradError::DatasetMismatch`] if the slices differ in length.
pub fn sum_squared_error<'g>(
    graph: &'g Graph,
    predictions: &[Value<'g>],
    targets: &[f64],
) -> Result<Value<'g>, ScalarGradError> {
    if predictions.len() != targets.len() {
        return Err(ScalarGradError::DatasetMismatch {
            inputs: predictions.len(),
            targets: targets.len(),
        });
    }
    let mut terms = predictions
        .iter()
        .zip(targets)
        .map(|(&predicted, &expected)| (predicted - expected).pow(2.0));
    let first = match terms.next() {
        Some(term) => term,
        None => return Ok(graph.leaf(0.0)),
    };
    Ok(terms.fold(first, |loss, term| loss + term))
}

#[cfg(test)]
#[path = "sse_test.rs"]
mod tests;
