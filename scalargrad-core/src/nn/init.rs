use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Range weights and biases are drawn from by default.
pub const DEFAULT_INIT_RANGE: (f64, f64) = (-1.0, 1.0);

/// Creates one leaf drawn uniformly from `[low, high]`.
///
/// The random source is passed in explicitly; seeding it is the caller's job.
///
/// # Errors
/// [`ScalarGradError::InvalidConfig`] if the bounds are not finite or `low > high`.
pub fn uniform<R: Rng + ?Sized>(
    graph: &Graph,
    rng: &mut R,
    low: f64,
    high: f64,
) -> Result<NodeId, ScalarGradError> {
    Ok(uniform_vec(graph, rng, 1, low, high)?[0])
}

/// Creates `count` leaves drawn uniformly from `[low, high]`, in draw order.
pub fn uniform_vec<R: Rng + ?Sized>(
    graph: &Graph,
    rng: &mut R,
    count: usize,
    low: f64,
    high: f64,
) -> Result<Vec<NodeId>, ScalarGradError> {
    if !(low.is_finite() && high.is_finite() && low <= high) {
        return Err(ScalarGradError::InvalidConfig(format!(
            "invalid uniform range [{}, {}]",
            low, high
        )));
    }
    let distribution = Uniform::new_inclusive(low, high);
    Ok((0..count)
        .map(|_| graph.leaf(distribution.sample(rng)).id())
        .collect())
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
