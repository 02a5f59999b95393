use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};

/// Trait defining the common interface for all optimizers.
pub trait Optimizer {
    /// Performs a single optimization step on every managed parameter,
    /// using the gradients currently stored in `graph`.
    fn step(&mut self, graph: &Graph) -> Result<(), ScalarGradError>;

    /// Clears the gradients of all managed parameters.
    ///
    /// Must be called before each backward pass: the engine accumulates.
    fn zero_grad(&mut self, graph: &Graph);

    /// Ids of the managed parameters.
    fn params(&self) -> &[NodeId];

    fn learning_rate(&self) -> f64;
}
