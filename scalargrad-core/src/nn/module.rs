use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId, Value};
use crate::nn::Parameter;

/// The base trait for all network modules (neurons, layers, stacks).
///
/// A module owns [`Parameter`]s, which are leaf nodes living in a [`Graph`].
/// The module itself holds only their ids, so the same module can evaluate
/// into the graph any number of times.
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, appending the computation to `graph`.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::InputSizeMismatch`] if `inputs` does not
    /// match the module's fan-in.
    fn forward<'g>(
        &self,
        graph: &'g Graph,
        inputs: &[Value<'g>],
    ) -> Result<Vec<Value<'g>>, ScalarGradError>;

    /// All learnable parameters, including those of sub-modules.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Parameters with hierarchical names (e.g. "layer0.neuron3.weight.1").
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Node ids of every parameter, in `parameters()` order.
    fn parameter_ids(&self) -> Vec<NodeId> {
        self.parameters().iter().map(|p| p.id()).collect()
    }

    /// Resets the gradient of every parameter.
    fn zero_grad(&self, graph: &Graph) {
        graph.zero_grads(self.parameter_ids());
    }
}
