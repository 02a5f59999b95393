use crate::error::ScalarGradError;
use crate::graph::{Graph, Value};
use crate::nn::layers::dense::Dense;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::activation::Activation;
use log::debug;
use rand::Rng;

/// Result of [`Mlp::predict`]: a network whose last layer has one unit yields
/// that node directly.
#[derive(Debug, Clone)]
pub enum MlpOutput<'g> {
    Single(Value<'g>),
    Many(Vec<Value<'g>>),
}

impl<'g> MlpOutput<'g> {
    /// The single output node, if the network has exactly one output.
    pub fn into_single(self) -> Option<Value<'g>> {
        match self {
            MlpOutput::Single(value) => Some(value),
            MlpOutput::Many(_) => None,
        }
    }

    pub fn into_vec(self) -> Vec<Value<'g>> {
        match self {
            MlpOutput::Single(value) => vec![value],
            MlpOutput::Many(values) => values,
        }
    }

    /// Forward values of the outputs.
    pub fn data(&self) -> Vec<f64> {
        match self {
            MlpOutput::Single(value) => vec![value.data()],
            MlpOutput::Many(values) => values.iter().map(|v| v.data()).collect(),
        }
    }
}

/// Multilayer perceptron: a stack of [`Dense`] layers sharing one activation.
///
/// The activation is applied in every layer, the output layer included.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Dense>,
    n_inputs: usize,
    activation: Activation,
}

impl Mlp {
    /// Creates a network with `n_inputs` inputs and one layer per entry of
    /// `layer_sizes` (the last entry is the output width).
    ///
    /// Parameters are drawn layer by layer, neuron by neuron, from `rng`.
    ///
    /// # Errors
    /// [`ScalarGradError::InvalidArchitecture`] for zero inputs, no layers, or
    /// a layer of width zero.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        rng: &mut R,
        n_inputs: usize,
        layer_sizes: &[usize],
        activation: Activation,
    ) -> Result<Self, ScalarGradError> {
        if n_inputs == 0 {
            return Err(ScalarGradError::InvalidArchitecture(
                "network needs at least one input".to_string(),
            ));
        }
        if layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidArchitecture(
                "network needs at least one layer".to_string(),
            ));
        }
        if let Some(index) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(ScalarGradError::InvalidArchitecture(format!(
                "layer {} has zero neurons",
                index
            )));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_inputs;
        for &size in layer_sizes {
            layers.push(Dense::new(graph, rng, fan_in, size, activation)?);
            fan_in = size;
        }

        let mlp = Mlp {
            layers,
            n_inputs,
            activation,
        };
        debug!(
            "Mlp::new: {} inputs, layers {:?}, activation {}, {} parameters",
            n_inputs,
            layer_sizes,
            activation,
            mlp.parameters().len()
        );
        Ok(mlp)
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }

    /// Width of every layer, output layer last.
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(|l| l.out_features()).collect()
    }

    /// Number of output units.
    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, |l| l.out_features())
    }

    /// Evaluates the network on raw inputs, promoting each to a leaf.
    ///
    /// # Errors
    /// [`ScalarGradError::InputSizeMismatch`] if `inputs.len() != n_inputs`.
    pub fn predict<'g>(
        &self,
        graph: &'g Graph,
        inputs: &[f64],
    ) -> Result<MlpOutput<'g>, ScalarGradError> {
        let leaves: Vec<Value<'g>> = inputs.iter().map(|&x| graph.leaf(x)).collect();
        let outputs = self.forward(graph, &leaves)?;
        Ok(if outputs.len() == 1 {
            MlpOutput::Single(outputs[0])
        } else {
            MlpOutput::Many(outputs)
        })
    }
}

impl Module for Mlp {
    fn forward<'g>(
        &self,
        graph: &'g Graph,
        inputs: &[Value<'g>],
    ) -> Result<Vec<Value<'g>>, ScalarGradError> {
        if inputs.len() != self.n_inputs {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.n_inputs,
                actual: inputs.len(),
            });
        }
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(graph, &activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                params.push((format!("layer{}.{}", i, name), param));
            }
        }
        params
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
