use crate::error::ScalarGradError;
use crate::graph::{Graph, Value};
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::activation::Activation;
use rand::Rng;

/// Fully-connected layer: every neuron sees the whole input vector.
#[derive(Debug, Clone)]
pub struct Dense {
    neurons: Vec<Neuron>,
    in_features: usize,
}

impl Dense {
    /// Creates `out_features` neurons, each with `in_features` weights.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        rng: &mut R,
        in_features: usize,
        out_features: usize,
        activation: Activation,
    ) -> Result<Self, ScalarGradError> {
        let neurons = (0..out_features)
            .map(|_| Neuron::new(graph, rng, in_features, activation))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dense {
            neurons,
            in_features,
        })
    }

    pub fn in_features(&self) -> usize {
        self.in_features
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }
}

impl Module for Dense {
    fn forward<'g>(
        &self,
        graph: &'g Graph,
        inputs: &[Value<'g>],
    ) -> Result<Vec<Value<'g>>, ScalarGradError> {
        self.neurons
            .iter()
            .map(|neuron| neuron.activate(graph, inputs))
            .collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut params = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                params.push((format!("neuron{}.{}", i, name), param));
            }
        }
        params
    }
}
