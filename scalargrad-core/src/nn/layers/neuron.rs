use crate::error::ScalarGradError;
use crate::graph::{Graph, Value};
use crate::nn::init::{uniform, uniform_vec, DEFAULT_INIT_RANGE};
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::activation::Activation;
use rand::Rng;

/// A single unit: `activation(bias + Σ weight_i * input_i)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights and a bias, all drawn from
    /// [`DEFAULT_INIT_RANGE`]. Weights are drawn before the bias.
    pub fn new<R: Rng + ?Sized>(
        graph: &Graph,
        rng: &mut R,
        n_inputs: usize,
        activation: Activation,
    ) -> Result<Self, ScalarGradError> {
        let (low, high) = DEFAULT_INIT_RANGE;
        let weights = uniform_vec(graph, rng, n_inputs, low, high)?
            .into_iter()
            .enumerate()
            .map(|(i, id)| Parameter::new(id, Some(format!("weight.{}", i))))
            .collect();
        let bias = Parameter::new(uniform(graph, rng, low, high)?, Some("bias".to_string()));
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Builds a neuron around existing parameters.
    pub fn from_parameters(weights: Vec<Parameter>, bias: Parameter, activation: Activation) -> Self {
        Neuron {
            weights,
            bias,
            activation,
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    /// Forward pass for one neuron. The weighted sum starts from the bias and
    /// adds the products left to right.
    pub fn activate<'g>(
        &self,
        graph: &'g Graph,
        inputs: &[Value<'g>],
    ) -> Result<Value<'g>, ScalarGradError> {
        if inputs.len() != self.weights.len() {
            return Err(ScalarGradError::InputSizeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let weighted_sum = self
            .weights
            .iter()
            .zip(inputs)
            .fold(self.bias.value(graph), |acc, (w, &x)| acc + w.value(graph) * x);
        Ok(weighted_sum.activate(self.activation))
    }
}

impl Module for Neuron {
    fn forward<'g>(
        &self,
        graph: &'g Graph,
        inputs: &[Value<'g>],
    ) -> Result<Vec<Value<'g>>, ScalarGradError> {
        Ok(vec![self.activate(graph, inputs)?])
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.parameters()
            .into_iter()
            .map(|p| (p.name().unwrap_or("param").to_string(), p))
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
