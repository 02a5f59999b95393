//! Activation function set.
//!
//! Each [`Activation`] is a unary node with one child edge. The forward value
//! and the local derivative come from [`Activation::forward`] and
//! [`Activation::derivative`]; the backward pass multiplies the latter by the
//! node's gradient.

mod kind;
mod names;

pub use kind::{Activation, LEAKY_RELU_SLOPE, SELU_ALPHA, SELU_SCALE};

use crate::autograd::BackwardOp;
use crate::graph::Value;

/// Applies `kind` to `input` and records the edge.
pub fn activation_op(input: Value<'_>, kind: Activation) -> Value<'_> {
    let graph = input.graph();
    let id = graph.push(
        kind.forward(input.data()),
        BackwardOp::Activation {
            kind,
            input: input.id(),
        },
    );
    graph.value(id)
}

impl<'g> Value<'g> {
    /// Applies any activation by variant.
    pub fn activate(self, kind: Activation) -> Value<'g> {
        activation_op(self, kind)
    }

    pub fn identity(self) -> Value<'g> {
        activation_op(self, Activation::Identity)
    }

    pub fn heaviside(self) -> Value<'g> {
        activation_op(self, Activation::Heaviside)
    }

    pub fn sigmoid(self) -> Value<'g> {
        activation_op(self, Activation::Sigmoid)
    }

    pub fn tanh(self) -> Value<'g> {
        activation_op(self, Activation::Tanh)
    }

    pub fn relu(self) -> Value<'g> {
        activation_op(self, Activation::Relu)
    }

    pub fn gelu(self) -> Value<'g> {
        activation_op(self, Activation::Gelu)
    }

    pub fn softplus(self) -> Value<'g> {
        activation_op(self, Activation::Softplus)
    }

    pub fn selu(self) -> Value<'g> {
        activation_op(self, Activation::Selu)
    }

    /// Leaky ReLU with slope [`LEAKY_RELU_SLOPE`] below zero.
    pub fn leaky_relu(self) -> Value<'g> {
        activation_op(self, Activation::LeakyRelu)
    }

    pub fn silu(self) -> Value<'g> {
        activation_op(self, Activation::Silu)
    }

    pub fn gaussian(self) -> Value<'g> {
        activation_op(self, Activation::Gaussian)
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
