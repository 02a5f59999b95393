//! # Scalar operations (`ops`)
//!
//! Every function here builds one new node (or, for the derived operations, a
//! short chain of primitive nodes) and records its [`BackwardOp`] so the
//! backward pass can apply the chain rule.
//!
//! - [`arithmetic`]: the primitives `add`, `mul`, `pow`, `exp`, plus `neg`,
//!   `sub`, `div` composed from them, and the `std::ops` overloads.
//! - [`activation`]: the [`Activation`](activation::Activation) set.
//!
//! [`BackwardOp`]: crate::autograd::BackwardOp

pub mod activation;
pub mod arithmetic;

use crate::graph::{Graph, Value};

/// Anything that can stand on the right-hand side of a binary operation:
/// another [`Value`] of the same graph, or a raw `f64` that is promoted to a
/// leaf node before the edge is created.
pub trait Operand<'g> {
    fn into_value(self, graph: &'g Graph) -> Value<'g>;
}

impl<'g> Operand<'g> for Value<'g> {
    fn into_value(self, graph: &'g Graph) -> Value<'g> {
        assert!(
            std::ptr::eq(self.graph(), graph),
            "operands belong to different graphs"
        );
        self
    }
}

impl<'g> Operand<'g> for f64 {
    fn into_value(self, graph: &'g Graph) -> Value<'g> {
        graph.leaf(self)
    }
}
