use crate::graph::{Node, NodeId};
use crate::ops::activation::Activation;

/// The operation that produced a node, with the operand ids it needs for the
/// chain rule.
///
/// Only primitives get a variant. Subtraction, negation, and division are
/// built from these and have no gradient logic of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackwardOp {
    /// Literal, input, or parameter. Nothing to propagate.
    Leaf,
    /// `a + b`
    Add(NodeId, NodeId),
    /// `a * b`
    Mul(NodeId, NodeId),
    /// `base ^ exponent`
    Pow { base: NodeId, exponent: NodeId },
    /// `e ^ a`
    Exp(NodeId),
    /// A unary nonlinearity applied to `input`.
    Activation { kind: Activation, input: NodeId },
}

impl BackwardOp {
    /// Operand ids, in operand order.
    pub fn children(self) -> impl Iterator<Item = NodeId> {
        let (first, second) = match self {
            BackwardOp::Leaf => (None, None),
            BackwardOp::Add(a, b) | BackwardOp::Mul(a, b) => (Some(a), Some(b)),
            BackwardOp::Pow { base, exponent } => (Some(base), Some(exponent)),
            BackwardOp::Exp(input) | BackwardOp::Activation { input, .. } => (Some(input), None),
        };
        first.into_iter().chain(second)
    }

    /// Adds `d(out)/d(child) * upstream` into every child's slot of `adjoint`.
    ///
    /// `out_data` is this node's forward value and `upstream` the adjoint
    /// reaching it in the current pass. An operation whose operands are the
    /// same node (`x * x`) adds both contributions to that node's slot.
    pub(crate) fn apply(self, out_data: f64, upstream: f64, nodes: &[Node], adjoint: &mut [f64]) {
        match self {
            BackwardOp::Leaf => {}
            BackwardOp::Add(a, b) => {
                adjoint[a.0] += upstream;
                adjoint[b.0] += upstream;
            }
            BackwardOp::Mul(a, b) => {
                adjoint[a.0] += nodes[b.0].data * upstream;
                adjoint[b.0] += nodes[a.0].data * upstream;
            }
            BackwardOp::Pow { base, exponent } => {
                let (b, e) = (nodes[base.0].data, nodes[exponent.0].data);
                adjoint[base.0] += e * b.powf(e - 1.0) * upstream;
                // d/de b^e = b^e ln(b), undefined for b <= 0: contribute nothing there
                let d_exponent = if b > 0.0 { b.powf(e) * b.ln() } else { 0.0 };
                adjoint[exponent.0] += d_exponent * upstream;
            }
            BackwardOp::Exp(input) => {
                adjoint[input.0] += out_data * upstream;
            }
            BackwardOp::Activation { kind, input } => {
                let x = nodes[input.0].data;
                adjoint[input.0] += kind.derivative(x, out_data) * upstream;
            }
        }
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
