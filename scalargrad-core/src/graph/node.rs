use crate::autograd::BackwardOp;
use crate::graph::NodeId;

/// One scalar in the graph: forward value, gradient accumulator, and the
/// record of the operation that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: BackwardOp,
}

impl Node {
    pub(crate) fn new(data: f64, op: BackwardOp) -> Self {
        Node { data, grad: 0.0, op }
    }

    pub fn data(&self) -> f64 {
        self.data
    }

    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> BackwardOp {
        self.op
    }

    /// A leaf has no children: a literal, an input, or a parameter.
    pub fn is_leaf(&self) -> bool {
        matches!(self.op, BackwardOp::Leaf)
    }

    /// Operand ids in the order the operation received them.
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        self.op.children()
    }
}
