use crate::autograd::BackwardOp;
use crate::graph::Value;
use crate::ops::Operand;

/// `a + b`. Local derivative 1 for both operands.
pub fn add_op<'g>(a: Value<'g>, b: impl Operand<'g>) -> Value<'g> {
    let graph = a.graph();
    let b = b.into_value(graph);
    let id = graph.push(a.data() + b.data(), BackwardOp::Add(a.id(), b.id()));
    graph.value(id)
}
