use crate::autograd::BackwardOp;
use crate::graph::Value;
use crate::ops::Operand;

/// `a * b`. Local derivatives: `b` with respect to `a`, `a` with respect to `b`.
pub fn mul_op<'g>(a: Value<'g>, b: impl Operand<'g>) -> Value<'g> {
    let graph = a.graph();
    let b = b.into_value(graph);
    let id = graph.push(a.data() * b.data(), BackwardOp::Mul(a.id(), b.id()));
    graph.value(id)
}
