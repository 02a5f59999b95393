use crate::autograd::BackwardOp;
use crate::graph::Value;

/// `e ^ a`. The backward rule reuses the forward value.
pub fn exp_op(a: Value<'_>) -> Value<'_> {
    let graph = a.graph();
    let id = graph.push(a.data().exp(), BackwardOp::Exp(a.id()));
    graph.value(id)
}
