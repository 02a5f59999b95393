use crate::autograd::BackwardOp;
use crate::graph::Value;
use crate::ops::Operand;

/// `base ^ exponent`.
///
/// Both operands are differentiable: `e * b^(e-1)` for the base and
/// `b^e * ln(b)` for the exponent. The exponent contribution is 0 when the
/// base is not positive, where the logarithm is undefined.
pub fn pow_op<'g>(base: Value<'g>, exponent: impl Operand<'g>) -> Value<'g> {
    let graph = base.graph();
    let exponent = exponent.into_value(graph);
    let id = graph.push(
        base.data().powf(exponent.data()),
        BackwardOp::Pow {
            base: base.id(),
            exponent: exponent.id(),
        },
    );
    graph.value(id)
}
