use crate::graph::Value;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::Operand;

/// `a - b`, built as `a + (-b)`.
pub fn sub_op<'g>(a: Value<'g>, b: impl Operand<'g>) -> Value<'g> {
    let b = b.into_value(a.graph());
    add_op(a, neg_op(b))
}
