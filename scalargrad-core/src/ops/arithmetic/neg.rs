use crate::graph::Value;
use crate::ops::arithmetic::mul_op;

/// `-a`, built as `a * -1`.
pub fn neg_op(a: Value<'_>) -> Value<'_> {
    mul_op(a, -1.0)
}
