use crate::graph::Value;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::ops::Operand;

/// `a / b`, built as `a * b^-1`.
///
/// No division-by-zero check: `b == 0` yields an infinite forward value, as
/// the underlying `pow` does.
pub fn div_op<'g>(a: Value<'g>, b: impl Operand<'g>) -> Value<'g> {
    let b = b.into_value(a.graph());
    mul_op(a, pow_op(b, -1.0))
}
