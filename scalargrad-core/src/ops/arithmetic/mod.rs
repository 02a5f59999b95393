//! Arithmetic operator set.
//!
//! `add`, `mul`, `pow`, and `exp` are primitives with their own backward rule.
//! `neg`, `sub`, and `div` are compositions:
//! `-a = a * -1`, `a - b = a + (-b)`, `a / b = a * b^-1`.

pub mod add;
pub mod div;
pub mod exp;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use exp::exp_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;

use crate::graph::Value;
use crate::ops::Operand;
use std::ops::{Add, Div, Mul, Neg, Sub};

impl<'g> Value<'g> {
    /// `self ^ exponent`. The exponent may be a node or a literal.
    pub fn pow(self, exponent: impl Operand<'g>) -> Value<'g> {
        pow_op(self, exponent)
    }

    /// `e ^ self`.
    pub fn exp(self) -> Value<'g> {
        exp_op(self)
    }
}

// --- Value (op) Value / f64 ---

impl<'g, R: Operand<'g>> Add<R> for Value<'g> {
    type Output = Value<'g>;

    fn add(self, rhs: R) -> Value<'g> {
        add_op(self, rhs)
    }
}

impl<'g, R: Operand<'g>> Sub<R> for Value<'g> {
    type Output = Value<'g>;

    fn sub(self, rhs: R) -> Value<'g> {
        sub_op(self, rhs)
    }
}

impl<'g, R: Operand<'g>> Mul<R> for Value<'g> {
    type Output = Value<'g>;

    fn mul(self, rhs: R) -> Value<'g> {
        mul_op(self, rhs)
    }
}

impl<'g, R: Operand<'g>> Div<R> for Value<'g> {
    type Output = Value<'g>;

    fn div(self, rhs: R) -> Value<'g> {
        div_op(self, rhs)
    }
}

impl<'g> Neg for Value<'g> {
    type Output = Value<'g>;

    fn neg(self) -> Value<'g> {
        neg_op(self)
    }
}

// --- Reflected: f64 (op) Value ---
// The literal is promoted first so it stays the left operand of the graph edge.

impl<'g> Add<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn add(self, rhs: Value<'g>) -> Value<'g> {
        add_op(rhs.graph().leaf(self), rhs)
    }
}

impl<'g> Sub<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn sub(self, rhs: Value<'g>) -> Value<'g> {
        sub_op(rhs.graph().leaf(self), rhs)
    }
}

impl<'g> Mul<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn mul(self, rhs: Value<'g>) -> Value<'g> {
        mul_op(rhs.graph().leaf(self), rhs)
    }
}

impl<'g> Div<Value<'g>> for f64 {
    type Output = Value<'g>;

    fn div(self, rhs: Value<'g>) -> Value<'g> {
        div_op(rhs.graph().leaf(self), rhs)
    }
}

#[cfg(test)]
#[path = "arithmetic_test.rs"]
mod tests;
