// crates/fracguard-core/src/checked/arith.rs

use crate::checked::ops;
use crate::error::{FracError, Result};

/// Arithmetic mode for one fraction operation.
///
/// `Checked` routes through [`ops`] and fails on overflow. `Wrapping` is plain
/// two's-complement machine arithmetic: it never fails except on a zero
/// divisor, which no integer mode can evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arith {
    Checked,
    Wrapping,
}

impl Arith {
    #[inline]
    pub fn from_protection(protected: bool) -> Arith {
        if protected {
            Arith::Checked
        } else {
            Arith::Wrapping
        }
    }

    #[inline]
    pub fn add(self, a: i32, b: i32) -> Result<i32> {
        match self {
            Arith::Checked => ops::add(a, b),
            Arith::Wrapping => Ok(a.wrapping_add(b)),
        }
    }

    #[inline]
    pub fn sub(self, a: i32, b: i32) -> Result<i32> {
        match self {
            Arith::Checked => ops::subtract(a, b),
            Arith::Wrapping => Ok(a.wrapping_sub(b)),
        }
    }

    #[inline]
    pub fn mul(self, a: i32, b: i32) -> Result<i32> {
        match self {
            Arith::Checked => ops::multiply(a, b),
            Arith::Wrapping => Ok(a.wrapping_mul(b)),
        }
    }

    #[inline]
    pub fn div(self, a: i32, b: i32) -> Result<i32> {
        match self {
            Arith::Checked => ops::divide(a, b),
            Arith::Wrapping if b == 0 => Err(FracError::DivisionByZero),
            Arith::Wrapping => Ok(a.wrapping_div(b)),
        }
    }

    #[inline]
    pub fn neg(self, a: i32) -> Result<i32> {
        match self {
            Arith::Checked => ops::negate(a),
            Arith::Wrapping => Ok(a.wrapping_neg()),
        }
    }
}
