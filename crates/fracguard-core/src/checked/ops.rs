// crates/fracguard-core/src/checked/ops.rs

//! Bounds-checked i32 arithmetic.
//!
//! Every function checks its operands against `i32::MIN`/`i32::MAX` before
//! performing the operation, so the native operator never sees an input that
//! would wrap. The product check divides the bound instead of multiplying.

use crate::error::{FracError, Result};

/// `a + b`, or `NumericOverflow` if the sum leaves the i32 range.
#[inline]
pub fn add(a: i32, b: i32) -> Result<i32> {
    if a > 0 && b > i32::MAX - a {
        return Err(FracError::NumericOverflow);
    }
    if a < 0 && b < i32::MIN - a {
        return Err(FracError::NumericOverflow);
    }
    Ok(a + b)
}

/// `a - b` as `a + (-b)`.
///
/// Negating `i32::MIN` is itself an overflow, so `subtract(x, i32::MIN)`
/// fails for every `x`.
#[inline]
pub fn subtract(a: i32, b: i32) -> Result<i32> {
    add(a, negate(b)?)
}

/// `a * b`, or `NumericOverflow` if the product leaves the i32 range.
pub fn multiply(a: i32, b: i32) -> Result<i32> {
    if a == 0 || b == 0 {
        return Ok(0);
    }

    if (a > 0) == (b > 0) {
        // Same sign: compare positive magnitudes.
        let (a, b) = if a < 0 {
            if a == i32::MIN || b == i32::MIN {
                return Err(FracError::NumericOverflow);
            }
            (-a, -b)
        } else {
            (a, b)
        };

        if a > i32::MAX / b {
            return Err(FracError::NumericOverflow);
        }
        Ok(a * b)
    } else {
        let (neg, pos) = if a < 0 { (a, b) } else { (b, a) };

        // MIN / pos truncates toward zero, which is the ceiling here.
        if neg < i32::MIN / pos {
            return Err(FracError::NumericOverflow);
        }
        Ok(neg * pos)
    }
}

/// `a / b` truncated toward zero.
///
/// `i32::MIN / -1` is the only quotient that does not fit. A zero divisor is
/// reported as `DivisionByZero` rather than trapping.
#[inline]
pub fn divide(a: i32, b: i32) -> Result<i32> {
    if b == 0 {
        return Err(FracError::DivisionByZero);
    }
    if a == i32::MIN && b == -1 {
        return Err(FracError::NumericOverflow);
    }
    Ok(a / b)
}

#[inline]
pub fn negate(a: i32) -> Result<i32> {
    if a == i32::MIN {
        return Err(FracError::NumericOverflow);
    }
    Ok(-a)
}
