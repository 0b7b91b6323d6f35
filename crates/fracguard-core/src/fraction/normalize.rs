// crates/fracguard-core/src/fraction/normalize.rs

use crate::checked::Arith;
use crate::error::{FracError, Result};
use crate::numeric::{gcd, sign};

/// Reduce to lowest terms, then move the sign onto the numerator.
///
/// Idempotent on canonical input. Without protection every zero denominator
/// collapses to `(0, 0)`.
///
/// A denominator of `i32::MIN` left after reduction (odd numerator) cannot
/// be negated: `2^31` is not representable. With protection that is
/// `NumericOverflow`; without it the sign stays on the denominator, so
/// `1/MIN` and `-1/MIN` remain distinct and keep their values.
pub(crate) fn normalize(numerator: i32, denominator: i32, protected: bool) -> Result<(i32, i32)> {
    if denominator == 0 {
        if protected {
            return Err(FracError::DivisionByZero);
        }
        return Ok((0, 0));
    }

    let arith = Arith::from_protection(protected);

    // denominator != 0, so g != 0. Euclid may hand back a negative divisor
    // (gcd(MIN, 5) == -1); divide by its magnitude so MIN/5 reduces without
    // negating MIN. g == MIN only for gcd(MIN, MIN) or gcd(0, MIN), which
    // divide evenly as they are.
    let g = gcd(numerator, denominator);
    let g = g.checked_abs().unwrap_or(g);
    let numerator = arith.div(numerator, g)?;
    let denominator = arith.div(denominator, g)?;

    fix_sign(arith, numerator, denominator)
}

#[inline]
fn fix_sign(arith: Arith, numerator: i32, denominator: i32) -> Result<(i32, i32)> {
    if sign(denominator) >= 0 {
        return Ok((numerator, denominator));
    }
    if arith == Arith::Wrapping && denominator == i32::MIN {
        return Ok((numerator, denominator));
    }
    Ok((arith.neg(numerator)?, arith.neg(denominator)?))
}
