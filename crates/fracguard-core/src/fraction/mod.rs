// crates/fracguard-core/src/fraction/mod.rs

//! Rational value type over i32 with opt-in overflow protection.
//!
//! A `Fraction` is always stored reduced, with the sign carried by the
//! numerator. The protection flag selects [`Arith::Checked`] or
//! [`Arith::Wrapping`] for every operation that produces a new value; binary
//! operations resolve it as the OR of both operands before computing.
//!
//! [`Arith::Checked`]: crate::checked::Arith::Checked
//! [`Arith::Wrapping`]: crate::checked::Arith::Wrapping

mod arith;
mod cmp;
mod format;
mod normalize;

use crate::error::{FracError, Result};
use crate::numeric::sign;

pub use arith::protection_of;

#[derive(Clone, Copy)]
pub struct Fraction {
    numerator: i32,
    denominator: i32,
    protected: bool,
}

impl Fraction {
    pub const ZERO: Fraction = Fraction::from_integer(0);
    pub const ONE: Fraction = Fraction::from_integer(1);
    /// Zero-denominator sentinel. Only reachable without protection.
    pub const NAN: Fraction = Fraction {
        numerator: 0,
        denominator: 0,
        protected: false,
    };

    /// Build `numerator/denominator` and normalize it.
    ///
    /// With `protected` set, a zero denominator is `DivisionByZero` and any
    /// step of the reduction that overflows is `NumericOverflow`. Without it
    /// a zero denominator yields [`Fraction::NAN`] and reduction wraps.
    pub fn new(numerator: i32, denominator: i32, protected: bool) -> Result<Fraction> {
        let (numerator, denominator) = normalize::normalize(numerator, denominator, protected)?;
        Ok(Fraction {
            numerator,
            denominator,
            protected,
        })
    }

    #[inline]
    pub fn protected(numerator: i32, denominator: i32) -> Result<Fraction> {
        Fraction::new(numerator, denominator, true)
    }

    const fn from_integer(n: i32) -> Fraction {
        Fraction {
            numerator: n,
            denominator: 1,
            protected: false,
        }
    }

    #[inline]
    pub fn numerator(&self) -> i32 {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> i32 {
        self.denominator
    }

    #[inline]
    pub fn is_protected(&self) -> bool {
        self.protected
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.denominator == 0
    }

    /// -1, 0 or 1. The sentinel has sign 0.
    #[inline]
    pub fn signum(&self) -> i32 {
        sign(self.numerator) * sign(self.denominator)
    }

    /// Replace the numerator, keeping the current denominator, and re-normalize.
    /// `self` is untouched on error.
    pub fn set_numerator(&mut self, numerator: i32) -> Result<()> {
        *self = Fraction::new(numerator, self.denominator, self.protected)?;
        Ok(())
    }

    /// Replace the denominator, keeping the current numerator, and re-normalize.
    /// Zero without protection turns the value into the sentinel.
    pub fn set_denominator(&mut self, denominator: i32) -> Result<()> {
        *self = Fraction::new(self.numerator, denominator, self.protected)?;
        Ok(())
    }

    /// Same value under a different protection flag.
    ///
    /// Protecting the sentinel fails with `DivisionByZero`.
    pub fn with_protection(self, protected: bool) -> Result<Fraction> {
        Fraction::new(self.numerator, self.denominator, protected)
    }

    /// Float coercion. Fails on a zero denominator whatever the flag says.
    pub fn to_f32(&self) -> Result<f32> {
        if self.denominator == 0 {
            return Err(FracError::DivisionByZero);
        }
        Ok(self.numerator as f32 / self.denominator as f32)
    }

    pub fn to_f64(&self) -> Result<f64> {
        if self.denominator == 0 {
            return Err(FracError::DivisionByZero);
        }
        Ok(self.numerator as f64 / self.denominator as f64)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::ZERO
    }
}

impl From<i32> for Fraction {
    #[inline]
    fn from(n: i32) -> Self {
        Fraction::from_integer(n)
    }
}

impl TryFrom<Fraction> for f32 {
    type Error = FracError;

    fn try_from(f: Fraction) -> Result<f32> {
        f.to_f32()
    }
}

impl TryFrom<Fraction> for f64 {
    type Error = FracError;

    fn try_from(f: Fraction) -> Result<f64> {
        f.to_f64()
    }
}
