// crates/fracguard-core/src/fraction/arith.rs

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::checked::Arith;
use crate::error::Result;
use crate::fraction::Fraction;
use crate::numeric::gcd;

/// Protection of a binary result: set if either operand is protected.
#[inline]
pub fn protection_of(a: &Fraction, b: &Fraction) -> bool {
    a.protected || b.protected
}

impl Fraction {
    /// `a/b + c/d` scaled through `g = gcd(b, d)`:
    /// `(a*(d/g) + c*(b/g)) / (b*(d/g))`.
    pub fn checked_add(self, rhs: Fraction) -> Result<Fraction> {
        let protected = protection_of(&self, &rhs);
        let arith = Arith::from_protection(protected);

        // Both denominators are zero only for sentinel + sentinel.
        let g = match gcd(self.denominator, rhs.denominator) {
            0 => 1,
            g => g,
        };
        let lhs_scale = arith.div(self.denominator, g)?;
        let rhs_scale = arith.div(rhs.denominator, g)?;

        let numerator = arith.add(
            arith.mul(self.numerator, rhs_scale)?,
            arith.mul(rhs.numerator, lhs_scale)?,
        )?;
        let denominator = arith.mul(self.denominator, rhs_scale)?;

        Fraction::new(numerator, denominator, protected)
    }

    /// `self + (-rhs)`, negating under the resolved protection.
    pub fn checked_sub(self, rhs: Fraction) -> Result<Fraction> {
        let protected = protection_of(&self, &rhs);
        let negated = Fraction {
            numerator: Arith::from_protection(protected).neg(rhs.numerator)?,
            ..rhs
        };
        self.checked_add(negated)
    }

    pub fn checked_mul(self, rhs: Fraction) -> Result<Fraction> {
        let protected = protection_of(&self, &rhs);
        let arith = Arith::from_protection(protected);

        let numerator = arith.mul(self.numerator, rhs.numerator)?;
        let denominator = arith.mul(self.denominator, rhs.denominator)?;

        Fraction::new(numerator, denominator, protected)
    }

    /// Multiply by the reciprocal of `rhs`. A zero `rhs` leaves a zero
    /// denominator for normalization to reject (or turn into the sentinel).
    pub fn checked_div(self, rhs: Fraction) -> Result<Fraction> {
        let protected = protection_of(&self, &rhs);
        let arith = Arith::from_protection(protected);

        let numerator = arith.mul(self.numerator, rhs.denominator)?;
        let denominator = arith.mul(self.denominator, rhs.numerator)?;

        Fraction::new(numerator, denominator, protected)
    }

    /// Negation keeps the operand's flag. Only `i32::MIN` can fail.
    pub fn checked_neg(self) -> Result<Fraction> {
        let numerator = Arith::from_protection(self.protected).neg(self.numerator)?;
        Ok(Fraction { numerator, ..self })
    }

    pub fn checked_add_assign(&mut self, rhs: Fraction) -> Result<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    pub fn checked_sub_assign(&mut self, rhs: Fraction) -> Result<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    pub fn checked_mul_assign(&mut self, rhs: Fraction) -> Result<()> {
        *self = self.checked_mul(rhs)?;
        Ok(())
    }

    pub fn checked_div_assign(&mut self, rhs: Fraction) -> Result<()> {
        *self = self.checked_div(rhs)?;
        Ok(())
    }

    #[inline]
    pub fn increment(&mut self) -> Result<()> {
        self.checked_add_assign(Fraction::ONE)
    }

    #[inline]
    pub fn decrement(&mut self) -> Result<()> {
        self.checked_sub_assign(Fraction::ONE)
    }
}

/// `Fraction op Fraction`, `Fraction op i32` and `i32 op Fraction`, all
/// yielding `Result<Fraction>`. Integers enter unprotected, so a mixed
/// operation carries the fraction's flag.
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for Fraction {
            type Output = Result<Fraction>;

            #[inline]
            fn $method(self, rhs: Fraction) -> Self::Output {
                self.$checked(rhs)
            }
        }

        impl $trait<i32> for Fraction {
            type Output = Result<Fraction>;

            #[inline]
            fn $method(self, rhs: i32) -> Self::Output {
                self.$checked(Fraction::from(rhs))
            }
        }

        impl $trait<Fraction> for i32 {
            type Output = Result<Fraction>;

            #[inline]
            fn $method(self, rhs: Fraction) -> Self::Output {
                Fraction::from(self).$checked(rhs)
            }
        }
    };
}

forward_binop!(Add, add, checked_add);
forward_binop!(Sub, sub, checked_sub);
forward_binop!(Mul, mul, checked_mul);
forward_binop!(Div, div, checked_div);

impl Neg for Fraction {
    type Output = Result<Fraction>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.checked_neg()
    }
}
