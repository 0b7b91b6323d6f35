// crates/fracguard-core/src/fraction/cmp.rs

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::fraction::Fraction;

// Equality is structural on the reduced pair; the protection flag is not part
// of the value.
impl PartialEq for Fraction {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl Eq for Fraction {}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl PartialEq<i32> for Fraction {
    #[inline]
    fn eq(&self, other: &i32) -> bool {
        *self == Fraction::from(*other)
    }
}

impl PartialEq<Fraction> for i32 {
    #[inline]
    fn eq(&self, other: &Fraction) -> bool {
        Fraction::from(*self) == *other
    }
}

impl Fraction {
    /// Ordering from the sign of `self - other`, computed under the resolved
    /// protection. `Fraction` has no `PartialOrd`; this and the `checked_lt`
    /// family are its ordering.
    ///
    /// Reports `NumericOverflow` when the difference does not fit and either
    /// operand is protected; without protection the difference wraps and the
    /// result follows the wrapped sign. `Ok(None)` means the difference is the
    /// sentinel, i.e. an operand is NaN and the other is not.
    pub fn checked_cmp(&self, other: &Fraction) -> Result<Option<Ordering>> {
        if self == other {
            return Ok(Some(Ordering::Equal));
        }

        let diff = self.checked_sub(*other)?;
        if diff.is_nan() {
            return Ok(None);
        }
        Ok(Some(diff.signum().cmp(&0)))
    }

    #[inline]
    pub fn checked_lt(&self, other: &Fraction) -> Result<bool> {
        Ok(self.checked_cmp(other)? == Some(Ordering::Less))
    }

    #[inline]
    pub fn checked_le(&self, other: &Fraction) -> Result<bool> {
        Ok(matches!(self.checked_cmp(other)?, Some(Ordering::Less | Ordering::Equal)))
    }

    #[inline]
    pub fn checked_gt(&self, other: &Fraction) -> Result<bool> {
        Ok(self.checked_cmp(other)? == Some(Ordering::Greater))
    }

    #[inline]
    pub fn checked_ge(&self, other: &Fraction) -> Result<bool> {
        Ok(matches!(self.checked_cmp(other)?, Some(Ordering::Greater | Ordering::Equal)))
    }
}
