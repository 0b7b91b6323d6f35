// crates/fracguard-core/src/fraction/format.rs

use std::fmt;

use crate::fraction::Fraction;

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 0 {
            f.write_str("NaN")
        } else if self.numerator == 0 {
            f.write_str("0")
        } else if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// `n/d`, with a trailing `!` when protected.
impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)?;
        if self.protected {
            f.write_str("!")?;
        }
        Ok(())
    }
}
