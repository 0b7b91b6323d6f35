// crates/fracguard-core/src/parse.rs

//! Text form: `N` or `N/D`, base-10, each part with an optional sign.
//!
//! The whole (trimmed) line must be consumed: `5a`, `1/2x`, `1 / 2` and
//! `1/2/3` are rejected rather than truncated.

use std::str::FromStr;

use crate::checked::Arith;
use crate::error::{FracError, Result};
use crate::fraction::Fraction;

/// Parse one signed decimal integer, nothing else.
///
/// A literal outside the i32 range is `NumericOverflow` with `protected`
/// set and wraps (keeps its low 32 bits) without it.
pub fn parse_int(text: &str, protected: bool) -> Result<i32> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FracError::Parse(format!("not an integer: {text:?}")));
    }

    let arith = Arith::from_protection(protected);
    let mut value: i32 = 0;
    for b in digits.bytes() {
        let digit = i32::from(b - b'0');
        value = arith.mul(value, 10)?;
        // Accumulate toward the sign so i32::MIN parses without overflow.
        value = if negative {
            arith.sub(value, digit)?
        } else {
            arith.add(value, digit)?
        };
    }
    Ok(value)
}

/// Split a line into `(numerator, denominator)`; the denominator defaults to 1.
pub fn parse_parts(line: &str, protected: bool) -> Result<(i32, i32)> {
    let line = line.trim();
    if line.is_empty() {
        return Err(FracError::Parse("empty input".into()));
    }

    match line.split_once('/') {
        Some((n, d)) => Ok((parse_int(n, protected)?, parse_int(d, protected)?)),
        None => Ok((parse_int(line, protected)?, 1)),
    }
}

pub fn parse_fraction(line: &str, protected: bool) -> Result<Fraction> {
    let (numerator, denominator) = parse_parts(line, protected)?;
    Fraction::new(numerator, denominator, protected)
}

impl FromStr for Fraction {
    type Err = FracError;

    fn from_str(s: &str) -> Result<Fraction> {
        parse_fraction(s, false)
    }
}
