pub mod error;

pub mod checked;
pub mod numeric;
pub mod fraction;
pub mod parse;

pub use crate::error::{FracError, Result};
pub use crate::fraction::Fraction;
pub use crate::parse::parse_fraction;
