use thiserror::Error;

pub type Result<T> = std::result::Result<T, FracError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FracError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("numeric overflow")]
    NumericOverflow,

    #[error("parse error: {0}")]
    Parse(String),
}
