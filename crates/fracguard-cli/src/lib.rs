pub mod expr;
pub mod session;
