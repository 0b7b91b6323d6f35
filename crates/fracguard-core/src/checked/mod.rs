pub mod arith;
pub mod ops;

pub use arith::Arith;
pub use ops::{add, divide, multiply, negate, subtract};
