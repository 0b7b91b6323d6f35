// crates/fracguard-cli/src/cmd/mod.rs

pub mod calc;
pub mod eval;
pub mod show;
