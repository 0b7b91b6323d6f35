// crates/fracguard-cli/src/expr.rs

//! One-line expressions over fractions.
//!
//! Tokens are whitespace separated, so `/` inside an operand never clashes
//! with the division operator: `1/2 / 3/4`. An operand ending in `!` is
//! parsed with overflow protection on, regardless of the session default.

use std::fmt;

use fracguard_core::parse::parse_fraction;
use fracguard_core::{FracError, Fraction, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl BinOp {
    pub fn from_token(tok: &str) -> Option<BinOp> {
        let op = match tok {
            "+" => BinOp::Add,
            "-" => BinOp::Sub,
            "*" => BinOp::Mul,
            "/" => BinOp::Div,
            "<" => BinOp::Lt,
            "<=" => BinOp::Le,
            ">" => BinOp::Gt,
            ">=" => BinOp::Ge,
            "==" => BinOp::Eq,
            "!=" => BinOp::Ne,
            _ => return None,
        };
        Some(op)
    }

    pub fn apply(self, lhs: Fraction, rhs: Fraction) -> Result<Value> {
        let value = match self {
            BinOp::Add => Value::Frac(lhs.checked_add(rhs)?),
            BinOp::Sub => Value::Frac(lhs.checked_sub(rhs)?),
            BinOp::Mul => Value::Frac(lhs.checked_mul(rhs)?),
            BinOp::Div => Value::Frac(lhs.checked_div(rhs)?),
            BinOp::Eq => Value::Bool(lhs == rhs),
            BinOp::Ne => Value::Bool(lhs != rhs),
            // The sentinel compares false both ways.
            BinOp::Lt => Value::Bool(lhs.checked_lt(&rhs)?),
            BinOp::Le => Value::Bool(lhs.checked_le(&rhs)?),
            BinOp::Gt => Value::Bool(lhs.checked_gt(&rhs)?),
            BinOp::Ge => Value::Bool(lhs.checked_ge(&rhs)?),
        };
        Ok(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Frac(Fraction),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Frac(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Expr {
    Single(Fraction),
    Neg(Fraction),
    Binary(Fraction, BinOp, Fraction),
}

impl Expr {
    pub fn eval(self) -> Result<Value> {
        match self {
            Expr::Single(x) => Ok(Value::Frac(x)),
            Expr::Neg(x) => Ok(Value::Frac(x.checked_neg()?)),
            Expr::Binary(lhs, op, rhs) => op.apply(lhs, rhs),
        }
    }
}

/// Parse `N`, `N/D`, optionally followed by `!`.
pub fn parse_operand(tok: &str, protect: bool) -> Result<Fraction> {
    match tok.strip_suffix('!') {
        Some(text) => parse_fraction(text, true),
        None => parse_fraction(tok, protect),
    }
}

pub fn parse_op(tok: &str) -> Result<BinOp> {
    BinOp::from_token(tok).ok_or_else(|| FracError::Parse(format!("unknown operator {tok:?}")))
}

pub fn parse_expr(line: &str, protect: bool) -> Result<Expr> {
    let toks: Vec<&str> = line.split_whitespace().collect();
    match toks.as_slice() {
        [x] => Ok(Expr::Single(parse_operand(x, protect)?)),
        ["-", x] => Ok(Expr::Neg(parse_operand(x, protect)?)),
        [lhs, op, rhs] => {
            let op = parse_op(op)?;
            Ok(Expr::Binary(
                parse_operand(lhs, protect)?,
                op,
                parse_operand(rhs, protect)?,
            ))
        }
        _ => Err(FracError::Parse(
            "expected FRACTION, - FRACTION or FRACTION OP FRACTION".into(),
        )),
    }
}
