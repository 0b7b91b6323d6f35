// crates/fracguard-cli/tests/expr_eval.rs

use fracguard_cli::expr::{parse_expr, parse_operand, BinOp, Expr, Value};
use fracguard_core::{FracError, Fraction};

fn eval(line: &str, protect: bool) -> Result<Value, FracError> {
    parse_expr(line, protect)?.eval()
}

fn frac(n: i32, d: i32) -> Value {
    Value::Frac(Fraction::new(n, d, false).unwrap())
}

#[test]
fn arithmetic_lines() {
    assert_eq!(eval("1/2 + 1/3", false), Ok(frac(5, 6)));
    assert_eq!(eval("1/2 / 3/4", false), Ok(frac(2, 3)));
    assert_eq!(eval("-3/4 * 4", false), Ok(frac(-3, 1)));
    assert_eq!(eval("- 3/4", false), Ok(frac(-3, 4)));
    assert_eq!(eval("6/-8", false), Ok(frac(-3, 4)));
}

#[test]
fn comparison_lines() {
    assert_eq!(eval("1/3 < 1/2", false), Ok(Value::Bool(true)));
    assert_eq!(eval("2/4 == 1/2", false), Ok(Value::Bool(true)));
    assert_eq!(eval("2/4 != 1/2", false), Ok(Value::Bool(false)));
    assert_eq!(eval("5/2 >= 3", false), Ok(Value::Bool(false)));
    assert_eq!(eval("1/0 < 1", false), Ok(Value::Bool(false)));
    assert_eq!(eval("1/0 >= 1", false), Ok(Value::Bool(false)));
}

#[test]
fn bang_protects_one_operand() {
    let x = parse_operand("3/4!", false).unwrap();
    assert!(x.is_protected());
    assert!(!parse_operand("3/4", false).unwrap().is_protected());
    assert!(parse_operand("3/4", true).unwrap().is_protected());

    assert_eq!(eval("1073741824 + 1073741824!", false), Err(FracError::NumericOverflow));
    assert_eq!(eval("1073741824 + 1073741824", false), Ok(frac(i32::MIN, 1)));
    assert_eq!(eval("1073741824 + 1073741824", true), Err(FracError::NumericOverflow));
}

#[test]
fn protected_comparison_can_overflow() {
    assert_eq!(eval("2147483647! > -1", false), Err(FracError::NumericOverflow));
    // MAX - (-1) wraps negative.
    assert_eq!(eval("2147483647 > -1", false), Ok(Value::Bool(false)));
}

#[test]
fn rejects_malformed_lines() {
    for bad in ["", "1/2 +", "1/2 % 3", "1/2 + 1/3 + 1", "5a", "+ 3"] {
        assert!(matches!(parse_expr(bad, false), Err(FracError::Parse(_))), "accepted {bad:?}");
    }
}

#[test]
fn display_of_values() {
    assert_eq!(frac(-3, 7).to_string(), "-3/7");
    assert_eq!(Value::Frac(Fraction::NAN).to_string(), "NaN");
    assert_eq!(Value::Bool(true).to_string(), "true");
}

#[test]
fn op_tokens() {
    assert_eq!(BinOp::from_token("<="), Some(BinOp::Le));
    assert_eq!(BinOp::from_token("%"), None);
    let e = parse_expr("1 * 2", false).unwrap();
    assert!(matches!(e, Expr::Binary(_, BinOp::Mul, _)));
}
