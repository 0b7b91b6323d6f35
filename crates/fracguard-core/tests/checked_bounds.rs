// crates/fracguard-core/tests/checked_bounds.rs

use fracguard_core::checked::{add, divide, multiply, negate, subtract, Arith};
use fracguard_core::FracError;

#[test]
fn add_detects_both_edges() {
    assert_eq!(add(i32::MAX, 1), Err(FracError::NumericOverflow));
    assert_eq!(add(i32::MIN, -1), Err(FracError::NumericOverflow));
    assert_eq!(add(i32::MAX, 0), Ok(i32::MAX));
    assert_eq!(add(i32::MIN, i32::MAX), Ok(-1));
    assert_eq!(add(-5, 3), Ok(-2));
}

#[test]
fn subtract_goes_through_negation() {
    assert_eq!(subtract(5, 7), Ok(-2));
    assert_eq!(subtract(i32::MIN, 1), Err(FracError::NumericOverflow));
    assert_eq!(subtract(0, i32::MIN), Err(FracError::NumericOverflow));
    // -1 - MIN == MAX fits, but MIN cannot be negated first.
    assert_eq!(subtract(-1, i32::MIN), Err(FracError::NumericOverflow));
}

#[test]
fn multiply_zero_short_circuits() {
    assert_eq!(multiply(0, i32::MIN), Ok(0));
    assert_eq!(multiply(i32::MAX, 0), Ok(0));
}

#[test]
fn multiply_sign_cases() {
    assert_eq!(multiply(46_340, 46_340), Ok(2_147_395_600));
    assert_eq!(multiply(46_341, 46_341), Err(FracError::NumericOverflow));

    assert_eq!(multiply(-65_536, 32_768), Ok(i32::MIN));
    assert_eq!(multiply(65_536, -32_768), Ok(i32::MIN));
    assert_eq!(multiply(-65_537, 32_768), Err(FracError::NumericOverflow));

    assert_eq!(multiply(-1, -1), Ok(1));
    assert_eq!(multiply(-46_341, -46_341), Err(FracError::NumericOverflow));
    assert_eq!(multiply(i32::MIN, -1), Err(FracError::NumericOverflow));
    assert_eq!(multiply(-1, i32::MIN), Err(FracError::NumericOverflow));
    assert_eq!(multiply(i32::MIN, 1), Ok(i32::MIN));
}

#[test]
fn divide_only_min_by_minus_one_overflows() {
    assert_eq!(divide(i32::MIN, -1), Err(FracError::NumericOverflow));
    assert_eq!(divide(i32::MIN, 1), Ok(i32::MIN));
    assert_eq!(divide(7, -2), Ok(-3));
    assert_eq!(divide(-7, 2), Ok(-3));
    assert_eq!(divide(1, 0), Err(FracError::DivisionByZero));
}

#[test]
fn negate_min_fails() {
    assert_eq!(negate(i32::MIN), Err(FracError::NumericOverflow));
    assert_eq!(negate(i32::MAX), Ok(-i32::MAX));
    assert_eq!(negate(0), Ok(0));
}

#[test]
fn wrapping_mode_never_overflows() {
    let w = Arith::from_protection(false);
    assert_eq!(w, Arith::Wrapping);
    assert_eq!(w.add(i32::MAX, 1), Ok(i32::MIN));
    assert_eq!(w.sub(i32::MIN, 1), Ok(i32::MAX));
    assert_eq!(w.mul(i32::MIN, -1), Ok(i32::MIN));
    assert_eq!(w.div(i32::MIN, -1), Ok(i32::MIN));
    assert_eq!(w.neg(i32::MIN), Ok(i32::MIN));
    assert_eq!(w.div(1, 0), Err(FracError::DivisionByZero));
}

#[test]
fn checked_mode_routes_to_bounds_checks() {
    let c = Arith::from_protection(true);
    assert_eq!(c, Arith::Checked);
    assert_eq!(c.add(i32::MAX, 1), Err(FracError::NumericOverflow));
    assert_eq!(c.mul(3, 4), Ok(12));
    assert_eq!(c.neg(i32::MIN), Err(FracError::NumericOverflow));
}
