// crates/fracguard-core/src/numeric.rs

/// Greatest common divisor by Euclid's algorithm.
///
/// Follows the sign of truncated remainder, so the result may be negative
/// when the inputs are (e.g. `gcd(4, -6) == -2`); callers divide both parts
/// by it and fix the sign afterwards. `gcd(a, 0) == a`, `gcd(0, 0) == 0`.
pub fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        // i32::MIN % -1 traps natively; the true remainder is 0.
        let r = a.wrapping_rem(b);
        a = b;
        b = r;
    }
    a
}

/// 1, -1 or 0.
#[inline]
pub fn sign(x: i32) -> i32 {
    x.signum()
}
