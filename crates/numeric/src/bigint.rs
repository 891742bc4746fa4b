// Signed big-integer helpers.
//
// The GLV lattice basis and scalar decomposition work over Z, so they need
// signed arithmetic and an exact rounding division that `BigInt`'s truncating
// `/` does not provide.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, Zero};

/// round(x / y), rounding halves away from zero.
///
/// z = floor(|x| / |y|) is bumped by one when 2 * (|x| - z*|y|) >= |y|, and the
/// sign of x*y is reapplied afterwards.
///
/// Panics if `y` is zero.
pub fn divide_and_round(x: &BigInt, y: &BigInt) -> BigInt {
    assert!(!y.is_zero(), "divide_and_round: division by zero");
    let negative = x.sign() != y.sign() && !x.is_zero();
    let x_abs = x.magnitude();
    let y_abs = y.magnitude();
    let mut z = x_abs / y_abs;
    let remainder = x_abs - &z * y_abs;
    if (remainder << 1u32) >= *y_abs {
        z += 1u32;
    }
    let z = BigInt::from_biguint(Sign::Plus, z);
    if negative {
        -z
    } else {
        z
    }
}

/// Parse an integer constant given either as `0x`-prefixed hex or as decimal.
pub fn parse_integer(value: &str) -> Option<BigUint> {
    let value = value.trim();
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => BigUint::from_str_radix(hex, 16).ok(),
        None => BigUint::from_str_radix(value, 10).ok(),
    }
}

/// max(|a|, |b|) as an unsigned integer.
pub fn max_abs(a: &BigInt, b: &BigInt) -> BigUint {
    a.magnitude().max(b.magnitude()).clone()
}
