// Bit manipulation utilities.
//
// Field elements and scalars are arbitrary-precision `BigUint`s, so the
// fixed-width helpers built on `u64::leading_zeros` become thin wrappers over
// `BigUint::bits` / `BigUint::bit`.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Ceiling of log2, with `ceil_log2(0) == ceil_log2(1) == 0`.
///
/// For `x > 1` this is the bit length of `x - 1`, the number of bits needed to
/// represent every value in `[0, x)`.
pub fn ceil_log2(val: &BigUint) -> u64 {
    if val.is_zero() || val.is_one() {
        return 0;
    }
    (val - 1u32).bits()
}

/// Little-endian bit decomposition of `val`, padded or truncated to `len` bits.
pub fn to_bits_le(val: &BigUint, len: usize) -> Vec<bool> {
    (0..len as u64).map(|i| val.bit(i)).collect()
}

/// Ceiling division: ceil(numerator / denominator).
#[inline]
pub fn ceil_div(numerator: u64, denominator: u64) -> u64 {
    numerator.div_ceil(denominator)
}
