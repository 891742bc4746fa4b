// Numeric types and operations.
//
// - bitop: Bit-level helpers over arbitrary-precision unsigned integers
// - bigint: Signed-integer helpers used by the lattice arithmetic
// - random: RNG wrappers

pub mod bigint;
pub mod bitop;
pub mod random;
