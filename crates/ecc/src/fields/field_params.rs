use num_bigint::BigUint;

use pasta_numeric::bigint::parse_integer;

use crate::error::EccError;

/// Trait defining the parameters for a prime field.
///
/// Constants are integer literals given as strings, either `0x`-prefixed hex
/// or decimal, and are parsed once when the field value is built with
/// `FiniteField::from_params`.
pub trait FieldParams: 'static + Send + Sync + Sized {
    /// The prime modulus p.
    const MODULUS: &'static str;

    /// Two-adicity M: the largest power of two dividing p - 1.
    const TWO_ADICITY: u32;

    /// Odd cofactor t, where p - 1 = 2^M * t.
    const ODD_FACTOR: &'static str;

    /// A quadratic non-residue z. Its t-th power is a primitive 2^M-th root of
    /// unity and seeds Tonelli-Shanks.
    const NON_SQUARE: &'static str;
}

/// Parse a named constant, reporting which one was malformed.
pub(crate) fn parse_constant(name: &'static str, value: &str) -> Result<BigUint, EccError> {
    parse_integer(value).ok_or_else(|| EccError::InvalidConstant {
        name,
        value: value.to_string(),
    })
}
