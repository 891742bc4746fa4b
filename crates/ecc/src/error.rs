use thiserror::Error;

/// Failures while turning parameter constants into field and curve values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EccError {
    #[error("constant `{name}` is not a valid integer: {value:?}")]
    InvalidConstant { name: &'static str, value: String },
    #[error("modulus must be an odd prime greater than 2")]
    InvalidModulus,
    #[error("p - 1 != 2^{two_adicity} * odd_factor for the supplied field constants")]
    InconsistentTwoAdicity { two_adicity: u32 },
    #[error("supplied non-square is a quadratic residue")]
    NonSquareIsSquare,
    #[error("generator ({x}, {y}) is not on the curve")]
    GeneratorNotOnCurve { x: String, y: String },
}

/// Reasons a cube-root endomorphism cannot be derived for a curve.
///
/// Any of these means the curve simply has no endomorphism available; callers
/// fall back to plain scalar multiplication and never retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndomorphismError {
    #[error("base field has no cube root of unity (p != 1 mod 3)")]
    NoBaseCubeRoot,
    #[error("scalar field has no cube root of unity (q != 1 mod 3)")]
    NoScalarCubeRoot,
    #[error("-3 is not a square in the scalar field")]
    MinusThreeNotSquare,
    #[error("derived endomorphism scalar is not a non-trivial cube root of unity")]
    InvalidScalar,
    #[error("scaling the generator by lambda does not preserve its y-coordinate")]
    NotCheapEndomorphism,
    #[error("generator x-coordinate is not invertible")]
    GeneratorXNotInvertible,
    #[error("derived endomorphism base is not a non-trivial cube root of unity")]
    InvalidBase,
    #[error("endomorphism does not agree with scalar multiplication at a random point")]
    ConfirmationFailed,
}
