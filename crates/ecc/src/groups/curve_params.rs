use crate::fields::field_params::FieldParams;

/// Trait defining the parameters of a short Weierstrass curve y^2 = x^3 + a*x + b.
///
/// Only `a = 0` curves are supported by the group law; `Curve::from_params`
/// rejects anything else.
pub trait CurveParams: 'static + Send + Sync + Sized {
    /// Field the coordinates live in.
    type BaseFieldParams: FieldParams;
    /// Field of scalars, of prime order equal to the group order.
    type ScalarFieldParams: FieldParams;

    const NAME: &'static str;

    const A: &'static str;
    const B: &'static str;

    const GENERATOR_X: &'static str;
    const GENERATOR_Y: &'static str;

    const COFACTOR: &'static str = "1";

    /// Whether scalar multiplication should go through the GLV endomorphism.
    const USE_ENDOMORPHISM: bool = false;

    /// Published cube root of unity in the base field, paired with
    /// `ENDO_SCALAR`. When both are `None` the pair is derived at build time.
    const ENDO_BASE: Option<&'static str> = None;
    /// Published cube root of unity in the scalar field.
    const ENDO_SCALAR: Option<&'static str> = None;
}
