use std::fmt;

use num_bigint::BigUint;
use num_traits::One;

use crate::error::EccError;
use crate::fields::field_params::parse_constant;
use crate::fields::{FieldElement, FiniteField};
use crate::groups::affine_element::AffinePoint;
use crate::groups::curve_params::CurveParams;
use crate::groups::element::ProjectivePoint;
use crate::groups::endomorphism::{compute_endo_constants, EndoConstants, Endomorphism};

/// A short Weierstrass curve y^2 = x^3 + b over a prime field, with its scalar
/// field, generator and (when available) GLV endomorphism.
///
/// Built once and shared; every method is a pure function of its inputs.
#[derive(Clone)]
pub struct Curve {
    name: &'static str,
    field: FiniteField,
    scalar: FiniteField,
    a: FieldElement,
    b: FieldElement,
    generator: AffinePoint,
    cofactor: BigUint,
    use_endomorphism: bool,
    endo: Option<Endomorphism>,
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.name)
            .field("field", &self.field)
            .field("order", &self.scalar)
            .field("has_endomorphism", &self.endo.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Curve {
    /// Build the curve described by `C`.
    ///
    /// Published endomorphism constants are used as given; otherwise they are
    /// derived, and a failed derivation leaves the curve without one.
    #[tracing::instrument(skip_all, name = "Curve::from_params", fields(curve = C::NAME))]
    pub fn from_params<C: CurveParams>() -> Result<Self, EccError> {
        let field = FiniteField::from_params::<C::BaseFieldParams>()?;
        let scalar = FiniteField::from_params::<C::ScalarFieldParams>()?;
        let a = field.from_biguint(&parse_constant("A", C::A)?);
        assert!(a.is_zero(), "only curves with a = 0 are supported");
        let b = field.from_biguint(&parse_constant("B", C::B)?);

        let generator = AffinePoint::new(
            field.from_biguint(&parse_constant("GENERATOR_X", C::GENERATOR_X)?),
            field.from_biguint(&parse_constant("GENERATOR_Y", C::GENERATOR_Y)?),
        );
        if !generator.on_curve(&field, &b) {
            return Err(EccError::GeneratorNotOnCurve {
                x: C::GENERATOR_X.to_string(),
                y: C::GENERATOR_Y.to_string(),
            });
        }

        let endo_constants = match (C::ENDO_SCALAR, C::ENDO_BASE) {
            (Some(endo_scalar), Some(endo_base)) => Some(EndoConstants {
                scalar: scalar.from_biguint(&parse_constant("ENDO_SCALAR", endo_scalar)?),
                base: field.from_biguint(&parse_constant("ENDO_BASE", endo_base)?),
            }),
            _ => match compute_endo_constants(&field, &scalar, &generator, &a) {
                Ok(constants) => Some(constants),
                Err(err) => {
                    tracing::warn!(curve = C::NAME, %err, "no endomorphism available");
                    None
                }
            },
        };
        let endo = endo_constants.map(|constants| Endomorphism::from_constants(&scalar, constants));

        Ok(Self {
            name: C::NAME,
            field,
            scalar,
            a,
            b,
            generator,
            cofactor: parse_constant("COFACTOR", C::COFACTOR)?,
            use_endomorphism: C::USE_ENDOMORPHISM,
            endo,
        })
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl Curve {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The coordinate field.
    #[inline]
    pub fn field(&self) -> &FiniteField {
        &self.field
    }

    /// The scalar field, whose modulus is the group order.
    #[inline]
    pub fn scalar(&self) -> &FiniteField {
        &self.scalar
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        self.field.modulus()
    }

    #[inline]
    pub fn order(&self) -> &BigUint {
        self.scalar.modulus()
    }

    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    #[inline]
    pub fn cofactor(&self) -> &BigUint {
        &self.cofactor
    }

    #[inline]
    pub fn has_cofactor(&self) -> bool {
        !self.cofactor.is_one()
    }

    #[inline]
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    #[inline]
    pub fn has_endomorphism(&self) -> bool {
        self.endo.is_some()
    }

    /// Endomorphism data, absent if it could not be derived.
    #[inline]
    pub fn endo(&self) -> Option<&Endomorphism> {
        self.endo.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Projective group operations
// ---------------------------------------------------------------------------

impl Curve {
    #[inline]
    pub fn zero(&self) -> ProjectivePoint {
        ProjectivePoint::infinity()
    }

    /// The generator with Z = 1.
    #[inline]
    pub fn one(&self) -> ProjectivePoint {
        ProjectivePoint::from_affine(&self.generator)
    }

    pub fn add(&self, g: &ProjectivePoint, h: &ProjectivePoint) -> ProjectivePoint {
        g.add(h, &self.field)
    }

    pub fn double(&self, g: &ProjectivePoint) -> ProjectivePoint {
        g.dbl(&self.field)
    }

    pub fn negate(&self, g: &ProjectivePoint) -> ProjectivePoint {
        g.neg(&self.field)
    }

    pub fn sub(&self, g: &ProjectivePoint, h: &ProjectivePoint) -> ProjectivePoint {
        g.sub(h, &self.field)
    }

    /// Plain double-and-add with the scalar used as given.
    pub fn scale(&self, g: &ProjectivePoint, s: &BigUint) -> ProjectivePoint {
        g.scale(s, &self.field)
    }

    pub fn equal(&self, g: &ProjectivePoint, h: &ProjectivePoint) -> bool {
        g.equals(h, &self.field)
    }

    pub fn is_on_curve(&self, g: &ProjectivePoint) -> bool {
        g.on_curve(&self.field, &self.b)
    }

    pub fn is_in_subgroup(&self, g: &ProjectivePoint) -> bool {
        g.in_subgroup(self.order(), &self.field)
    }

    pub fn to_affine(&self, g: &ProjectivePoint) -> AffinePoint {
        g.to_affine(&self.field)
    }

    pub fn from_affine(&self, g: &AffinePoint) -> ProjectivePoint {
        ProjectivePoint::from_affine(g)
    }

    /// (X : Y : Z) -> (beta * X : Y : Z), or `None` without an endomorphism.
    pub fn endomorphism(&self, g: &ProjectivePoint) -> Option<ProjectivePoint> {
        self.endo
            .as_ref()
            .map(|endo| endo.endomorphism_projective(g, &self.field))
    }

    /// s * G, through the GLV ladder when the curve enables it and an
    /// endomorphism is available, otherwise double-and-add. The scalar is
    /// reduced by the group order first.
    pub fn mul(&self, g: &ProjectivePoint, s: &BigUint) -> ProjectivePoint {
        let s = s % self.order();
        match &self.endo {
            Some(endo) if self.use_endomorphism => endo.scale_projective(g, &s, &self.field),
            _ => g.scale(&s, &self.field),
        }
    }

    /// The generator times a fresh random scalar.
    pub fn random_point(&self) -> ProjectivePoint {
        self.mul(&self.one(), self.scalar.random().value())
    }
}
