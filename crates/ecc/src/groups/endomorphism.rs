// Cube-root endomorphism and GLV scalar multiplication.
//
// On y^2 = x^3 + b with p = 1 (mod 3), (x, y) -> (beta * x, y) is a group
// endomorphism for any cube root of unity beta in the base field. It acts as
// multiplication by a cube root of unity lambda in the scalar field, so
// s * G = s0 * G + s1 * endo(G) with half-width s0, s1 from the GLV basis.

use num_bigint::BigUint;

use pasta_numeric::bitop::to_bits_le;

use crate::error::EndomorphismError;
use crate::fields::{FieldElement, FiniteField};
use crate::groups::affine_element::AffinePoint;
use crate::groups::element::ProjectivePoint;
use crate::groups::glv::{Decomposition, GlvBasis};

/// A matching pair of cube roots of unity: `scalar` in the scalar field and
/// `base` in the coordinate field, with lambda * (x, y) = (beta * x, y).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndoConstants {
    pub scalar: FieldElement,
    pub base: FieldElement,
}

/// Endomorphism data of one curve, derived once and then shared read-only.
#[derive(Clone, Debug)]
pub struct Endomorphism {
    scalar: FieldElement,
    base: FieldElement,
    basis: GlvBasis,
}

fn is_nontrivial_cube_root(field: &FiniteField, x: &FieldElement) -> bool {
    !x.is_one() && field.power(x, &BigUint::from(3u32)).is_one()
}

/// Derive (lambda, beta) for a curve with generator `g` and coefficient `a`.
///
/// lambda = (sqrt(-3) - 1) / 2 in the scalar field; beta = (lambda * G).x / G.x.
/// Every derived value is checked, and the pair is confirmed once more at a
/// random point. An `Err` means the curve has no usable endomorphism.
///
/// Panics if `a` is nonzero: the doubling formula only covers a = 0.
#[tracing::instrument(skip_all, name = "Endomorphism::compute_endo_constants")]
pub fn compute_endo_constants(
    field: &FiniteField,
    scalar: &FiniteField,
    g: &AffinePoint,
    a: &FieldElement,
) -> Result<EndoConstants, EndomorphismError> {
    assert!(a.is_zero(), "endomorphism derivation requires a = 0");

    let three = BigUint::from(3u32);
    if field.modulus() % &three != BigUint::from(1u32) {
        return Err(EndomorphismError::NoBaseCubeRoot);
    }
    if scalar.modulus() % &three != BigUint::from(1u32) {
        return Err(EndomorphismError::NoScalarCubeRoot);
    }

    // lambda^2 + lambda + 1 = 0
    let minus_three = scalar.negate(&scalar.from_u64(3));
    let sqrt_minus_three = scalar
        .sqrt(&minus_three)
        .ok_or(EndomorphismError::MinusThreeNotSquare)?;
    let lambda = scalar
        .div(&scalar.sub(&sqrt_minus_three, &scalar.one()), &scalar.from_u64(2))
        .ok_or(EndomorphismError::InvalidScalar)?;
    if !is_nontrivial_cube_root(scalar, &lambda) {
        return Err(EndomorphismError::InvalidScalar);
    }

    let lambda_g = g.scale(lambda.value(), field);
    if lambda_g.y != g.y {
        return Err(EndomorphismError::NotCheapEndomorphism);
    }
    let beta = field
        .div(&lambda_g.x, &g.x)
        .ok_or(EndomorphismError::GeneratorXNotInvertible)?;
    if !is_nontrivial_cube_root(field, &beta) {
        return Err(EndomorphismError::InvalidBase);
    }

    let r = g.scale(scalar.random().value(), field);
    let lambda_r = r.scale(lambda.value(), field);
    if lambda_r.x != field.mul(&beta, &r.x) || lambda_r.y != r.y {
        return Err(EndomorphismError::ConfirmationFailed);
    }

    tracing::debug!(lambda = %lambda, beta = %beta, "derived endomorphism constants");
    Ok(EndoConstants {
        scalar: lambda,
        base: beta,
    })
}

impl Endomorphism {
    /// Attach the GLV basis for `constants.scalar` over the group of order
    /// `scalar.modulus()`.
    pub fn from_constants(scalar: &FiniteField, constants: EndoConstants) -> Self {
        let basis = GlvBasis::compute(scalar.modulus(), constants.scalar.value());
        Self {
            scalar: constants.scalar,
            base: constants.base,
            basis,
        }
    }

    /// lambda, the eigenvalue in the scalar field.
    #[inline]
    pub fn scalar(&self) -> &FieldElement {
        &self.scalar
    }

    /// beta, the cube root of unity in the coordinate field.
    #[inline]
    pub fn base(&self) -> &FieldElement {
        &self.base
    }

    #[inline]
    pub fn basis(&self) -> &GlvBasis {
        &self.basis
    }

    /// Bit length of each ladder in `scale_projective`.
    #[inline]
    pub fn decompose_max_bits(&self) -> u64 {
        self.basis.max_bits
    }

    pub fn decompose(&self, s: &BigUint) -> Decomposition {
        self.basis.decompose(s)
    }

    /// (x, y) -> (beta * x, y).
    pub fn endomorphism(&self, p: &AffinePoint, field: &FiniteField) -> AffinePoint {
        AffinePoint {
            x: field.mul(&self.base, &p.x),
            y: p.y.clone(),
            infinity: p.infinity,
        }
    }

    /// (X : Y : Z) -> (beta * X : Y : Z).
    pub fn endomorphism_projective(
        &self,
        p: &ProjectivePoint,
        field: &FiniteField,
    ) -> ProjectivePoint {
        ProjectivePoint::new(field.mul(&self.base, &p.x), p.y.clone(), p.z.clone())
    }

    /// s * G as s0 * G + s1 * endo(G), sharing one doubling ladder.
    ///
    /// Signs of s0 and s1 are folded into the points, bits are scanned from
    /// `max_bits - 1` down to 0, and the last step skips its doubling: exactly
    /// `max_bits - 1` doublings.
    pub fn scale_projective(
        &self,
        g: &ProjectivePoint,
        s: &BigUint,
        field: &FiniteField,
    ) -> ProjectivePoint {
        let max_bits = self.basis.max_bits as usize;
        let decomposition = self.decompose(s);
        let s0_bits = to_bits_le(decomposition.s0.magnitude(), max_bits);
        let s1_bits = to_bits_le(decomposition.s1.magnitude(), max_bits);

        let mut g = g.clone();
        let mut endo_g = self.endomorphism_projective(&g, field);
        if decomposition.s0_is_negative() {
            g = g.neg(field);
        }
        if decomposition.s1_is_negative() {
            endo_g = endo_g.neg(field);
        }

        let mut h = ProjectivePoint::infinity();
        for i in (0..max_bits).rev() {
            if s0_bits[i] {
                h = h.add(&g, field);
            }
            if s1_bits[i] {
                h = h.add(&endo_g, field);
            }
            if i == 0 {
                break;
            }
            h = h.dbl(field);
        }
        h
    }

    /// Affine wrapper around `scale_projective`.
    pub fn scale(&self, g: &AffinePoint, s: &BigUint, field: &FiniteField) -> AffinePoint {
        self.scale_projective(&ProjectivePoint::from_affine(g), s, field)
            .to_affine(field)
    }
}
