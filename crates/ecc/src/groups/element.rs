use std::fmt;

use num_bigint::BigUint;

use crate::fields::{FieldElement, FiniteField};
use crate::groups::affine_element::AffinePoint;

/// An elliptic curve point in Jacobian projective coordinates (X : Y : Z).
///
/// Represents the affine point (X/Z^2, Y/Z^3). Z = 0 is the point at
/// infinity, canonically (1 : 1 : 0). Representations are not unique, so
/// there is deliberately no `PartialEq`; compare with [`ProjectivePoint::equals`].
#[derive(Clone)]
pub struct ProjectivePoint {
    pub x: FieldElement,
    pub y: FieldElement,
    pub z: FieldElement,
}

impl fmt::Debug for ProjectivePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point_at_infinity() {
            write!(f, "ProjectivePoint(infinity)")
        } else {
            write!(f, "ProjectivePoint({:?}, {:?}, {:?})", self.x, self.y, self.z)
        }
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl ProjectivePoint {
    #[inline]
    pub fn new(x: FieldElement, y: FieldElement, z: FieldElement) -> Self {
        Self { x, y, z }
    }

    /// The point at infinity (1 : 1 : 0).
    #[inline]
    pub fn infinity() -> Self {
        Self::new(FieldElement::one(), FieldElement::one(), FieldElement::zero())
    }

    #[inline]
    pub fn is_point_at_infinity(&self) -> bool {
        self.z.is_zero()
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

impl ProjectivePoint {
    /// Lift with Z = 1; the affine identity maps to (1 : 1 : 0).
    pub fn from_affine(affine: &AffinePoint) -> Self {
        if affine.infinity {
            return Self::infinity();
        }
        Self::new(affine.x.clone(), affine.y.clone(), FieldElement::one())
    }

    /// Divide out Z^2 and Z^3.
    pub fn to_affine(&self, field: &FiniteField) -> AffinePoint {
        if self.z.is_one() {
            return AffinePoint::new(self.x.clone(), self.y.clone());
        }
        let Some(z_inv) = field.inverse(&self.z) else {
            return AffinePoint::infinity();
        };
        let z_inv_sq = field.square(&z_inv);
        let x = field.mul(&self.x, &z_inv_sq);
        let y = field.mul(&self.y, &field.mul(&z_inv, &z_inv_sq));
        AffinePoint::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

impl ProjectivePoint {
    /// Checks y^2 = x^3 + b*z^6. The canonical identity satisfies it trivially.
    pub fn on_curve(&self, field: &FiniteField, b: &FieldElement) -> bool {
        let x3 = field.mul(&field.square(&self.x), &self.x);
        let y2 = field.square(&self.y);
        let z2 = field.square(&self.z);
        let z6 = field.mul(&field.square(&z2), &z2);
        y2 == field.add(&x3, &field.mul(b, &z6))
    }

    /// Group equality by cross-multiplying Z powers, without normalizing.
    ///
    /// The identity only equals the identity, whatever its X and Y.
    pub fn equals(&self, other: &Self, field: &FiniteField) -> bool {
        match (self.is_point_at_infinity(), other.is_point_at_infinity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        let self_z2 = field.square(&self.z);
        let other_z2 = field.square(&other.z);
        if field.mul(&self.x, &other_z2) != field.mul(&other.x, &self_z2) {
            return false;
        }
        let self_z3 = field.mul(&self_z2, &self.z);
        let other_z3 = field.mul(&other_z2, &other.z);
        field.mul(&self.y, &other_z3) == field.mul(&other.y, &self_z3)
    }
}

// ---------------------------------------------------------------------------
// Point doubling
// ---------------------------------------------------------------------------

impl ProjectivePoint {
    /// Jacobian doubling for a = 0 (dbl-2009-l). Doubling infinity is a no-op.
    ///
    /// Panics on a finite point with Y = 0: a 2-torsion point, which curves of
    /// prime order do not have.
    pub fn dbl(&self, field: &FiniteField) -> Self {
        if self.is_point_at_infinity() {
            return self.clone();
        }
        assert!(
            !self.y.is_zero(),
            "projective double: finite point with Y = 0"
        );
        // A = X1^2, B = Y1^2, C = B^2
        let a = field.square(&self.x);
        let b = field.square(&self.y);
        let c = field.square(&b);
        // D = 2*((X1+B)^2-A-C)
        let x_plus_b = field.square(&field.add(&self.x, &b));
        let d = field.sub(&field.sub(&x_plus_b, &a), &c);
        let d = field.add(&d, &d);
        // E = 3*A, F = E^2
        let e = field.add(&field.add(&a, &a), &a);
        let f = field.square(&e);
        // X3 = F-2*D
        let x3 = field.sub(&f, &field.add(&d, &d));
        // Y3 = E*(D-X3)-8*C
        let eight_c = field.mul(&c, &field.from_u64(8));
        let y3 = field.sub(&field.mul(&e, &field.sub(&d, &x3)), &eight_c);
        // Z3 = 2*Y1*Z1
        let y1z1 = field.mul(&self.y, &self.z);
        let z3 = field.add(&y1z1, &y1z1);
        Self::new(x3, y3, z3)
    }
}

// ---------------------------------------------------------------------------
// Full projective addition
// ---------------------------------------------------------------------------

impl ProjectivePoint {
    /// Jacobian addition (add-2007-bl).
    ///
    /// Equal inputs are routed to `dbl` and opposite inputs give infinity. Any
    /// other coincidence of x-coordinates is an invalid point and panics.
    pub fn add(&self, other: &Self, field: &FiniteField) -> Self {
        if self.is_point_at_infinity() {
            return other.clone();
        }
        if other.is_point_at_infinity() {
            return self.clone();
        }
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&other.x, &other.y, &other.z);

        // Z1Z1 = Z1^2, Z2Z2 = Z2^2
        let z1z1 = field.square(z1);
        let z2z2 = field.square(z2);
        // U1 = X1*Z2Z2, U2 = X2*Z1Z1
        let u1 = field.mul(x1, &z2z2);
        let u2 = field.mul(x2, &z1z1);
        // S1 = Y1*Z2*Z2Z2, S2 = Y2*Z1*Z1Z1
        let s1 = field.mul(&field.mul(y1, z2), &z2z2);
        let s2 = field.mul(&field.mul(y2, z1), &z1z1);
        // H = U2-U1
        let h = field.sub(&u2, &u1);

        if h.is_zero() {
            if s1 == s2 {
                return self.dbl(field);
            }
            if field.add(&s1, &s2).is_zero() {
                return Self::infinity();
            }
            panic!("projective add: invalid point");
        }

        // I = (2*H)^2, J = H*I
        let two_h = field.add(&h, &h);
        let i = field.square(&two_h);
        let j = field.mul(&h, &i);
        // r = 2*(S2-S1)
        let r = field.sub(&s2, &s1);
        let r = field.add(&r, &r);
        // V = U1*I
        let v = field.mul(&u1, &i);
        // X3 = r^2-J-2*V
        let x3 = field.sub(&field.sub(&field.square(&r), &j), &field.add(&v, &v));
        // Y3 = r*(V-X3)-2*S1*J
        let s1j = field.mul(&s1, &j);
        let y3 = field.sub(&field.mul(&r, &field.sub(&v, &x3)), &field.add(&s1j, &s1j));
        // Z3 = ((Z1+Z2)^2-Z1Z1-Z2Z2)*H
        let z_sum = field.square(&field.add(z1, z2));
        let z3 = field.mul(&field.sub(&field.sub(&z_sum, &z1z1), &z2z2), &h);
        Self::new(x3, y3, z3)
    }

    /// Negate Y; infinity stays infinity.
    pub fn neg(&self, field: &FiniteField) -> Self {
        if self.is_point_at_infinity() {
            return self.clone();
        }
        Self::new(self.x.clone(), field.negate(&self.y), self.z.clone())
    }

    pub fn sub(&self, other: &Self, field: &FiniteField) -> Self {
        self.add(&other.neg(field), field)
    }
}

// ---------------------------------------------------------------------------
// Scalar multiplication
// ---------------------------------------------------------------------------

impl ProjectivePoint {
    /// Double-and-add from the least significant bit.
    ///
    /// The scalar is used as given, not reduced by the group order.
    pub fn scale(&self, scalar: &BigUint, field: &FiniteField) -> Self {
        let mut acc = Self::infinity();
        let mut base = self.clone();
        for i in 0..scalar.bits() {
            if scalar.bit(i) {
                acc = acc.add(&base, field);
            }
            base = base.dbl(field);
        }
        acc
    }

    /// [order] * self is the identity.
    pub fn in_subgroup(&self, order: &BigUint, field: &FiniteField) -> bool {
        self.scale(order, field).is_point_at_infinity()
    }
}
