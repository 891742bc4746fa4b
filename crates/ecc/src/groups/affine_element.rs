use std::fmt;

use num_bigint::BigUint;

use crate::fields::{FieldElement, FiniteField};
use crate::groups::element::ProjectivePoint;

/// An elliptic curve point in affine coordinates (x, y).
///
/// The identity is flagged by `infinity`; its coordinates are conventionally
/// (1, 1) and never inspected.
#[derive(Clone)]
pub struct AffinePoint {
    pub x: FieldElement,
    pub y: FieldElement,
    pub infinity: bool,
}

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.infinity {
            write!(f, "AffinePoint(infinity)")
        } else {
            write!(f, "AffinePoint({:?}, {:?})", self.x, self.y)
        }
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        match (self.infinity, other.infinity) {
            (true, true) => true,
            (false, false) => self.x == other.x && self.y == other.y,
            _ => false,
        }
    }
}

impl Eq for AffinePoint {}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl AffinePoint {
    /// A finite point. Coordinates are taken as already reduced.
    #[inline]
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y, infinity: false }
    }

    /// The point at infinity.
    #[inline]
    pub fn infinity() -> Self {
        Self {
            x: FieldElement::one(),
            y: FieldElement::one(),
            infinity: true,
        }
    }

    #[inline]
    pub fn is_point_at_infinity(&self) -> bool {
        self.infinity
    }
}

// ---------------------------------------------------------------------------
// Arithmetic (a = 0)
// ---------------------------------------------------------------------------

impl AffinePoint {
    /// y^2 = x^3 + b. The identity is on every curve.
    pub fn on_curve(&self, field: &FiniteField, b: &FieldElement) -> bool {
        if self.infinity {
            return true;
        }
        let x3 = field.mul(&field.square(&self.x), &self.x);
        field.square(&self.y) == field.add(&x3, b)
    }

    pub fn negate(&self, field: &FiniteField) -> Self {
        if self.infinity {
            return Self::infinity();
        }
        Self::new(self.x.clone(), field.negate(&self.y))
    }

    /// Chord-and-tangent addition, one field inversion.
    pub fn add(&self, other: &Self, field: &FiniteField) -> Self {
        if self.infinity {
            return other.clone();
        }
        if other.infinity {
            return self.clone();
        }
        if self.x == other.x {
            if self.y == other.y {
                return self.dbl(field);
            }
            return Self::infinity();
        }
        // m = (y2 - y1) / (x2 - x1)
        let Some(m) = field.div(&field.sub(&other.y, &self.y), &field.sub(&other.x, &self.x))
        else {
            unreachable!("affine add: distinct x-coordinates have a nonzero difference");
        };
        let x3 = field.sub(&field.sub(&field.square(&m), &self.x), &other.x);
        let y3 = field.sub(&field.mul(&m, &field.sub(&self.x, &x3)), &self.y);
        Self::new(x3, y3)
    }

    /// Tangent doubling, one field inversion.
    pub fn dbl(&self, field: &FiniteField) -> Self {
        if self.infinity {
            return Self::infinity();
        }
        // m = 3x^2 / 2y
        let x_sq = field.square(&self.x);
        let numerator = field.add(&field.add(&x_sq, &x_sq), &x_sq);
        let Some(m) = field.div(&numerator, &field.add(&self.y, &self.y)) else {
            panic!("affine double: point of order two");
        };
        let x3 = field.sub(&field.square(&m), &field.add(&self.x, &self.x));
        let y3 = field.sub(&field.mul(&m, &field.sub(&self.x, &x3)), &self.y);
        Self::new(x3, y3)
    }

    pub fn sub(&self, other: &Self, field: &FiniteField) -> Self {
        self.add(&other.negate(field), field)
    }

    /// Double-and-add through Jacobian coordinates, normalized once at the end.
    pub fn scale(&self, scalar: &BigUint, field: &FiniteField) -> Self {
        ProjectivePoint::from_affine(self)
            .scale(scalar, field)
            .to_affine(field)
    }
}
