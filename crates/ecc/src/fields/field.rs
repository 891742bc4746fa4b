use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use rand::RngCore;

use pasta_numeric::bitop::ceil_div;
use pasta_numeric::random::os_rng;

use super::field_params::{parse_constant, FieldParams};
use crate::error::EccError;

/// Tonelli-Shanks constant `c = non_square^t`, memoized per modulus.
///
/// Pure function of the modulus: a race recomputes the same value, and the
/// first writer wins.
static PRECOMPUTED_C: Lazy<RwLock<HashMap<BigUint, BigUint>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

// ---------------------------------------------------------------------------
// FieldElement
// ---------------------------------------------------------------------------

/// A prime field element: an integer always reduced into [0, p).
///
/// Elements are only produced by a `FiniteField`, which normalizes every
/// result, so two elements of the same field are equal iff their values are.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FieldElement(BigUint);

impl FieldElement {
    /// Additive identity, valid in every field.
    #[inline]
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Multiplicative identity, valid in every field.
    #[inline]
    pub fn one() -> Self {
        Self(BigUint::one())
    }

    /// The canonical integer representative in [0, p).
    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    #[inline]
    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:064x})", self.0)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FieldElement> for BigUint {
    fn from(x: FieldElement) -> Self {
        x.0
    }
}

// ---------------------------------------------------------------------------
// FiniteField
// ---------------------------------------------------------------------------

/// Immutable descriptor of a prime field F_p.
///
/// Besides the modulus it carries the Tonelli-Shanks data: the two-adicity M,
/// the odd factor t with p - 1 = 2^M * t, and a fixed non-square.
#[derive(Clone, PartialEq, Eq)]
pub struct FiniteField {
    modulus: BigUint,
    size_in_bits: u64,
    two_adicity: u32,
    odd_factor: BigUint,
    non_square: BigUint,
}

impl fmt::Debug for FiniteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FiniteField(0x{:x})", self.modulus)
    }
}

/// Split p - 1 into (M, t) with p - 1 = 2^M * t and t odd.
fn split_two_adicity(modulus: &BigUint) -> (u32, BigUint) {
    let p_minus_one = modulus - 1u32;
    let two_adicity = p_minus_one.trailing_zeros().unwrap_or(0);
    let odd_factor = &p_minus_one >> two_adicity;
    (two_adicity as u32, odd_factor)
}

fn check_modulus(modulus: &BigUint) -> Result<(), EccError> {
    if *modulus <= BigUint::from(2u32) || modulus.is_even() {
        return Err(EccError::InvalidModulus);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl FiniteField {
    /// Build a field from its modulus alone, deriving the square-root data.
    ///
    /// The non-square is the smallest quadratic non-residue z >= 2.
    pub fn new(modulus: BigUint) -> Result<Self, EccError> {
        check_modulus(&modulus)?;
        let (two_adicity, odd_factor) = split_two_adicity(&modulus);
        let mut field = Self {
            size_in_bits: modulus.bits(),
            modulus,
            two_adicity,
            odd_factor,
            non_square: BigUint::zero(),
        };

        let mut z = BigUint::from(2u32);
        while field.is_square(&FieldElement(z.clone())) {
            z += 1u32;
            if z >= field.modulus {
                return Err(EccError::InvalidModulus);
            }
        }
        field.non_square = z;
        Ok(field)
    }

    /// Build a field from published constants, checking they fit the modulus.
    pub fn with_constants(
        modulus: BigUint,
        two_adicity: u32,
        odd_factor: BigUint,
        non_square: BigUint,
    ) -> Result<Self, EccError> {
        check_modulus(&modulus)?;
        if odd_factor.is_even() || (&odd_factor << two_adicity) + 1u32 != modulus {
            return Err(EccError::InconsistentTwoAdicity { two_adicity });
        }
        let field = Self {
            size_in_bits: modulus.bits(),
            non_square: &non_square % &modulus,
            modulus,
            two_adicity,
            odd_factor,
        };
        if field.is_square(&FieldElement(field.non_square.clone())) {
            return Err(EccError::NonSquareIsSquare);
        }
        Ok(field)
    }

    /// Build a field from a compile-time parameter set.
    pub fn from_params<P: FieldParams>() -> Result<Self, EccError> {
        Self::with_constants(
            parse_constant("MODULUS", P::MODULUS)?,
            P::TWO_ADICITY,
            parse_constant("ODD_FACTOR", P::ODD_FACTOR)?,
            parse_constant("NON_SQUARE", P::NON_SQUARE)?,
        )
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    #[inline]
    pub fn size_in_bits(&self) -> u64 {
        self.size_in_bits
    }

    #[inline]
    pub fn two_adicity(&self) -> u32 {
        self.two_adicity
    }

    #[inline]
    pub fn odd_factor(&self) -> &BigUint {
        &self.odd_factor
    }

    #[inline]
    pub fn non_square(&self) -> FieldElement {
        FieldElement(self.non_square.clone())
    }

    #[inline]
    pub fn zero(&self) -> FieldElement {
        FieldElement::zero()
    }

    #[inline]
    pub fn one(&self) -> FieldElement {
        FieldElement::one()
    }

    pub fn from_u64(&self, value: u64) -> FieldElement {
        FieldElement(BigUint::from(value) % &self.modulus)
    }

    pub fn from_biguint(&self, value: &BigUint) -> FieldElement {
        FieldElement(value % &self.modulus)
    }

    /// Reduce a signed integer into [0, p).
    pub fn from_bigint(&self, value: &BigInt) -> FieldElement {
        let modulus = BigInt::from(self.modulus.clone());
        let reduced = value.mod_floor(&modulus);
        FieldElement(reduced.magnitude().clone())
    }
}

// ---------------------------------------------------------------------------
// Core arithmetic
// ---------------------------------------------------------------------------

impl FiniteField {
    pub fn add(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        let sum = &x.0 + &y.0;
        if sum >= self.modulus {
            FieldElement(sum - &self.modulus)
        } else {
            FieldElement(sum)
        }
    }

    pub fn sub(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        if x.0 >= y.0 {
            FieldElement(&x.0 - &y.0)
        } else {
            FieldElement(&x.0 + &self.modulus - &y.0)
        }
    }

    pub fn negate(&self, x: &FieldElement) -> FieldElement {
        if x.is_zero() {
            FieldElement::zero()
        } else {
            FieldElement(&self.modulus - &x.0)
        }
    }

    pub fn mul(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        FieldElement((&x.0 * &y.0) % &self.modulus)
    }

    pub fn square(&self, x: &FieldElement) -> FieldElement {
        self.mul(x, x)
    }

    /// a^n by square-and-multiply.
    ///
    /// The exponent is first reduced mod (p - 1). By Fermat this is exact for
    /// nonzero `a`; for `a = 0` and a multiple of p - 1 the result is 1.
    pub fn power(&self, a: &FieldElement, n: &BigUint) -> FieldElement {
        let exponent = n % (&self.modulus - 1u32);
        FieldElement(a.0.modpow(&exponent, &self.modulus))
    }

    /// 1/a via the extended Euclidean algorithm. `None` for a = 0.
    pub fn inverse(&self, a: &FieldElement) -> Option<FieldElement> {
        if a.is_zero() {
            return None;
        }
        // invariant: s_i * a == r_i (mod p)
        let mut r0 = BigInt::from(self.modulus.clone());
        let mut r1 = BigInt::from(a.0.clone());
        let mut s0 = BigInt::zero();
        let mut s1 = BigInt::one();
        while !r1.is_zero() {
            let quotient = &r0 / &r1;
            let r2 = &r0 - &quotient * &r1;
            let s2 = &s0 - &quotient * &s1;
            r0 = std::mem::replace(&mut r1, r2);
            s0 = std::mem::replace(&mut s1, s2);
        }
        if !r0.is_one() {
            return None;
        }
        Some(self.from_bigint(&s0))
    }

    /// x / y, or `None` when y = 0.
    pub fn div(&self, x: &FieldElement, y: &FieldElement) -> Option<FieldElement> {
        self.inverse(y).map(|y_inv| self.mul(x, &y_inv))
    }

    /// Euler's criterion: x^((p-1)/2) == 1. Zero counts as a square.
    pub fn is_square(&self, x: &FieldElement) -> bool {
        if x.is_zero() {
            return true;
        }
        let exponent = (&self.modulus - 1u32) >> 1u32;
        self.power(x, &exponent).is_one()
    }

    pub fn is_even(&self, x: &FieldElement) -> bool {
        x.0.is_even()
    }

    /// Sum of pairwise products, reduced once at the end.
    pub fn dot(&self, xs: &[FieldElement], ys: &[FieldElement]) -> FieldElement {
        debug_assert_eq!(xs.len(), ys.len(), "dot: length mismatch");
        let sum = xs
            .iter()
            .zip(ys)
            .fold(BigUint::zero(), |acc, (x, y)| acc + &x.0 * &y.0);
        FieldElement(sum % &self.modulus)
    }
}

// ---------------------------------------------------------------------------
// Square roots and roots of unity
// ---------------------------------------------------------------------------

impl FiniteField {
    fn precomputed_c(&self) -> BigUint {
        let cached = PRECOMPUTED_C
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&self.modulus)
            .cloned();
        if let Some(c) = cached {
            return c;
        }
        let c = self
            .power(&FieldElement(self.non_square.clone()), &self.odd_factor)
            .0;
        tracing::trace!(modulus = %self.modulus, "memoizing Tonelli-Shanks constant");
        PRECOMPUTED_C
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(self.modulus.clone())
            .or_insert_with(|| c.clone());
        c
    }

    /// Square root by Tonelli-Shanks. `None` if `n` is not a square.
    ///
    /// Maintains R^2 = n * t_acc, starting from t_acc = n^t and
    /// R = n^((t+1)/2), and shrinks the order of t_acc until it reaches 1.
    pub fn sqrt(&self, n: &FieldElement) -> Option<FieldElement> {
        let p = &self.modulus;
        let mut m = self.two_adicity;
        let mut c = self.precomputed_c();
        let mut t = self.power(n, &self.odd_factor).0;
        let mut r = self.power(n, &((&self.odd_factor + 1u32) >> 1u32)).0;

        loop {
            if t.is_zero() {
                return Some(FieldElement::zero());
            }
            if t.is_one() {
                return Some(FieldElement(r));
            }

            // least i < m with t^(2^i) == 1
            let mut i = 0u32;
            let mut s = t.clone();
            while !s.is_one() {
                s = (&s * &s) % p;
                i += 1;
                if i >= m {
                    return None;
                }
            }

            // b = c^(2^(m - i - 1))
            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = (&b * &b) % p;
            }
            m = i;
            c = (&b * &b) % p;
            t = (&t * &c) % p;
            r = (&r * &b) % p;
        }
    }

    /// A primitive 2^k-th root of unity, for k <= M.
    ///
    /// Obtained by squaring the primitive 2^M-th root `non_square^t` M - k
    /// times; k = 0 yields 1.
    pub fn root_of_unity(&self, log2_size: u32) -> FieldElement {
        assert!(
            log2_size <= self.two_adicity,
            "log2 size of evaluation domain must be in [0, {}], got {}",
            self.two_adicity,
            log2_size
        );
        let mut root = self.precomputed_c();
        for _ in log2_size..self.two_adicity {
            root = (&root * &root) % &self.modulus;
        }
        FieldElement(root)
    }
}

// ---------------------------------------------------------------------------
// Random sampling
// ---------------------------------------------------------------------------

impl FiniteField {
    /// Uniformly random element from the thread-local CSPRNG.
    pub fn random(&self) -> FieldElement {
        self.random_from_rng(&mut os_rng())
    }

    /// Rejection sampling: draw `size_in_bits` random bits until the value is
    /// below p. For the 255-bit Pasta moduli this clears the top bit of 32 bytes.
    pub fn random_from_rng<R: RngCore + ?Sized>(&self, rng: &mut R) -> FieldElement {
        let size_in_bytes = ceil_div(self.size_in_bits, 8) as usize;
        let hi_bits = self.size_in_bits - 8 * (size_in_bytes as u64 - 1);
        let hi_mask = ((1u16 << hi_bits) - 1) as u8;
        let mut bytes = vec![0u8; size_in_bytes];
        loop {
            rng.fill_bytes(&mut bytes);
            bytes[size_in_bytes - 1] &= hi_mask;
            let candidate = BigUint::from_bytes_le(&bytes);
            if candidate < self.modulus {
                return FieldElement(candidate);
            }
        }
    }
}
