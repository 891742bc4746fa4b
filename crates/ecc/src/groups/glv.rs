// GLV lattice basis and scalar decomposition.
//
// For a scalar s and eigenvalue lambda of the endomorphism, find s0, s1 with
// s = s0 + s1 * lambda (mod q) and |s0|, |s1| ~ sqrt(q). Any integers x0, x1
// give a valid split s0 = x0*v00 + x1*v01 + s, s1 = x0*v10 + x1*v11 as long as
// each column of V satisfies v0j + lambda * v1j = 0 (mod q); choosing x0, x1
// as the rounded rational solution of V * x = (-s, 0) keeps both halves short.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};

use pasta_numeric::bigint::{divide_and_round, max_abs};
use pasta_numeric::bitop::ceil_log2;

/// A short basis of the lattice {(a, b) : a + b * lambda = 0 (mod q)} plus the
/// bounds it implies on decomposed scalars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlvBasis {
    pub v00: BigInt,
    pub v01: BigInt,
    pub v10: BigInt,
    pub v11: BigInt,
    pub det: BigInt,
    /// Upper bound on |s0|: floor((|v00| + |v01|) / 2) + 1.
    pub max_s0: BigUint,
    /// Upper bound on |s1|: floor((|v10| + |v11|) / 2) + 1.
    pub max_s1: BigUint,
    /// ceil(log2(max(max_s0, max_s1))), the ladder length of the GLV multiply.
    pub max_bits: u64,
}

/// Signed halves of a decomposed scalar: s = s0 + s1 * lambda (mod q).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decomposition {
    pub s0: BigInt,
    pub s1: BigInt,
}

impl Decomposition {
    #[inline]
    pub fn s0_is_negative(&self) -> bool {
        self.s0.is_negative()
    }

    #[inline]
    pub fn s1_is_negative(&self) -> bool {
        self.s1.is_negative()
    }
}

/// Extended Euclid on (q, lambda), stopped once the remainder drops below
/// sqrt(q), plus one extra step.
///
/// Returns the basis as [[v00, v01], [v10, v11]]. Each r_i + (-t_i) * lambda is
/// 0 mod q, so column j is (r, -t) for one of the remainders.
fn egcd_stop_early(lambda: &BigUint, q: &BigUint) -> [[BigInt; 2]; 2] {
    let q_int = BigInt::from(q.clone());
    let (mut r0, mut r1) = (q_int.clone(), BigInt::from(lambda.clone()));
    let (mut t0, mut t1) = (BigInt::zero(), BigInt::from(1));

    while &r1 * &r1 > q_int {
        let quotient = &r0 / &r1;
        let r2 = &r0 - &quotient * &r1;
        let t2 = &t0 - &quotient * &t1;
        r0 = std::mem::replace(&mut r1, r2);
        t0 = std::mem::replace(&mut t1, t2);
    }

    let quotient = &r0 / &r1;
    let r2 = &r0 - &quotient * &r1;
    let t2 = &t0 - &quotient * &t1;

    let (v00, v10) = (r1, -t1);
    // ties go to the state before the last step
    let (v01, v11) = if max_abs(&r0, &t0) <= max_abs(&r2, &t2) {
        (r0, -t0)
    } else {
        (r2, -t2)
    };
    [[v00, v01], [v10, v11]]
}

impl GlvBasis {
    /// Build the basis for eigenvalue `lambda` of a group of prime order `q`.
    ///
    /// Panics if `lambda > q` or `lambda == 0`.
    #[tracing::instrument(skip_all, name = "GlvBasis::compute")]
    pub fn compute(q: &BigUint, lambda: &BigUint) -> Self {
        assert!(lambda <= q, "GLV basis: lambda must not exceed the group order");
        assert!(!lambda.is_zero(), "GLV basis: lambda must be nonzero");

        let [[v00, v01], [v10, v11]] = egcd_stop_early(lambda, q);
        let det = &v00 * &v11 - &v10 * &v01;

        let max_s0: BigUint = ((v00.magnitude() + v01.magnitude()) >> 1u32) + 1u32;
        let max_s1: BigUint = ((v10.magnitude() + v11.magnitude()) >> 1u32) + 1u32;
        let max_bits = ceil_log2((&max_s0).max(&max_s1));

        tracing::debug!(max_bits, "computed GLV basis");
        Self {
            v00,
            v01,
            v10,
            v11,
            det,
            max_s0,
            max_s1,
            max_bits,
        }
    }

    /// Split `s` into (s0, s1) with s = s0 + s1 * lambda (mod q).
    ///
    /// x0 = round(-v11 * s / det), x1 = round(v10 * s / det), rounding halves
    /// away from zero; then s0 = v00*x0 + v01*x1 + s and s1 = v10*x0 + v11*x1.
    pub fn decompose(&self, s: &BigUint) -> Decomposition {
        let s = BigInt::from_biguint(Sign::Plus, s.clone());
        let x0 = divide_and_round(&(-&self.v11 * &s), &self.det);
        let x1 = divide_and_round(&(&self.v10 * &s), &self.det);
        let s0 = &self.v00 * &x0 + &self.v01 * &x1 + &s;
        let s1 = &self.v10 * &x0 + &self.v11 * &x1;
        Decomposition { s0, s1 }
    }
}
