//! Arithmetic modulo a prime
//!
//! Pure functions of `(value, modulus)` over [`BigUint`]. Every function that
//! divides by the modulus panics on a zero modulus, exactly as `num-bigint`
//! division does; curve code only ever passes a validated `p > 3`.

mod sqrt;

pub use sqrt::mod_sqrt;

use capicrypto_common::math_common;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive, Zero};

/// Floor-mod: `n mod m` in `[0, m)`, also for negative `n`
pub fn reduce(n: &BigInt, m: &BigUint) -> BigUint {
    debug_assert!(!m.is_zero(), "reduce: zero modulus");
    let modulus = BigInt::from(m.clone());
    let mut r = n % &modulus;
    if r < BigInt::zero() {
        r += &modulus;
    }
    r.into_parts().1
}

/// Modular exponentiation `base^exp mod m` by repeated squaring
pub fn power(base: &BigUint, exp: &BigUint, m: &BigUint) -> BigUint {
    if m.is_one() {
        return BigUint::zero();
    }
    base.modpow(exp, m)
}

/// Multiplicative inverse of `a` modulo `m`.
///
/// Returns `None` when `gcd(a, m) ≠ 1`. That is an outcome, not a failure:
/// callers decide whether a missing inverse is a geometric degeneracy or a
/// broken invariant.
pub fn inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() || m.is_one() {
        return None;
    }
    if let (Some(a), Some(m)) = (a.to_u64(), m.to_u64()) {
        return math_common::mod_inv(a, m).map(BigUint::from);
    }
    let a = a % m;
    if a.is_zero() {
        return None;
    }

    let (mut old_r, mut r) = (BigInt::from(a), BigInt::from(m.clone()));
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = core::mem::replace(&mut r, next_r);
        let next_s = &old_s - &q * &s;
        old_s = core::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return None;
    }
    Some(reduce(&old_s, m))
}

/// Euler's criterion: `n^((m-1)/2) ≡ 1 (mod m)`.
///
/// Requires `m` to be an odd prime. Zero is reported as a non-residue.
pub fn is_quadratic_residue(n: &BigUint, m: &BigUint) -> bool {
    let n = n % m;
    if n.is_zero() {
        return false;
    }
    let exp = (m - 1u32) >> 1u32;
    power(&n, &exp, m).is_one()
}

/// `(a + b) mod m`
#[inline]
pub fn add_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `(a - b) mod m`, without leaving the unsigned domain
#[inline]
pub fn sub_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    let (a, b) = (a % m, b % m);
    if a >= b {
        a - b
    } else {
        m - (b - a)
    }
}

/// `(a * b) mod m`
#[inline]
pub fn mul_mod(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// `-a mod m`
#[inline]
pub fn neg_mod(a: &BigUint, m: &BigUint) -> BigUint {
    let a = a % m;
    if a.is_zero() {
        a
    } else {
        m - a
    }
}

/// Greatest common divisor; `gcd(0, 0) = 0`
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    if let (Some(a), Some(b)) = (a.to_u64(), b.to_u64()) {
        return BigUint::from(math_common::gcd(a, b));
    }
    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let r = &a % &b;
        a = core::mem::replace(&mut b, r);
    }
    a
}

/// Integer square root: the largest `r` with `r² <= n`
pub fn isqrt(n: &BigUint) -> BigUint {
    match n.to_u64() {
        Some(word) => BigUint::from(math_common::isqrt(word)),
        None => n.sqrt(),
    }
}
