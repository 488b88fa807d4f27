//! Modular square roots
//!
//! Two algorithms, selected by `p mod 4`:
//! - `p ≡ 3 (mod 4)`: the closed form `n^((p+1)/4)`,
//! - `p ≡ 1 (mod 4)`: Tonelli–Shanks.

use super::{is_quadratic_residue, mul_mod, power};
use crate::error::{validate, Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A square root of `n` modulo the odd prime `p`.
///
/// The residue precondition is checked up front: a non-residue yields
/// [`Error::NonResidue`] instead of an arbitrary value. `n ≡ 0` has the
/// root `0`. Which of the two roots `±r` comes back is unspecified.
pub fn mod_sqrt(n: &BigUint, p: &BigUint) -> Result<BigUint> {
    validate::parameter(p.bit(0) && *p > BigUint::one(), "mod_sqrt", "modulus must be an odd prime")?;

    let n = n % p;
    if n.is_zero() {
        return Ok(n);
    }
    if !is_quadratic_residue(&n, p) {
        return Err(non_residue(n, p));
    }

    if p.bit(1) {
        // p ≡ 3 (mod 4)
        let exp = (p + 1u32) >> 2u32;
        return Ok(power(&n, &exp, p));
    }
    tonelli_shanks(&n, p)
}

/// Tonelli–Shanks for `p ≡ 1 (mod 4)`; `n` is a non-zero residue
fn tonelli_shanks(n: &BigUint, p: &BigUint) -> Result<BigUint> {
    // p - 1 = Q·2^S with Q odd
    let p_minus_one = p - 1u32;
    let s = p_minus_one.trailing_zeros().unwrap_or(0);
    let q = &p_minus_one >> s;

    let z = least_non_residue(p)?;

    let mut m = s;
    let mut c = power(&z, &q, p);
    let mut t = power(n, &q, p);
    let mut r = power(n, &((&q + 1u32) >> 1u32), p);

    // The order of t in the 2-group drops every round, so at most S rounds.
    while !t.is_one() {
        let mut i = 0u64;
        let mut t_pow = t.clone();
        while !t_pow.is_one() {
            t_pow = mul_mod(&t_pow, &t_pow, p);
            i += 1;
            if i >= m {
                return Err(non_residue(n.clone(), p));
            }
        }

        // b = c^(2^(M - i - 1))
        let mut b = c;
        for _ in 0..(m - i - 1) {
            b = mul_mod(&b, &b, p);
        }

        m = i;
        c = mul_mod(&b, &b, p);
        t = mul_mod(&t, &c, p);
        r = mul_mod(&r, &b, p);
    }

    Ok(r)
}

/// Smallest quadratic non-residue, scanning up from 2
fn least_non_residue(p: &BigUint) -> Result<BigUint> {
    let mut z = BigUint::from(2u32);
    while &z < p {
        if !is_quadratic_residue(&z, p) {
            return Ok(z);
        }
        z += 1u32;
    }
    Err(Error::param(
        "mod_sqrt",
        format!("no quadratic non-residue below {p}; modulus is not an odd prime"),
    ))
}

fn non_residue(value: BigUint, p: &BigUint) -> Error {
    Error::NonResidue {
        value,
        modulus: p.clone(),
    }
}
