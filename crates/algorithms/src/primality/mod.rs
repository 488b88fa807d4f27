//! Primality testing
//!
//! [`is_prime`] picks its method by size:
//! - below [`TRIAL_DIVISION_LIMIT`], trial division over the 6k±1 wheel;
//! - from there on, Miller–Rabin with the fixed witness set
//!   [`MILLER_RABIN_WITNESSES`].
//!
//! The witness set is exact for every `n` below
//! [`MILLER_RABIN_DETERMINISTIC_BOUND`]. Beyond it the test is
//! probabilistic: primes are never rejected, but a composite passing all
//! twelve witnesses is reported as prime. That bound is itself such a
//! composite. [`primality`] tells the two regimes apart.

mod factor;

pub use factor::{factorize, Factorization};

use capicrypto_api::PrimalityTest;
use capicrypto_common::math_common::{mod_exp, mod_mul};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

/// Inputs below this are decided by trial division
pub const TRIAL_DIVISION_LIMIT: u64 = 1_000_000;

/// Miller–Rabin bases: the first twelve primes
pub const MILLER_RABIN_WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Smallest composite passing Miller–Rabin for all of [`MILLER_RABIN_WITNESSES`]
/// (399165290221 × 798330580441)
pub const MILLER_RABIN_DETERMINISTIC_BOUND: u128 = 318_665_857_834_031_151_167_461;

/// Outcome of a primality test, with its certainty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primality {
    /// Certainly composite (or below 2)
    Composite,
    /// Certainly prime
    Prime,
    /// Passed every witness above the deterministic bound
    ProbablePrime,
}

impl Primality {
    /// Prime or probable prime
    pub fn is_prime(self) -> bool {
        !matches!(self, Primality::Composite)
    }

    /// Whether the verdict is exact
    pub fn is_certain(self) -> bool {
        !matches!(self, Primality::ProbablePrime)
    }
}

/// Decide whether `n` is prime
pub fn is_prime(n: &BigUint) -> bool {
    primality(n).is_prime()
}

/// Decide whether `n` is prime, reporting how certain the answer is
pub fn primality(n: &BigUint) -> Primality {
    if let Some(word) = n.to_u64() {
        let prime = if word < TRIAL_DIVISION_LIMIT {
            trial_division_u64(word)
        } else {
            // Below 2⁶⁴ the witness set is exact.
            miller_rabin_u64(word)
        };
        return if prime {
            Primality::Prime
        } else {
            Primality::Composite
        };
    }

    if !miller_rabin_big(n) {
        Primality::Composite
    } else if *n < BigUint::from(MILLER_RABIN_DETERMINISTIC_BOUND) {
        Primality::Prime
    } else {
        Primality::ProbablePrime
    }
}

/// Trial division over the 6k±1 wheel, for any size of input.
///
/// Exact, but the running time grows with `√n`; only practical for
/// small inputs.
pub fn trial_division(n: &BigUint) -> bool {
    if let Some(word) = n.to_u64() {
        return trial_division_u64(word);
    }

    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);
    if (n % &two).is_zero() || (n % &three).is_zero() {
        return false;
    }
    let mut i = BigUint::from(5u32);
    while &i * &i <= *n {
        if (n % &i).is_zero() || (n % (&i + 2u32)).is_zero() {
            return false;
        }
        i += 6u32;
    }
    true
}

/// Miller–Rabin over [`MILLER_RABIN_WITNESSES`], for any size of input.
///
/// Witnesses not below `n` are skipped.
pub fn miller_rabin(n: &BigUint) -> bool {
    match n.to_u64() {
        Some(word) => miller_rabin_u64(word),
        None => miller_rabin_big(n),
    }
}

fn trial_division_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5u64;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

fn miller_rabin_u64(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let r = (n - 1).trailing_zeros();
    let d = (n - 1) >> r;

    'witness: for &a in MILLER_RABIN_WITNESSES.iter() {
        let a = u64::from(a);
        if a >= n {
            continue;
        }
        let mut x = mod_exp(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..r {
            x = mod_mul(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Miller–Rabin for inputs wider than a machine word (so `n > 37`)
fn miller_rabin_big(n: &BigUint) -> bool {
    if !n.bit(0) {
        return false;
    }

    let n_minus_one = n - 1u32;
    let r = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> r;

    'witness: for &a in MILLER_RABIN_WITNESSES.iter() {
        let mut x = BigUint::from(a).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..r {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// Trial division as a [`PrimalityTest`]; exact, slow on large inputs
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialDivision;

impl PrimalityTest for TrialDivision {
    fn name(&self) -> &'static str {
        "trial-division"
    }

    fn is_prime(&self, n: &BigUint) -> bool {
        trial_division(n)
    }
}

/// Miller–Rabin with the fixed witness set as a [`PrimalityTest`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MillerRabin;

impl PrimalityTest for MillerRabin {
    fn name(&self) -> &'static str {
        "miller-rabin"
    }

    fn is_prime(&self, n: &BigUint) -> bool {
        miller_rabin(n)
    }
}

/// The size-switching test behind [`is_prime`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPrimality;

impl PrimalityTest for StandardPrimality {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn is_prime(&self, n: &BigUint) -> bool {
        is_prime(n)
    }
}
