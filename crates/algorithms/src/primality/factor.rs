//! Partial factorisation by trial division

use super::is_prime;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Prime powers split off an integer, plus whatever remained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    /// `(prime, exponent)` pairs in increasing order of prime
    pub factors: Vec<(BigUint, u32)>,
    /// Unfactored part; `1` when the factorisation is complete
    pub cofactor: BigUint,
}

impl Factorization {
    /// Whether nothing is left unfactored
    pub fn is_complete(&self) -> bool {
        self.cofactor.is_one()
    }

    /// The distinct primes found, cofactor included when it is prime
    pub fn primes(&self) -> Vec<BigUint> {
        let mut primes: Vec<BigUint> = self.factors.iter().map(|(p, _)| p.clone()).collect();
        if !self.cofactor.is_one() && is_prime(&self.cofactor) {
            primes.push(self.cofactor.clone());
        }
        primes
    }
}

/// Split off every prime factor of `n` not exceeding `limit`.
///
/// When the leftover cofactor is prime (checked with [`is_prime`]) it is
/// moved into `factors`, so small inputs always factor completely. `0` and
/// `1` have no factors.
pub fn factorize(n: &BigUint, limit: u64) -> Factorization {
    let mut factors = Vec::new();
    if n.is_zero() || n.is_one() {
        return Factorization {
            factors,
            cofactor: n.clone(),
        };
    }

    let mut rest = n.clone();
    let mut d = 2u64;
    while d <= limit {
        let divisor = BigUint::from(d);
        if &divisor * &divisor > rest {
            break;
        }
        let mut exponent = 0u32;
        while (&rest % &divisor).is_zero() {
            rest /= &divisor;
            exponent += 1;
        }
        if exponent > 0 {
            factors.push((divisor, exponent));
        }
        d = if d == 2 { 3 } else { d + 2 };
    }

    // Every prime up to the last divisor tried has been divided out.
    if !rest.is_one() && is_prime(&rest) {
        factors.push((rest, 1));
        rest = BigUint::one();
    }

    Factorization {
        factors,
        cofactor: rest,
    }
}
