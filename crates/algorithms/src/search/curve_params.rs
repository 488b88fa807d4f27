//! Sweep over candidate curves for prime group orders

use super::config::SearchConfig;
use super::generator::find_generator;
use super::order::search_order;
use crate::ec::{Curve, CurveParams, Point};
use crate::error::{Error, Result, ResultExt};
use crate::field::mul_mod;
use crate::primality::{factorize, StandardPrimality, TRIAL_DIVISION_LIMIT};
use capicrypto_api::PrimalityTest;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// A curve whose generator has prime order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundCurve {
    /// Curve parameters
    pub params: CurveParams,
    /// Base whose square is `a`
    pub base_a: BigUint,
    /// Base reduced to `b`
    pub base_b: BigUint,
    /// First point of the generator scan
    pub generator: Point,
    /// Prime order of the generator, and so of the group
    pub order: BigUint,
}

impl FoundCurve {
    /// Frobenius trace `p + 1 - n`
    pub fn trace(&self) -> BigInt {
        BigInt::from(self.params.p() + 1u32) - BigInt::from(self.order.clone())
    }

    /// A [`Curve`] with the verified order
    pub fn into_curve(self) -> Result<Curve> {
        Curve::new(self.params, self.generator, self.order).with_context("FoundCurve::into_curve")
    }
}

/// Why a candidate was discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// `a ≡ 0` or `b ≡ 0` while zero coefficients are skipped
    ZeroCoefficient,
    /// The discriminant vanishes
    Singular,
    /// The modulus is not a prime above 3
    InvalidModulus,
    /// The generator scan found no point
    NoGenerator,
    /// No order within the search radius
    NoOrder,
    /// The order found is composite
    CompositeOrder {
        /// The order found
        order: BigUint,
        /// Its prime factorisation, as far as trial division gets
        factors: Vec<(BigUint, u32)>,
    },
}

/// A discarded candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCandidate {
    /// Modulus
    pub p: BigUint,
    /// `(base_a, base_b)`, absent when the modulus itself was rejected
    pub bases: Option<(BigUint, BigUint)>,
    /// Reason
    pub reason: Rejection,
}

/// Everything a search produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Curves with prime order, in plan order
    pub found: Vec<FoundCurve>,
    /// Discarded candidates, in plan order
    pub rejected: Vec<RejectedCandidate>,
}

impl SearchReport {
    /// Rejections matching `predicate`
    pub fn rejections<'a>(
        &'a self,
        predicate: impl Fn(&Rejection) -> bool + 'a,
    ) -> impl Iterator<Item = &'a RejectedCandidate> + 'a {
        self.rejected.iter().filter(move |r| predicate(&r.reason))
    }

    /// The found curve over `p` with coefficients `(a, b)`, if any
    pub fn find(&self, p: &BigUint, a: &BigUint, b: &BigUint) -> Option<&FoundCurve> {
        self.found
            .iter()
            .find(|c| c.params.p() == p && c.params.a() == a && c.params.b() == b)
    }
}

/// Run `config` with the standard primality test
pub fn search_curves(config: &SearchConfig) -> Result<SearchReport> {
    search_curves_with(config, &StandardPrimality)
}

/// Run `config`, deciding moduli and orders with `tester`.
///
/// Candidates are visited modulus by modulus, bases in order. Bounded
/// search failures become [`Rejection`]s; any other error aborts the search.
pub fn search_curves_with<T: PrimalityTest + ?Sized>(
    config: &SearchConfig,
    tester: &T,
) -> Result<SearchReport> {
    let mut report = SearchReport::default();

    for p in &config.primes {
        if *p <= BigUint::from(3u32) || !tester.is_prime(p) {
            report.rejected.push(RejectedCandidate {
                p: p.clone(),
                bases: None,
                reason: Rejection::InvalidModulus,
            });
            continue;
        }

        for (base_a, base_b) in &config.bases {
            let reject = |reason| RejectedCandidate {
                p: p.clone(),
                bases: Some((base_a.clone(), base_b.clone())),
                reason,
            };

            let a = mul_mod(base_a, base_a, p);
            let b = base_b % p;
            if config.skip_zero_coefficients && (a.is_zero() || b.is_zero()) {
                report.rejected.push(reject(Rejection::ZeroCoefficient));
                continue;
            }

            let params = match CurveParams::new(p.clone(), a, b) {
                Ok(params) => params,
                Err(Error::SingularCurve { .. }) => {
                    report.rejected.push(reject(Rejection::Singular));
                    continue;
                }
                Err(Error::InvalidParameter { .. }) => {
                    report.rejected.push(reject(Rejection::InvalidModulus));
                    continue;
                }
                Err(e) => return Err(e),
            };

            let generator = match find_generator(&params, &config.x_max) {
                Ok(g) => g,
                Err(Error::NoGeneratorFound { .. }) => {
                    report.rejected.push(reject(Rejection::NoGenerator));
                    continue;
                }
                Err(e) => return Err(e),
            };

            let order = match search_order(&generator, &params, &config.search_radius) {
                Ok(found) => found.order,
                Err(Error::NoOrderFound { .. }) => {
                    report.rejected.push(reject(Rejection::NoOrder));
                    continue;
                }
                Err(e) => return Err(e),
            };

            if tester.is_prime(&order) {
                report.found.push(FoundCurve {
                    params,
                    base_a: base_a.clone(),
                    base_b: base_b.clone(),
                    generator,
                    order,
                });
            } else {
                let factors = factorize(&order, TRIAL_DIVISION_LIMIT).factors;
                report
                    .rejected
                    .push(reject(Rejection::CompositeOrder { order, factors }));
            }
        }
    }

    Ok(report)
}
