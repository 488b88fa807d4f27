//! Group order discovery around p + 1
//!
//! Hasse: the number of points `N` of a curve over 𝔽ₚ satisfies
//! `|N - (p + 1)| <= 2√p`. The order of any point divides `N`, so the
//! candidate closest to `p + 1` that annihilates a point is at most that
//! far away. Candidates are tried by plain scalar multiplication, which
//! limits this module to fields of a few dozen bits.

use crate::ec::{scalar_mul, scalar_mul_traced, CurveParams, OrderStatus, Point};
use crate::error::{validate, Error, Result};
use crate::field::{gcd, isqrt};
use crate::primality::{factorize, TRIAL_DIVISION_LIMIT};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// The Hasse interval `[p + 1 - ⌊2√p⌋, p + 1 + ⌊2√p⌋]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasseInterval {
    center: BigUint,
    half_width: BigUint,
}

impl HasseInterval {
    /// The interval for curves over 𝔽ₚ
    pub fn for_modulus(p: &BigUint) -> Self {
        // ⌊2√p⌋ = ⌊√(4p)⌋
        let half_width = isqrt(&(p << 2u32));
        Self {
            center: p + 1u32,
            half_width,
        }
    }

    /// `p + 1`
    pub fn center(&self) -> &BigUint {
        &self.center
    }

    /// `⌊2√p⌋`
    pub fn half_width(&self) -> &BigUint {
        &self.half_width
    }

    /// Smallest possible group order
    pub fn lower(&self) -> BigUint {
        &self.center - &self.half_width
    }

    /// Largest possible group order
    pub fn upper(&self) -> BigUint {
        &self.center + &self.half_width
    }

    /// Whether `n` lies in the interval
    pub fn contains(&self, n: &BigUint) -> bool {
        *n >= self.lower() && *n <= self.upper()
    }

    /// `radius` clamped to the half-width
    pub fn effective_radius(&self, radius: &BigUint) -> BigUint {
        radius.min(&self.half_width).clone()
    }

    /// Candidates `p + 1 + δ` for `δ = 0, +1, -1, +2, -2, …` up to the
    /// effective radius; non-positive candidates are skipped
    pub fn candidates(&self, radius: &BigUint) -> Candidates {
        Candidates {
            center: self.center.clone(),
            radius: self.effective_radius(radius),
            step: BigUint::zero(),
            pending_negative: None,
        }
    }
}

/// One order candidate and its offset from `p + 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCandidate {
    /// `δ`
    pub offset: BigInt,
    /// `p + 1 + δ`
    pub value: BigUint,
}

/// Iterator over order candidates, see [`HasseInterval::candidates`]
#[derive(Debug, Clone)]
pub struct Candidates {
    center: BigUint,
    radius: BigUint,
    step: BigUint,
    pending_negative: Option<BigUint>,
}

impl Iterator for Candidates {
    type Item = OrderCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(step) = self.pending_negative.take() {
            if step < self.center {
                return Some(OrderCandidate {
                    value: &self.center - &step,
                    offset: -BigInt::from(step),
                });
            }
            // p + 1 - δ <= 0, and so is every later negative candidate
        }

        if self.step > self.radius {
            return None;
        }
        let step = self.step.clone();
        self.step += 1u32;
        if !step.is_zero() {
            self.pending_negative = Some(step.clone());
        }
        Some(OrderCandidate {
            value: &self.center + &step,
            offset: BigInt::from(step),
        })
    }
}

/// A successful order search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFound {
    /// First candidate `n` with `n·G = ∞`
    pub order: BigUint,
    /// `n - (p + 1)`
    pub offset: BigInt,
    /// Scalar multiplications spent, the hit included
    pub candidates_tried: u64,
}

impl OrderFound {
    /// Frobenius trace `t = p + 1 - n`
    pub fn trace(&self) -> BigInt {
        -self.offset.clone()
    }
}

/// Search the Hasse interval for a multiple of the order of `g`, reporting
/// where it was found.
///
/// `search_radius` is clamped to `⌊2√p⌋`. Exhausting it is
/// [`Error::NoOrderFound`] carrying the radius actually searched.
pub fn search_order(g: &Point, params: &CurveParams, search_radius: &BigUint) -> Result<OrderFound> {
    validate::parameter(
        !g.is_identity(),
        "search_order",
        "the point at infinity has no meaningful order search",
    )?;
    validate::parameter(params.contains(g), "search_order", "point is not on the curve")?;

    let interval = HasseInterval::for_modulus(params.p());
    let mut candidates_tried = 0u64;
    for candidate in interval.candidates(search_radius) {
        candidates_tried += 1;
        if scalar_mul(params, g, &candidate.value)?.is_identity() {
            return Ok(OrderFound {
                order: candidate.value,
                offset: candidate.offset,
                candidates_tried,
            });
        }
    }

    Err(Error::NoOrderFound {
        radius: interval.effective_radius(search_radius),
    })
}

/// The candidate closest to `p + 1` annihilating `g`.
///
/// On a prime-order curve this is the group order. Otherwise it is a
/// multiple of the order of `g`; [`point_order`] reduces it.
pub fn find_order(g: &Point, params: &CurveParams, search_radius: &BigUint) -> Result<BigUint> {
    search_order(g, params, search_radius).map(|found| found.order)
}

/// [`find_order`], degrading to an unverified `p + 1` when the search
/// runs out of radius.
///
/// Order-dependent operations refuse to run on the
/// [`OrderStatus::Approximate`] result. Other errors are returned as is.
pub fn find_order_or_approximate(
    g: &Point,
    params: &CurveParams,
    search_radius: &BigUint,
) -> Result<OrderStatus> {
    match search_order(g, params, search_radius) {
        Ok(found) => Ok(OrderStatus::Verified(found.order)),
        Err(Error::NoOrderFound { .. }) => Ok(OrderStatus::Approximate(params.p() + 1u32)),
        Err(e) => Err(e),
    }
}

/// Reduce `multiple`, any positive integer with `multiple·g = ∞`, to the
/// exact order of `g`.
///
/// An early identity seen while multiplying is folded in first. Then each
/// prime factor is divided out for as long as the quotient still
/// annihilates `g`. Prime factors above [`TRIAL_DIVISION_LIMIT`] are only
/// found when they form a prime cofactor; a composite cofactor beyond the
/// limit stays in the result.
pub fn point_order(g: &Point, params: &CurveParams, multiple: &BigUint) -> Result<BigUint> {
    validate::parameter(params.contains(g), "point_order", "point is not on the curve")?;
    if g.is_identity() {
        return Ok(BigUint::one());
    }
    validate::parameter(!multiple.is_zero(), "point_order", "multiple must be positive")?;

    let trace = scalar_mul_traced(params, g, multiple)?;
    if !trace.annihilates() {
        return Err(Error::param(
            "point_order",
            format!("{multiple} does not annihilate {g}"),
        ));
    }
    let mut order = match &trace.early_identity {
        Some(partial) => gcd(multiple, partial),
        None => multiple.clone(),
    };

    for (prime, _) in factorize(&order, TRIAL_DIVISION_LIMIT).factors {
        while (&order % &prime).is_zero() {
            let reduced = &order / &prime;
            if !scalar_mul(params, g, &reduced)?.is_identity() {
                break;
            }
            order = reduced;
        }
    }
    Ok(order)
}
