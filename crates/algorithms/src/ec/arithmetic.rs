//! Group law and scalar multiplication
//!
//! Affine formulas with one inversion per addition. Nothing here runs in
//! constant time: branches and loop counts depend on the operands.

use super::params::CurveParams;
use super::point::Point;
use crate::error::{Error, Result};
use crate::field::{add_mod, inverse, mul_mod, neg_mod, sub_mod};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Result of a traced scalar multiplication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MulTrace {
    /// The product `k·P`
    pub point: Point,
    /// The partial scalar `k mod 2^(i+1)` at which the accumulator first
    /// became `∞` while higher bits of `k` were still to come
    pub early_identity: Option<BigUint>,
}

impl MulTrace {
    /// Whether `k·P = ∞`
    pub fn annihilates(&self) -> bool {
        self.point.is_identity()
    }

    /// Whether `∞` was reached before the last bit of `k`.
    ///
    /// The partial scalar is then a smaller multiple of the order of `P`.
    pub fn reached_identity_early(&self) -> bool {
        self.early_identity.is_some()
    }
}

/// `P + Q`
pub fn add(params: &CurveParams, p: &Point, q: &Point) -> Result<Point> {
    let (x1, y1, x2, y2) = match (p, q) {
        (Point::Infinity, _) => return Ok(q.clone()),
        (_, Point::Infinity) => return Ok(p.clone()),
        (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
    };

    if x1 == x2 {
        if y1 == y2 {
            return double(params, p);
        }
        // Q = -P
        return Ok(Point::Infinity);
    }

    let m = params.p();
    let numerator = sub_mod(y2, y1, m);
    let denominator = sub_mod(x2, x1, m);
    let lambda = mul_mod(&numerator, &invert("point addition", &denominator, m)?, m);

    let x3 = sub_mod(&sub_mod(&mul_mod(&lambda, &lambda, m), x1, m), x2, m);
    let y3 = sub_mod(&mul_mod(&lambda, &sub_mod(x1, &x3, m), m), y1, m);
    Ok(Point::Affine { x: x3, y: y3 })
}

/// `2P`
pub fn double(params: &CurveParams, p: &Point) -> Result<Point> {
    let (x, y) = match p {
        Point::Infinity => return Ok(Point::Infinity),
        Point::Affine { x, y } => (x, y),
    };
    // Vertical tangent
    if y.is_zero() {
        return Ok(Point::Infinity);
    }

    let m = params.p();
    let x_squared = mul_mod(x, x, m);
    let numerator = add_mod(&mul_mod(&BigUint::from(3u32), &x_squared, m), params.a(), m);
    let denominator = add_mod(y, y, m);
    let lambda = mul_mod(&numerator, &invert("point doubling", &denominator, m)?, m);

    let x3 = sub_mod(&mul_mod(&lambda, &lambda, m), &add_mod(x, x, m), m);
    let y3 = sub_mod(&mul_mod(&lambda, &sub_mod(x, &x3, m), m), y, m);
    Ok(Point::Affine { x: x3, y: y3 })
}

/// `-P = (x, p - y)`
pub fn negate(params: &CurveParams, p: &Point) -> Point {
    match p {
        Point::Infinity => Point::Infinity,
        Point::Affine { x, y } => Point::Affine {
            x: x.clone(),
            y: neg_mod(y, params.p()),
        },
    }
}

/// `k·P` by right-to-left double-and-add; `0·P = ∞`
pub fn scalar_mul(params: &CurveParams, p: &Point, k: &BigUint) -> Result<Point> {
    scalar_mul_traced(params, p, k).map(|trace| trace.point)
}

/// `k·P`, recording whether `∞` showed up before the scalar was used up.
///
/// The loop stops as soon as the doubled addend is `∞`: every remaining
/// bit would add the identity.
pub fn scalar_mul_traced(params: &CurveParams, p: &Point, k: &BigUint) -> Result<MulTrace> {
    let bits = k.bits();
    let mut acc = Point::Infinity;
    let mut addend = p.clone();
    let mut early_identity = None;

    for i in 0..bits {
        if addend.is_identity() {
            break;
        }
        if k.bit(i) {
            acc = add(params, &acc, &addend)?;
            if acc.is_identity() && early_identity.is_none() && i + 1 < bits {
                early_identity = Some(low_bits(k, i + 1));
            }
        }
        if i + 1 < bits {
            addend = double(params, &addend)?;
        }
    }

    Ok(MulTrace {
        point: acc,
        early_identity,
    })
}

/// `k·P` for a signed scalar: `(-k)·P = k·(-P)`
pub fn scalar_mul_signed(params: &CurveParams, p: &Point, k: &BigInt) -> Result<Point> {
    let product = scalar_mul(params, p, k.magnitude())?;
    Ok(match k.sign() {
        Sign::Minus => negate(params, &product),
        _ => product,
    })
}

/// Whether `(x, y)` lies on the curve
pub fn is_on_curve(params: &CurveParams, x: &BigUint, y: &BigUint) -> bool {
    params.is_on_curve(x, y)
}

/// `k mod 2^bits`
fn low_bits(k: &BigUint, bits: u64) -> BigUint {
    let mask = (BigUint::from(1u32) << bits) - 1u32;
    k & mask
}

fn invert(context: &'static str, value: &BigUint, m: &BigUint) -> Result<BigUint> {
    inverse(value, m).ok_or_else(|| Error::NonInvertibleElement {
        context,
        element: value.clone(),
        modulus: m.clone(),
    })
}
