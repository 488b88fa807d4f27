//! Short-Weierstrass curve parameters

use super::point::Point;
use crate::error::{validate, Error, Result};
use crate::field::{add_mod, mul_mod};
use crate::primality::is_prime;
use capicrypto_params::demo::LargeCurveParams;
use capicrypto_params::toy::capicua::ToyCurveParams;
use num_bigint::BigUint;
use num_traits::Zero;

/// The curve `y² = x³ + ax + b` over 𝔽ₚ.
///
/// Construction guarantees `p > 3` is prime, `a` and `b` are reduced modulo
/// `p`, and the discriminant `4a³ + 27b²` does not vanish. The fields are
/// private so the guarantees hold for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurveParams {
    p: BigUint,
    a: BigUint,
    b: BigUint,
}

impl CurveParams {
    /// Validate and build curve parameters.
    ///
    /// `a` and `b` may be given unreduced. A modulus `p <= 3` or a composite
    /// `p` is an [`Error::InvalidParameter`]; a vanishing discriminant is
    /// [`Error::SingularCurve`].
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Result<Self> {
        validate::field_modulus("CurveParams", &p)?;
        if !is_prime(&p) {
            return Err(Error::param(
                "CurveParams",
                format!("modulus {p} is not prime"),
            ));
        }

        let params = CurveParams {
            a: a % &p,
            b: b % &p,
            p,
        };
        if params.discriminant().is_zero() {
            return Err(Error::SingularCurve {
                a: params.a,
                b: params.b,
                p: params.p,
            });
        }
        Ok(params)
    }

    /// Build curve parameters from machine words
    pub fn from_u64(p: u64, a: u64, b: u64) -> Result<Self> {
        Self::new(BigUint::from(p), BigUint::from(a), BigUint::from(b))
    }

    /// Field modulus
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a`, reduced modulo `p`
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b`, reduced modulo `p`
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// `4a³ + 27b² mod p`
    pub fn discriminant(&self) -> BigUint {
        let p = &self.p;
        let a_cubed = mul_mod(&mul_mod(&self.a, &self.a, p), &self.a, p);
        let b_squared = mul_mod(&self.b, &self.b, p);
        add_mod(
            &mul_mod(&BigUint::from(4u32), &a_cubed, p),
            &mul_mod(&BigUint::from(27u32), &b_squared, p),
            p,
        )
    }

    /// Right-hand side of the curve equation: `x³ + ax + b mod p`
    pub fn rhs(&self, x: &BigUint) -> BigUint {
        let p = &self.p;
        let x = x % p;
        // Horner: (x² + a)·x + b
        let x_squared = mul_mod(&x, &x, p);
        add_mod(&mul_mod(&add_mod(&x_squared, &self.a, p), &x, p), &self.b, p)
    }

    /// Whether `(x, y)` satisfies the curve equation.
    ///
    /// Coordinates outside `[0, p)` are not field elements, so they are
    /// never on the curve.
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        if x >= &self.p || y >= &self.p {
            return false;
        }
        mul_mod(y, y, &self.p) == self.rhs(x)
    }

    /// Whether `point` belongs to the group; `∞` always does
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => self.is_on_curve(x, y),
        }
    }

    /// Build an affine point, checking it lies on the curve
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        if !self.is_on_curve(&x, &y) {
            return Err(Error::param(
                "CurveParams::point",
                format!("({x}, {y}) is not on the curve"),
            ));
        }
        Ok(Point::Affine { x, y })
    }
}

impl TryFrom<&ToyCurveParams> for CurveParams {
    type Error = Error;

    fn try_from(toy: &ToyCurveParams) -> Result<Self> {
        Self::from_u64(toy.p, toy.a, toy.b)
    }
}

impl TryFrom<&LargeCurveParams> for CurveParams {
    type Error = Error;

    fn try_from(large: &LargeCurveParams) -> Result<Self> {
        Self::new(
            BigUint::from_bytes_be(&large.p),
            BigUint::from(large.a),
            BigUint::from(large.b),
        )
    }
}

/// Alias of [`CurveParams::new`]
pub fn new_curve(p: BigUint, a: BigUint, b: BigUint) -> Result<CurveParams> {
    CurveParams::new(p, a, b)
}
