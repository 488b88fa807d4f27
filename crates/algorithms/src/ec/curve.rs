//! A curve together with a generator and its order

use super::arithmetic::scalar_mul;
use super::params::CurveParams;
use super::point::Point;
use crate::error::{validate, Error, Result};
use crate::primality::is_prime;
use crate::search::{find_generator, find_order, find_order_or_approximate, HasseInterval};
use capicrypto_params::toy::capicua::ToyCurveParams;
use capicrypto_params::toy::search::{DEFAULT_ORDER_SEARCH_RADIUS, DEFAULT_X_MAX};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// How trustworthy a curve's group order is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    /// `n·G = ∞` has been checked
    Verified(BigUint),
    /// `p + 1` stand-in after a failed order search; never checked
    Approximate(BigUint),
}

impl OrderStatus {
    /// The order value, whatever its status
    pub fn value(&self) -> &BigUint {
        match self {
            OrderStatus::Verified(n) | OrderStatus::Approximate(n) => n,
        }
    }

    /// The order, only if verified
    pub fn verified(&self) -> Option<&BigUint> {
        match self {
            OrderStatus::Verified(n) => Some(n),
            OrderStatus::Approximate(_) => None,
        }
    }

    /// Whether the order has been checked
    pub fn is_verified(&self) -> bool {
        matches!(self, OrderStatus::Verified(_))
    }
}

/// Bounds and policy for [`Curve::build`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveOptions {
    /// Generator scan ceiling (`x` runs over `2..x_max`)
    pub x_max: BigUint,
    /// Order search radius around `p + 1`
    pub search_radius: BigUint,
    /// Fall back to an [`OrderStatus::Approximate`] order instead of failing
    pub allow_approximate_order: bool,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            x_max: BigUint::from(DEFAULT_X_MAX),
            search_radius: BigUint::from(DEFAULT_ORDER_SEARCH_RADIUS),
            allow_approximate_order: false,
        }
    }
}

/// Curve parameters with a generator and the generator's order.
///
/// The cofactor is always 1: curves are only built around a point whose
/// order is the group order found by the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    params: CurveParams,
    generator: Point,
    order: OrderStatus,
}

impl Curve {
    /// Find a generator and its order for `params`.
    ///
    /// A failed order search is returned as an error unless
    /// [`CurveOptions::allow_approximate_order`] is set, in which case the
    /// curve is built with an [`OrderStatus::Approximate`] order. An order
    /// that is found is checked by [`Curve::new`], so a composite group
    /// order is an error.
    pub fn build(params: CurveParams, options: &CurveOptions) -> Result<Self> {
        let generator = find_generator(&params, &options.x_max)?;
        if !options.allow_approximate_order {
            let order = find_order(&generator, &params, &options.search_radius)?;
            return Self::new(params, generator, order);
        }
        match find_order_or_approximate(&generator, &params, &options.search_radius)? {
            OrderStatus::Verified(order) => Self::new(params, generator, order),
            order => Ok(Self {
                params,
                generator,
                order,
            }),
        }
    }

    /// Assemble a curve from known values.
    ///
    /// `order` must be prime with `order·G = ∞`, which makes it the exact
    /// order of `G`. It must also be the only multiple of itself inside the
    /// Hasse interval (`2·order > p + 1 + 2√p`), so it is the group order
    /// and the cofactor is 1.
    pub fn new(params: CurveParams, generator: Point, order: BigUint) -> Result<Self> {
        validate::parameter(
            !generator.is_identity(),
            "Curve",
            "generator must not be the point at infinity",
        )?;
        validate::parameter(
            params.contains(&generator),
            "Curve",
            "generator is not on the curve",
        )?;
        validate::parameter(!order.is_zero(), "Curve", "order must be positive")?;
        if !scalar_mul(&params, &generator, &order)?.is_identity() {
            return Err(Error::param(
                "Curve",
                format!("{order} does not annihilate the generator {generator}"),
            ));
        }
        if !is_prime(&order) {
            return Err(Error::param("Curve", format!("order {order} is composite")));
        }
        let hasse = HasseInterval::for_modulus(params.p());
        if !hasse.contains(&order) || &order * 2u32 <= hasse.upper() {
            return Err(Error::param(
                "Curve",
                format!("{order} is not the group order, the cofactor would exceed 1"),
            ));
        }
        Ok(Self {
            params,
            generator,
            order: OrderStatus::Verified(order),
        })
    }

    /// Curve parameters
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Generator point
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Order together with its status
    pub fn order_status(&self) -> &OrderStatus {
        &self.order
    }

    /// The verified order; an error on an unordered curve
    pub fn order(&self) -> Result<&BigUint> {
        self.order.verified().ok_or_else(|| {
            Error::param(
                "Curve",
                format!(
                    "order {} is an unverified approximation",
                    self.order.value()
                ),
            )
        })
    }

    /// Cofactor `h`
    pub fn cofactor(&self) -> BigUint {
        BigUint::one()
    }

    /// `k·G` for a scalar `0 <= k < n`
    pub fn mul_generator(&self, k: &BigUint) -> Result<Point> {
        let n = self.order()?;
        validate::reduced("Curve::mul_generator", k, n)?;
        scalar_mul(&self.params, &self.generator, k)
    }

    /// Draw a secret scalar in `[1, n - 1]` and derive its public point
    #[cfg(feature = "rand")]
    pub fn keypair<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Result<(BigUint, Point)> {
        use num_bigint::RandBigInt;

        let n = self.order()?;
        validate::parameter(
            *n > BigUint::one(),
            "Curve::keypair",
            "order too small for a key pair",
        )?;
        let secret = rng.gen_biguint_range(&BigUint::one(), n);
        let public = self.mul_generator(&secret)?;
        Ok((secret, public))
    }
}

impl TryFrom<&ToyCurveParams> for Curve {
    type Error = Error;

    fn try_from(toy: &ToyCurveParams) -> Result<Self> {
        validate::parameter(toy.h == 1, "Curve", "cofactor must be 1")?;
        let params = CurveParams::try_from(toy)?;
        let generator = params.point(BigUint::from(toy.g_x), BigUint::from(toy.g_y))?;
        Self::new(params, generator, BigUint::from(toy.n))
    }
}
