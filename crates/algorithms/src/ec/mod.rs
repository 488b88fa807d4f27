//! Elliptic curve arithmetic over prime fields
//!
//! Curves are in short Weierstrass form `y² = x³ + ax + b` over 𝔽ₚ, with
//! points in affine coordinates and the point at infinity as an explicit
//! variant. The group law is a set of pure functions over
//! `(&CurveParams, &Point)`:
//!
//! - [`add`], [`double`], [`negate`]
//! - [`scalar_mul`], [`scalar_mul_traced`], [`scalar_mul_signed`]
//!
//! These are textbook formulas for experimenting with small curves. They
//! are variable-time and must not handle secrets.

mod arithmetic;
mod curve;
mod params;
mod point;

pub use arithmetic::{
    add, double, is_on_curve, negate, scalar_mul, scalar_mul_signed, scalar_mul_traced, MulTrace,
};
pub use curve::{Curve, CurveOptions, OrderStatus};
pub use params::{new_curve, CurveParams};
pub use point::Point;
