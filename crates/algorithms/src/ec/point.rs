//! Curve points in affine coordinates

use core::fmt;
use num_bigint::BigUint;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point of an elliptic curve group.
///
/// `Infinity` is the identity; it has no coordinates. Affine coordinates
/// are field elements in `[0, p)`. A `Point` does not know its curve:
/// membership is checked against [`CurveParams`](super::CurveParams).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Point {
    /// The point at infinity
    #[default]
    Infinity,
    /// An affine point `(x, y)`
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// The identity element
    pub fn identity() -> Self {
        Point::Infinity
    }

    /// Check if this point is the identity element
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Get the x-coordinate, if affine
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// Get the y-coordinate, if affine
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Both coordinates, if affine
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => f.write_str("∞"),
            Point::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}
