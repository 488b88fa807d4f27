//! Error type definitions for curve arithmetic and curve searches

use num_bigint::BigUint;
use thiserror::Error;

/// Primary error type for the capicrypto toolkit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Division by a non-unit modulo the field prime.
    ///
    /// Under a genuine prime modulus this only happens when an upstream
    /// parameter is wrong (for example a composite `p`), so it is never
    /// folded into the point at infinity.
    #[error("{context}: {element} has no inverse modulo {modulus}")]
    NonInvertibleElement {
        context: &'static str,
        element: BigUint,
        modulus: BigUint,
    },

    /// The discriminant `4a³ + 27b²` vanishes modulo `p`
    #[error("singular curve: 4a³ + 27b² ≡ 0 (mod {p}) for a = {a}, b = {b}")]
    SingularCurve { a: BigUint, b: BigUint, p: BigUint },

    /// Generator search exhausted its `x` ceiling
    #[error("no curve point found for 2 <= x < {x_max}")]
    NoGeneratorFound { x_max: BigUint },

    /// Order search exhausted its radius around `p + 1`
    #[error("no order found within ±{radius} of p + 1")]
    NoOrderFound { radius: BigUint },

    /// `mod_sqrt` called on a quadratic non-residue
    #[error("{value} is not a quadratic residue modulo {modulus}")]
    NonResidue { value: BigUint, modulus: BigUint },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for capicrypto operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of errors that carry one
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::NonInvertibleElement {
                element, modulus, ..
            } => Self::NonInvertibleElement {
                context,
                element,
                modulus,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            other => other,
        }
    }

    /// Whether a search merely ran out of its bound.
    ///
    /// Callers can widen the bound or pick other parameters and retry.
    pub fn is_search_exhausted(&self) -> bool {
        matches!(
            self,
            Self::NoGeneratorFound { .. } | Self::NoOrderFound { .. }
        )
    }
}
