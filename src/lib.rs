//! # capicrypto
//!
//! A toolkit for short-Weierstrass elliptic curves over prime fields, sized
//! for hunting and studying toy curves with prime group order.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! capicrypto = "0.2"
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialization of search plans and points
//! - `rand`: key-pair derivation on curves with a verified order
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `capicrypto-api`: error type and the `PrimalityTest` trait
//! - `capicrypto-common`: word-sized number theory helpers
//! - `capicrypto-params`: curve parameters and search seeds
//! - `capicrypto-algorithms`: field, primality, curve and search algorithms
//!
//! ## Example
//!
//! ```
//! use capicrypto::prelude::*;
//!
//! let report = search_curves(&SearchConfig::from_u64(&[383], &[(11, 11)]))?;
//! let curve = report.found[0].clone().into_curve()?;
//! assert_eq!(curve.generator().to_string(), "(2, 294)");
//! # Ok::<(), capicrypto::Error>(())
//! ```

// Core re-exports (always available)
pub use capicrypto_algorithms as algorithms;
pub use capicrypto_api as api;
pub use capicrypto_common as common;
pub use capicrypto_params as params;

pub use capicrypto_api::{Error, Result};
pub use num_bigint;

/// Common imports for capicrypto users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::PrimalityTest;

    // Curve arithmetic
    pub use crate::algorithms::ec::{
        add, double, is_on_curve, negate, new_curve, scalar_mul, scalar_mul_traced, Curve,
        CurveOptions, CurveParams, MulTrace, OrderStatus, Point,
    };

    // Searches
    pub use crate::algorithms::search::{
        find_generator, find_order, find_order_or_approximate, point_order, search_curves,
        search_curves_with, HasseInterval, Rejection, SearchConfig, SearchReport,
    };

    // Number theory
    pub use crate::algorithms::field::{inverse, is_quadratic_residue, mod_sqrt, power, reduce};
    pub use crate::algorithms::primality::{
        factorize, is_prime, primality, MillerRabin, Primality, StandardPrimality, TrialDivision,
    };

    pub use num_bigint::{BigInt, BigUint};
}
