//! Elliptic curve arithmetic over small prime fields
//!
//! This crate is the core of the capicrypto toolkit. It is organised
//! leaves first:
//!
//! - [`field`]: arithmetic modulo a prime, including modular square roots
//! - [`primality`]: trial division, Miller–Rabin and small factorisations
//! - [`ec`]: curve parameters, points and the group law
//! - [`search`]: generator, order and curve-parameter searches
//!
//! # Scope
//!
//! The arithmetic is exact but variable-time and the order search is brute
//! force inside the Hasse interval. Both are meant for toy and demo field
//! sizes; nothing here is suitable for protecting secrets.
//!
//! # Example
//!
//! ```
//! use capicrypto_algorithms::ec::{Curve, CurveOptions, CurveParams};
//! use num_bigint::BigUint;
//!
//! let params = CurveParams::from_u64(383, 121, 11)?;
//! let curve = Curve::build(params, &CurveOptions::default())?;
//! assert_eq!(curve.order()?, &BigUint::from(353u32));
//! # Ok::<(), capicrypto_algorithms::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Arithmetic modulo a prime
pub mod field;
pub use field::{inverse, is_quadratic_residue, mod_sqrt, power, reduce};

// Primality testing
pub mod primality;
pub use primality::{factorize, is_prime, primality, Primality};

// Elliptic curve arithmetic
pub mod ec;
pub use ec::{
    add, double, is_on_curve, new_curve, scalar_mul, Curve, CurveOptions, CurveParams, OrderStatus,
    Point,
};

// Bounded searches
pub mod search;
pub use search::{find_generator, find_order, search_curves, SearchConfig, SearchReport};
