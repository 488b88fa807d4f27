//! Testing utilities and benchmarks for the capicrypto toolkit
//!
//! - [`brute_force`]: exhaustive point enumeration, the oracle the fast
//!   algorithms are checked against on small fields
//! - [`fixtures`]: search plans loaded from TOML files under `src/vectors`

pub mod brute_force;
pub mod fixtures;
