//! Validation utilities for curve algorithms

use super::{Error, Result};
use num_bigint::BigUint;

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate that a modulus is usable as a field prime candidate (`m > 3`)
#[inline]
pub fn field_modulus(context: &'static str, m: &BigUint) -> Result<()> {
    if *m <= BigUint::from(3u32) {
        return Err(Error::param(
            context,
            format!("modulus must be greater than 3, got {m}"),
        ));
    }
    Ok(())
}

/// Validate that a value is reduced modulo `m`
#[inline]
pub fn reduced(context: &'static str, value: &BigUint, m: &BigUint) -> Result<()> {
    if value >= m {
        return Err(Error::param(
            context,
            format!("{value} is not reduced modulo {m}"),
        ));
    }
    Ok(())
}
