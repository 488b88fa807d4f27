//! The palindromic ("capicúa") toy curve
//!
//! Curve equation: y² = x³ + 121x + 11 over 𝔽₃₈₃, where
//! - p = 383 is a palindromic prime,
//! - a = 11² and b = 11 are built from the palindrome 11,
//! - the group has prime order n = 353, so every point but ∞ generates it.

/// Structure containing the parameters of a toy curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToyCurveParams {
    /// Prime field modulus
    pub p: u64,

    /// Base whose square gives the `a` coefficient
    pub base_a: u64,

    /// Base giving the `b` coefficient
    pub base_b: u64,

    /// Curve coefficient a = base_a² mod p
    pub a: u64,

    /// Curve coefficient b = base_b mod p
    pub b: u64,

    /// Generator x-coordinate
    pub g_x: u64,

    /// Generator y-coordinate
    pub g_y: u64,

    /// Order of the generator
    pub n: u64,

    /// Cofactor
    pub h: u64,
}

/// p = 383, a = 121, b = 11 with generator (2, 294) of prime order 353
pub const CAPICUA_383: ToyCurveParams = ToyCurveParams {
    p: 383,
    base_a: 11,
    base_b: 11,
    a: 121,
    b: 11,
    g_x: 2,
    g_y: 294,
    n: 353,
    h: 1,
};

/// Distance of the order from p + 1 (353 = 384 - 31)
pub const CAPICUA_383_TRACE: i64 = 31;
