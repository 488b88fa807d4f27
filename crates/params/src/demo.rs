//! A 256-bit curve beyond the reach of brute-force order search
//!
//! Curve equation: y² = x³ + ax + b over 𝔽ₚ with p = 2²⁵⁶ − 189. A point is
//! easy to find, but its order lies somewhere in a Hasse interval of width
//! about 2¹³⁰, so the bounded order search must report failure here.

/// Size of a field element in bytes
pub const DEMO_256_FIELD_ELEMENT_SIZE: usize = 32;

/// Structure containing the parameters of a curve with unknown order
pub struct LargeCurveParams {
    /// Prime field modulus (big-endian)
    pub p: [u8; DEMO_256_FIELD_ELEMENT_SIZE],

    /// Curve coefficient a
    pub a: u64,

    /// Curve coefficient b
    pub b: u64,

    /// Point x-coordinate
    pub g_x: u64,

    /// Point y-coordinate (big-endian)
    pub g_y: [u8; DEMO_256_FIELD_ELEMENT_SIZE],
}

/// p = 2²⁵⁶ − 189 with palindromic coefficients
pub const DEMO_256: LargeCurveParams = LargeCurveParams {
    p: [
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0x43,
    ],
    a: 12_345_678_987_654_321,
    b: 98_765_432_123_456_789,
    g_x: 4,
    g_y: [
        0x10, 0xF9, 0x08, 0xC1, 0xFD, 0xDF, 0xE5, 0x20, 0x29, 0x28, 0x55, 0x7E, 0x7E, 0xFE, 0xB3,
        0xCF, 0xA0, 0xE0, 0xF3, 0x13, 0xEA, 0x2C, 0xE3, 0xE2, 0x4F, 0x4D, 0x54, 0x91, 0x32, 0x74,
        0x18, 0x13,
    ],
};
