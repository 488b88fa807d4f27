//! Public API traits and types for the capicrypto toolkit
//!
//! This crate provides the error type shared by every capicrypto crate and
//! the trait seams the algorithms are generic over.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::PrimalityTest;
