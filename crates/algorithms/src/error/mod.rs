//! Error handling for the curve algorithms
//!
//! The algorithms share the public [`capicrypto_api::Error`]; this module
//! re-exports it next to the validation helpers used at function entry.

pub use capicrypto_api::error::{Error, Result, ResultExt};

// Include the validation submodule
pub mod validate;
