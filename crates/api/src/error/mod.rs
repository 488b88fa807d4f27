//! Error handling for the capicrypto toolkit

mod traits;
mod types;

pub use traits::ResultExt;
pub use types::{Error, Result};
