//! Public traits of the capicrypto toolkit

pub mod primality;

pub use primality::PrimalityTest;
