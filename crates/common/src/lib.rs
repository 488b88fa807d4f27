//! Common implementations and shared functionality for the capicrypto toolkit
//!
//! This crate provides the word-sized number theory shared by the primality
//! tester and the field helpers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod math_common;

pub use math_common::{gcd, isqrt, mod_exp, mod_inv, mod_mul};
