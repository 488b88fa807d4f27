//! Constant values for the capicrypto toolkit
//!
//! This crate provides the curve parameter sets and search seeds shared by
//! the algorithms, the tests and the benchmarks.

#![no_std]

pub mod demo;
pub mod toy;
