//! Constants for toy-sized curves and the curve search

pub mod capicua;
pub mod search;
