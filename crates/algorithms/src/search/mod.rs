//! Bounded searches over curves
//!
//! - [`find_generator`] scans x-coordinates for a curve point,
//! - [`find_order`] tests multiples near `p + 1` inside the Hasse interval,
//! - [`search_curves`] sweeps a [`SearchConfig`] for curves of prime order.
//!
//! Every loop is capped by a caller-supplied bound and reports exhaustion
//! as an error or a [`Rejection`], never by returning a guess. The order
//! search is brute force: fine for toy fields, hopeless for cryptographic
//! sizes.

mod config;
mod curve_params;
mod generator;
mod order;

pub use config::SearchConfig;
pub use curve_params::{
    search_curves, search_curves_with, FoundCurve, RejectedCandidate, Rejection, SearchReport,
};
pub use generator::{find_generator, find_points};
pub use order::{
    find_order, find_order_or_approximate, point_order, search_order, Candidates, HasseInterval,
    OrderCandidate, OrderFound,
};
