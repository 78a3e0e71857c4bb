//! Products domain module (books held in stock).
//!
//! This crate contains business rules for the catalog, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod stock;

pub use stock::{Stock, parse_price};
