//! `bookstore-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging).

pub mod error;
pub mod money;
pub mod validation;

pub use error::{DomainError, DomainResult};
pub use money::Money;
