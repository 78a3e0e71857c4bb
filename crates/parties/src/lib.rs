//! Parties domain module (bookstore customers).
//!
//! Business rules for the people the store sells to, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod customer;

pub use customer::Customer;
