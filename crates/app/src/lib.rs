//! `bookstore-app` — application layer over the bookstore domain crates.
//!
//! Holds the registries a front end works against (customers, books, invoices),
//! turns raw form input into validated domain values and places orders.

pub mod config;
pub mod dto;
pub mod services;

pub use config::BookstoreConfig;
pub use dto::{CustomerInput, InvoiceSummary, StockInput};
pub use services::Bookstore;
