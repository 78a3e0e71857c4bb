//! Invoicing domain module.
//!
//! Invoices combine a book's price with its shipping cost; the repository keeps
//! them in insertion order for lookup by number.

pub mod invoice;
pub mod number;
pub mod repository;

pub use invoice::Invoice;
pub use number::InvoiceNumber;
pub use repository::{InMemoryInvoiceRepository, InvoiceRepository};
