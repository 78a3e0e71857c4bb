//! Append-only invoice repository.

use std::sync::{Arc, PoisonError, RwLock};

use crate::invoice::Invoice;

/// Ordered invoice store with lookup by invoice number.
pub trait InvoiceRepository: Send + Sync {
    /// Append an invoice. Duplicate numbers are accepted.
    fn add(&self, invoice: Invoice);

    /// First invoice (in insertion order) whose number equals `invoice_nbr`.
    fn search(&self, invoice_nbr: &str) -> Option<Invoice>;

    /// All invoices in insertion order.
    fn list(&self) -> Vec<Invoice>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R> InvoiceRepository for Arc<R>
where
    R: InvoiceRepository + ?Sized,
{
    fn add(&self, invoice: Invoice) {
        (**self).add(invoice)
    }

    fn search(&self, invoice_nbr: &str) -> Option<Invoice> {
        (**self).search(invoice_nbr)
    }

    fn list(&self) -> Vec<Invoice> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory repository backed by a vector.
///
/// Appends and searches are serialized through a single `RwLock`; search is a
/// linear forward scan.
#[derive(Debug, Default)]
pub struct InMemoryInvoiceRepository {
    invoices: RwLock<Vec<Invoice>>,
}

impl InMemoryInvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InvoiceRepository for InMemoryInvoiceRepository {
    fn add(&self, invoice: Invoice) {
        self.invoices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(invoice);
    }

    fn search(&self, invoice_nbr: &str) -> Option<Invoice> {
        let invoices = self.invoices.read().unwrap_or_else(PoisonError::into_inner);
        invoices
            .iter()
            .find(|invoice| invoice.invoice_nbr().as_str() == invoice_nbr)
            .cloned()
    }

    fn list(&self) -> Vec<Invoice> {
        self.invoices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn len(&self) -> usize {
        self.invoices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
