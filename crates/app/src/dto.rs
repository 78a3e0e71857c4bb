//! Raw form input and read-side summaries.

use serde::{Deserialize, Serialize};

use bookstore_core::{DomainError, DomainResult, Money};
use bookstore_invoicing::{Invoice, InvoiceNumber};

/// Customer form fields exactly as typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerInput {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Book form fields exactly as typed; `price` is parsed later.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StockInput {
    pub name: String,
    pub author: String,
    pub price: String,
}

/// Rejects forms with an empty field before any domain rule runs.
pub(crate) fn require_all_fields(fields: &[&str]) -> DomainResult<()> {
    if fields.iter().any(|f| f.is_empty()) {
        return Err(DomainError::validation("all fields are required"));
    }
    Ok(())
}

/// One line of the invoice listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceSummary {
    pub invoice_nbr: InvoiceNumber,
    pub total: Money,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            invoice_nbr: invoice.invoice_nbr().clone(),
            total: invoice
                .total_cost()
                .unwrap_or_else(|| invoice.calculate_total()),
        }
    }
}

impl core::fmt::Display for InvoiceSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.invoice_nbr, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected() {
        assert!(require_all_fields(&["a", "b"]).is_ok());
        assert_eq!(
            require_all_fields(&["a", ""]).unwrap_err(),
            DomainError::validation("all fields are required")
        );
    }

    #[test]
    fn inputs_deserialize_from_json() {
        let input: StockInput =
            serde_json::from_str(r#"{"name":"1984","author":"George Orwell","price":"8.99"}"#)
                .unwrap();
        assert_eq!(input.price, "8.99");
    }

    #[test]
    fn summary_renders_number_and_total() {
        let summary = InvoiceSummary {
            invoice_nbr: InvoiceNumber::from("INV0001"),
            total: Money::from_cents(1294),
        };
        assert_eq!(summary.to_string(), "INV0001: 12.94");
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            serde_json::json!({"invoice_nbr": "INV0001", "total": "12.94"})
        );
    }
}
