use serde::{Deserialize, Serialize};

use bookstore_core::Money;
use bookstore_products::Stock;
use bookstore_sales::Shipping;

use crate::number::InvoiceNumber;

/// Invoice for one shipped book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    invoice_nbr: InvoiceNumber,
    stock: Stock,
    shipping: Shipping,
    total_cost: Option<Money>,
}

impl Invoice {
    pub fn new(invoice_nbr: impl Into<InvoiceNumber>, stock: Stock, shipping: Shipping) -> Self {
        Self {
            invoice_nbr: invoice_nbr.into(),
            stock,
            shipping,
            total_cost: None,
        }
    }

    pub fn invoice_nbr(&self) -> &InvoiceNumber {
        &self.invoice_nbr
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn shipping(&self) -> &Shipping {
        &self.shipping
    }

    /// Total stored by the last [`Invoice::invoice`] call, if any.
    pub fn total_cost(&self) -> Option<Money> {
        self.total_cost
    }

    /// Book price plus shipping cost, rounded half away from zero to cents.
    ///
    /// Prices and configured rates are bounded so the sum fits; a cost forced in
    /// through `set_ship_cost` beyond that clamps instead of overflowing.
    pub fn calculate_total(&self) -> Money {
        self.stock
            .price()
            .saturating_add(self.shipping.ship_cost())
            .round_to_cents()
    }

    /// Compute the total, store it and return it. Idempotent.
    pub fn invoice(&mut self) -> Money {
        let total = self.calculate_total();
        self.total_cost = Some(total);
        total
    }
}
