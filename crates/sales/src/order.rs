use serde::{Deserialize, Serialize};

use bookstore_parties::Customer;
use bookstore_products::Stock;

/// A customer's order for one book.
///
/// An order is only a pairing: both halves were validated when they were
/// constructed, so there is nothing left to check here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    customer: Customer,
    stock: Stock,
}

impl Order {
    pub fn new(customer: Customer, stock: Stock) -> Self {
        Self { customer, stock }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }
}
