//! Shipping records and the two-tier shipping cost policy.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use bookstore_core::Money;

use crate::order::Order;

/// Flat shipping prices for the two service levels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRates {
    pub standard: Money,
    pub urgent: Money,
}

impl Default for ShippingRates {
    fn default() -> Self {
        Self {
            standard: Money::from_cents(395),
            urgent: Money::from_cents(545),
        }
    }
}

impl ShippingRates {
    pub fn cost_for(&self, is_urgent: bool) -> Money {
        if is_urgent { self.urgent } else { self.standard }
    }
}

/// Running statistics over computed shipments.
///
/// Owned by whoever aggregates invoices; safe to share between threads.
#[derive(Debug, Default)]
pub struct ShippingStats {
    urgent: AtomicU64,
}

impl ShippingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_urgent(&self) {
        self.urgent.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of shipments priced under the urgent tier so far.
    pub fn urgent_count(&self) -> u64 {
        self.urgent.load(Ordering::Relaxed)
    }
}

/// Shipping details for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipping {
    order: Order,
    ship_date: NaiveDate,
    ship_cost: Money,
}

impl Shipping {
    /// New shipment with a cost of zero until one is computed or set.
    pub fn new(order: Order, ship_date: NaiveDate) -> Self {
        Self {
            order,
            ship_date,
            ship_cost: Money::ZERO,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn ship_date(&self) -> NaiveDate {
        self.ship_date
    }

    pub fn ship_cost(&self) -> Money {
        self.ship_cost
    }

    /// Price this shipment, store the cost and return it.
    ///
    /// Every urgent call is recorded in `stats`, including repeated calls on the
    /// same shipment; call this once per shipment and use
    /// [`Shipping::set_ship_cost`] for any later overwrite.
    pub fn calc_ship_cost(
        &mut self,
        is_urgent: bool,
        rates: &ShippingRates,
        stats: &ShippingStats,
    ) -> Money {
        if is_urgent {
            stats.record_urgent();
        }
        self.ship_cost = rates.cost_for(is_urgent);
        self.ship_cost
    }

    /// Overwrite the stored cost. No statistics are touched.
    pub fn set_ship_cost(&mut self, cost: Money) {
        self.ship_cost = cost;
    }
}
