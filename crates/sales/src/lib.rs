//! Sales domain module (orders and their shipping).
//!
//! Pure domain logic: pairing a customer with a book and pricing the shipment.

pub mod order;
pub mod shipping;

pub use order::Order;
pub use shipping::{Shipping, ShippingRates, ShippingStats};
