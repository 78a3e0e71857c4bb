//! Application configuration, read from `BOOKSTORE_*` environment variables.

use core::str::FromStr;

use bookstore_core::Money;
use bookstore_sales::ShippingRates;

pub const ENV_STANDARD_SHIP_COST: &str = "BOOKSTORE_STANDARD_SHIP_COST";
pub const ENV_URGENT_SHIP_COST: &str = "BOOKSTORE_URGENT_SHIP_COST";
pub const ENV_INVOICE_PREFIX: &str = "BOOKSTORE_INVOICE_PREFIX";
pub const ENV_INVOICE_WIDTH: &str = "BOOKSTORE_INVOICE_WIDTH";

/// Bookstore configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookstoreConfig {
    /// Shipping prices for standard and urgent delivery.
    pub rates: ShippingRates,
    /// Leading text of generated invoice numbers.
    pub invoice_prefix: String,
    /// Minimum digit count of generated invoice numbers.
    pub invoice_number_width: usize,
}

impl Default for BookstoreConfig {
    fn default() -> Self {
        Self {
            rates: ShippingRates::default(),
            invoice_prefix: "INV".to_string(),
            invoice_number_width: 4,
        }
    }
}

impl BookstoreConfig {
    /// Load from the process environment; unset or invalid values keep defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let standard = parse_or(&lookup, ENV_STANDARD_SHIP_COST, defaults.rates.standard);
        let urgent = parse_or(&lookup, ENV_URGENT_SHIP_COST, defaults.rates.urgent);
        let invoice_number_width =
            parse_or(&lookup, ENV_INVOICE_WIDTH, defaults.invoice_number_width);
        let invoice_prefix = lookup(ENV_INVOICE_PREFIX).unwrap_or(defaults.invoice_prefix);

        let in_range = |cost: Money| cost.is_positive() && cost <= Money::max_amount();
        let rates = if in_range(standard) && in_range(urgent) {
            ShippingRates { standard, urgent }
        } else {
            tracing::warn!(
                "shipping costs must be positive and at most {}; using default rates",
                Money::max_amount()
            );
            defaults.rates
        };

        Self {
            rates,
            invoice_prefix,
            invoice_number_width,
        }
    }

    pub fn with_rates(mut self, rates: ShippingRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn with_invoice_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.invoice_prefix = prefix.into();
        self
    }

    pub fn with_invoice_number_width(mut self, width: usize) -> Self {
        self.invoice_number_width = width;
        self
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy + core::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "invalid setting; using default {}", default);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_house_policy() {
        let config = BookstoreConfig::default();
        assert_eq!(config.rates.standard, Money::from_cents(395));
        assert_eq!(config.rates.urgent, Money::from_cents(545));
        assert_eq!(config.invoice_prefix, "INV");
        assert_eq!(config.invoice_number_width, 4);
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = BookstoreConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, BookstoreConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = BookstoreConfig::from_lookup(lookup_from(&[
            (ENV_STANDARD_SHIP_COST, "2.50"),
            (ENV_URGENT_SHIP_COST, " 9.99 "),
            (ENV_INVOICE_PREFIX, "BK-"),
            (ENV_INVOICE_WIDTH, "6"),
        ]));
        assert_eq!(config.rates.standard, Money::from_cents(250));
        assert_eq!(config.rates.urgent, Money::from_cents(999));
        assert_eq!(config.invoice_prefix, "BK-");
        assert_eq!(config.invoice_number_width, 6);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = BookstoreConfig::from_lookup(lookup_from(&[
            (ENV_URGENT_SHIP_COST, "fast"),
            (ENV_INVOICE_WIDTH, "-1"),
        ]));
        assert_eq!(config.rates.urgent, Money::from_cents(545));
        assert_eq!(config.invoice_number_width, 4);
    }

    #[test]
    fn non_positive_rates_are_rejected() {
        let config =
            BookstoreConfig::from_lookup(lookup_from(&[(ENV_STANDARD_SHIP_COST, "0")]));
        assert_eq!(config.rates, ShippingRates::default());
    }

    #[test]
    fn oversized_rates_are_rejected() {
        let config = BookstoreConfig::from_lookup(lookup_from(&[(
            ENV_URGENT_SHIP_COST,
            "79228162514264337593543950335",
        )]));
        assert_eq!(config.rates, ShippingRates::default());
    }

    #[test]
    fn builder_methods_override_fields() {
        let config = BookstoreConfig::default()
            .with_invoice_prefix("ORD")
            .with_invoice_number_width(2);
        assert_eq!(config.invoice_prefix, "ORD");
        assert_eq!(config.invoice_number_width, 2);
    }
}
