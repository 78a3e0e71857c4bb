//! Decimal money amounts.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Number of decimal places used for totals.
pub const CENT_PLACES: u32 = 2;

/// Largest price or shipping rate accepted by validation (1,000,000,000.00).
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000;

/// An amount of money in the store's single currency.
///
/// Backed by a base-10 decimal so that `8.99 + 3.95` is exactly `12.94`.
/// Serialized as a string (`"8.99"`).
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Amount from an integer number of cents (`899` -> `8.99`).
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, CENT_PLACES))
    }

    /// Upper bound for validated prices and rates.
    pub fn max_amount() -> Self {
        Self::from_cents(MAX_AMOUNT_CENTS)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Round to whole cents, half away from zero (`0.125` -> `0.13`).
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl Money {
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Sum clamped to the decimal range.
    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Money {
    /// Always two decimal places: `12.9` renders as `12.90`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self.round_to_cents().0;
        rounded.rescale(CENT_PLACES);
        fmt::Display::fmt(&rounded, f)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::validation(format!("'{s}' is not a valid amount")))
    }
}
