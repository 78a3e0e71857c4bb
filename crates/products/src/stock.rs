use serde::{Deserialize, Serialize};

use bookstore_core::validation::{require_non_blank, require_positive, require_within_limit};
use bookstore_core::{DomainError, DomainResult, Money};

/// A book held in the store's stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    name: String,
    author: String,
    price: Money,
}

impl Stock {
    /// Validate and construct a book.
    ///
    /// Name and author must not be blank; price must be strictly positive and
    /// no larger than [`Money::max_amount`].
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        price: Money,
    ) -> DomainResult<Self> {
        let name = name.into();
        let author = author.into();

        require_non_blank("book name", &name)?;
        require_non_blank("author", &author)?;
        require_positive("price", price)?;
        require_within_limit("price", price)?;

        Ok(Self {
            name,
            author,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn price(&self) -> Money {
        self.price
    }

    /// Change the price; out-of-range prices are rejected and the old one kept.
    pub fn set_price(&mut self, price: Money) -> DomainResult<()> {
        require_positive("price", price)?;
        require_within_limit("price", price)?;
        self.price = price;
        Ok(())
    }
}

/// Parse a price typed by a user (e.g. `"8.99"`).
pub fn parse_price(input: &str) -> DomainResult<Money> {
    input
        .parse::<Money>()
        .map_err(|_| DomainError::validation("price must be a valid number"))
}
