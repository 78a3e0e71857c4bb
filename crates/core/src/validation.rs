//! Field validation rules shared by the domain constructors.
//!
//! Each rule returns `Ok(())` or a `DomainError::Validation` naming the field.

use crate::error::{DomainError, DomainResult};
use crate::money::Money;

/// Rejects empty and whitespace-only values.
pub fn require_non_blank(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Rejects blank values and values without an `@`.
pub fn require_email(value: &str) -> DomainResult<()> {
    if value.trim().is_empty() || !value.contains('@') {
        return Err(DomainError::validation("invalid email address"));
    }
    Ok(())
}

/// Rejects zero and negative amounts.
pub fn require_positive(field: &str, amount: Money) -> DomainResult<()> {
    if !amount.is_positive() {
        return Err(DomainError::validation(format!(
            "{field} must be greater than zero"
        )));
    }
    Ok(())
}

/// Rejects amounts above [`Money::max_amount`].
pub fn require_within_limit(field: &str, amount: Money) -> DomainResult<()> {
    let max = Money::max_amount();
    if amount > max {
        return Err(DomainError::validation(format!(
            "{field} must not exceed {max}"
        )));
    }
    Ok(())
}
