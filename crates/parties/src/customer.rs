use serde::{Deserialize, Serialize};

use bookstore_core::validation::{require_email, require_non_blank};
use bookstore_core::DomainResult;

/// A customer of the bookstore.
///
/// All three fields are validated at construction: name and phone must not be
/// blank, email must be non-blank and contain `@`. Accessors return the values
/// exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    phone: String,
    email: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        let phone = phone.into();
        let email = email.into();

        require_non_blank("name", &name)?;
        require_non_blank("phone", &phone)?;
        require_email(&email)?;

        Ok(Self { name, phone, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replace phone and email after re-running the construction rules.
    ///
    /// On error the customer is left unchanged.
    pub fn update_contact(
        &mut self,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> DomainResult<()> {
        let phone = phone.into();
        let email = email.into();

        require_non_blank("phone", &phone)?;
        require_email(&email)?;

        self.phone = phone;
        self.email = email;
        Ok(())
    }
}
