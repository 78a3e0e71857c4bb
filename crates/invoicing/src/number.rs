use serde::{Deserialize, Serialize};

/// Invoice number, e.g. `INV0001`.
///
/// Uniqueness is a caller convention; nothing in the repository enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// `prefix` followed by `index` zero-padded to `width` digits.
    ///
    /// Indexes wider than `width` are printed in full (`INV12345` for width 4).
    pub fn sequential(prefix: &str, width: usize, index: u64) -> Self {
        Self(format!("{prefix}{index:0width$}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for InvoiceNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for InvoiceNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_pads_to_width() {
        assert_eq!(InvoiceNumber::sequential("INV", 4, 1).as_str(), "INV0001");
        assert_eq!(InvoiceNumber::sequential("INV", 4, 42).as_str(), "INV0042");
        assert_eq!(InvoiceNumber::sequential("B-", 2, 7).as_str(), "B-07");
    }

    #[test]
    fn sequential_does_not_truncate() {
        assert_eq!(InvoiceNumber::sequential("INV", 4, 12345).as_str(), "INV12345");
    }

    #[test]
    fn display_matches_inner_value() {
        assert_eq!(InvoiceNumber::from("INV001").to_string(), "INV001");
    }
}
