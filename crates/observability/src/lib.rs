//! Tracing/logging setup shared by the bookstore binaries.

/// Tracing configuration (filters, formatting).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging in the format named by `BOOKSTORE_LOG_FORMAT`
/// (JSON when unset).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }
}
