//! # Catalog Error Type
//!
//! Every catalog failure collapses into one [`FetchError`] carrying a
//! message fit to show the user:
//!
//! ```text
//! transport failure   ─┐
//! non-2xx status       ├──► FetchError { "Failed to fetch <what>: <detail>" }
//! undecodable body     │
//! invalid product     ─┘
//! ```

use thiserror::Error;

/// Result type alias for catalog operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// A failed catalog request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        FetchError {
            message: message.into(),
        }
    }

    /// Builds the `"Failed to fetch <what>: <detail>"` form.
    pub fn failed(what: &str, detail: impl std::fmt::Display) -> Self {
        FetchError::new(format!("Failed to fetch {what}: {detail}"))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_message_format() {
        let err = FetchError::failed("products", "404 Not Found");
        assert_eq!(err.message(), "Failed to fetch products: 404 Not Found");
        assert_eq!(err.to_string(), err.message());
    }
}
