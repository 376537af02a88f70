//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Product payload validation failures            │
//! │                                                                         │
//! │  storefront-db errors          └── DbError                             │
//! │  storefront-catalog errors     └── FetchError                          │
//! │  app errors                    └── ApiError (serialized)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart and favorites commands never fail: an unknown id is a no-op. The
//! errors here only arise at the edges, when parsing user input or checking
//! data that came from the remote catalog.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A theme mode string was neither `light` nor `dark`.
    #[error("Unknown theme mode: '{0}'. Valid options: light, dark")]
    UnknownThemeMode(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product validation errors.
///
/// Raised when a catalog payload breaks a [`Product`](crate::types::Product)
/// invariant (negative price, rating outside 0-5, ...).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
