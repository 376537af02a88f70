//! # Validation Module
//!
//! Checks catalog payloads against the [`Product`] invariants before they
//! reach the cart or favorites.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Types and required fields (id, title, price)                      │
//! │  └── u32 stock rejects negatives                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── price >= 0                                                        │
//! │  ├── discountPercentage in 0..=100                                     │
//! │  └── rating in 0..=5                                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Cart / Favorites engines trust what they receive                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::validate_product;
//! use storefront_core::{Money, Product};
//!
//! let product = Product::new(1, "Phone", Money::from_cents(49900));
//! assert!(validate_product(&product).is_ok());
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound of the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Upper bound of a discount percentage.
pub const MAX_DISCOUNT_PERCENTAGE: f64 = 100.0;

/// Validates a product title.
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_title;
///
/// assert!(validate_title("iPhone 9").is_ok());
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }
    Ok(())
}

/// Validates that a float lies within `[min, max]`. NaN is rejected.
fn validate_range(field: &str, value: f64, min: f64, max: f64) -> ValidationResult<()> {
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

/// Validates every invariant of a catalog product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_title(&product.title)?;

    if product.price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    validate_range(
        "discountPercentage",
        product.discount_percentage,
        0.0,
        MAX_DISCOUNT_PERCENTAGE,
    )?;
    validate_range("rating", product.rating, 0.0, MAX_RATING)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
