//! # Domain Types
//!
//! Catalog types shared by every storefront crate.
//!
//! ## Product Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product (immutable)                             │
//! │                                                                         │
//! │  id ─────────────── unique integer, the only identity used anywhere    │
//! │  title, brand, category, description                                   │
//! │  price ──────────── Money (wire: decimal, e.g. 9.99)                   │
//! │  discountPercentage  0-100, price is ALREADY discounted                │
//! │  rating ─────────── 0-5                                                │
//! │  stock ──────────── units available                                    │
//! │  thumbnail, images   URLs                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are owned by the remote catalog. The client never edits one; the
//! cart stores a snapshot taken at first add.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{self, Money};

/// Catalog identifier of a product.
pub type ProductId = u64;

// =============================================================================
// Product
// =============================================================================

/// A product as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique catalog identifier.
    #[ts(type = "number")]
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Long-form description for the detail screen.
    #[serde(default)]
    pub description: String,

    /// Category slug (e.g. "smartphones").
    #[serde(default)]
    pub category: String,

    /// Brand, absent for some catalog entries (groceries, ...).
    #[serde(default)]
    pub brand: Option<String>,

    /// Current selling price (after discount).
    #[serde(with = "money::decimal")]
    #[ts(type = "number")]
    pub price: Money,

    /// Discount already applied to `price`, 0-100.
    #[serde(default)]
    pub discount_percentage: f64,

    /// Average review rating, 0-5.
    #[serde(default)]
    pub rating: f64,

    /// Units in stock.
    #[serde(default)]
    pub stock: u32,

    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,

    /// Gallery image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Creates a product with the given identity and price; every other
    /// field is empty. Mostly useful for tests and fixtures.
    pub fn new(id: ProductId, title: impl Into<String>, price: Money) -> Self {
        Product {
            id,
            title: title.into(),
            description: String::new(),
            category: String::new(),
            brand: None,
            price,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    /// Whether the product is shown with a discount badge.
    #[inline]
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0.0
    }

    /// The struck-through "was" price shown next to a discounted price.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let mut p = Product::new(7, "Lamp", Money::from_cents(8000));
    /// p.discount_percentage = 20.0;
    /// assert_eq!(p.original_price().cents(), 10000);
    /// ```
    pub fn original_price(&self) -> Money {
        self.price.undo_percentage_discount(self.discount_percentage)
    }

    /// Discount rounded to a whole percent, as printed on the badge.
    pub fn discount_badge(&self) -> u32 {
        self.discount_percentage.clamp(0.0, 100.0).round() as u32
    }

    /// Checks if any units are available.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
