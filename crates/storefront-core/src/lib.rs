//! # storefront-core: Pure State Engine for the Storefront Client
//!
//! This crate is the **heart** of the storefront. It owns the cart, the
//! favorites set and the theme preference as plain in-memory state with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (shell / mobile UI)             │   │
//! │  │    Product List ──► Product Detail ──► Cart ──► Profile         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ favorites │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ Favorites │  │   │
//! │  │   │           │  │           │  │ LineItem  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │   theme   │  │ validation│                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE STATE               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        storefront-db (prefs)  │  storefront-catalog (HTTP)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart engine (line items, totals, checkout)
//! - [`favorites`] - Favorites engine
//! - [`theme`] - Theme mode and preference state
//! - [`error`] - Domain error types
//! - [`validation`] - Product payload validation
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: every engine is mutated through `&mut self` only
//! 2. **No I/O**: persistence and network live in sibling crates
//! 3. **Integer Money**: prices are cents (i64); floats only at the wire boundary
//! 4. **Total Operations**: commands on a missing id are no-ops, never errors
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::cart::Cart;
//! use storefront_core::types::Product;
//! use storefront_core::money::Money;
//!
//! let mut cart = Cart::new();
//! let phone = Product::new(1, "Phone", Money::from_cents(1000));
//!
//! cart.add_to_cart(&phone);
//! cart.add_to_cart(&phone);
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.subtotal().cents(), 2000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod favorites;
pub mod money;
pub mod theme;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLineItem, CartTotals, CheckoutReceipt};
pub use error::{CoreError, ValidationError};
pub use favorites::Favorites;
pub use money::Money;
pub use theme::{ThemeMode, ThemePreference, THEME_STORAGE_KEY};
pub use types::*;
