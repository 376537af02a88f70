//! # Commands Module
//!
//! Operations the presentation layer invokes. Each one takes the
//! [`AppContext`](crate::state::AppContext), logs at debug, and returns a
//! serializable response.
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CATALOG                │  CART                   │  FAVORITES          │
//! │  • list_products        │  • get_cart             │  • get_favorites    │
//! │  • load_more            │  • add_to_cart          │  • toggle_favorite  │
//! │  • get_product          │  • increase_quantity    │  • add_favorite     │
//! │  • list_categories      │  • decrease_quantity    │  • remove_favorite  │
//! │  • products_by_category │  • remove_from_cart     │  • clear_favorites  │
//! │                         │  • clear_cart           │  • is_favorite      │
//! │  THEME                  │  • checkout             │                     │
//! │  • get_theme            │                         │                     │
//! │  • toggle_theme         │                         │                     │
//! │  • set_theme            │                         │                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod theme;
