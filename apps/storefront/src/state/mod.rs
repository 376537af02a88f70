//! # State Module
//!
//! The explicit application context handed to every command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │                          AppContext                               │ │
//! │  │                                                                   │ │
//! │  │  ┌──────────┐  ┌────────────┐  ┌─────────────────┐  ┌──────────┐ │ │
//! │  │  │   Cart   │  │ Favorites  │  │ ThemeController │  │   Feed   │ │ │
//! │  │  │  (core)  │  │   (core)   │  │ pref + store    │  │ (catalog)│ │ │
//! │  │  └──────────┘  └────────────┘  └─────────────────┘  └──────────┘ │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! │                                                                         │
//! │  OWNERSHIP:                                                            │
//! │  • Commands take `&mut AppContext`; one writer at a time, no locks     │
//! │  • Only the theme touches storage, through spawned write tasks         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod theme;

pub use theme::{PendingWrite, ThemeController};

use storefront_catalog::ProductFeed;
use storefront_core::{Cart, Favorites};

/// Everything a command may read or mutate.
#[derive(Debug)]
pub struct AppContext {
    pub cart: Cart,
    pub favorites: Favorites,
    pub theme: ThemeController,
    /// Products currently listed (browse or search results).
    pub feed: ProductFeed,
}

impl AppContext {
    /// An empty cart and favorites list around a restored theme.
    pub fn new(theme: ThemeController, page_size: u32) -> Self {
        AppContext {
            cart: Cart::new(),
            favorites: Favorites::new(),
            theme,
            feed: ProductFeed::new(page_size),
        }
    }
}
