//! # Favorites Engine
//!
//! The set of products the user has hearted, kept in the order they were
//! added so the profile screen lists them oldest first.

use serde::Serialize;

use crate::types::{Product, ProductId};

/// Favorited products, deduplicated by id.
///
/// Built only through its operations, so it is never deserialized:
///
/// ```compile_fail
/// let favs: storefront_core::Favorites = serde_json::from_str(r#"{"items":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Favorites {
    items: Vec<Product>,
}

impl Favorites {
    /// Creates an empty favorites list.
    pub fn new() -> Self {
        Favorites { items: Vec::new() }
    }

    /// Heart-icon tap: removes the product if present, otherwise adds it.
    ///
    /// Returns `true` when the product is a favorite after the call.
    pub fn toggle_favorite(&mut self, product: &Product) -> bool {
        if let Some(index) = self.items.iter().position(|p| p.id == product.id) {
            self.items.remove(index);
            false
        } else {
            self.items.push(product.clone());
            true
        }
    }

    /// Adds the product unless one with the same id is already present.
    pub fn add_favorite(&mut self, product: &Product) {
        if !self.is_favorite(product.id) {
            self.items.push(product.clone());
        }
    }

    /// No-op when `id` is not a favorite.
    pub fn remove_favorite(&mut self, id: ProductId) {
        self.items.retain(|p| p.id != id);
    }

    /// Removes every favorite.
    pub fn clear_favorites(&mut self) {
        self.items.clear();
    }

    /// Whether a product with this id is a favorite.
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    /// Favorites in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
