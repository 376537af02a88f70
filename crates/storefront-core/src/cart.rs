//! # Cart Engine
//!
//! Owns the shopping cart's line items and derives every total from them.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Engine Operations                               │
//! │                                                                         │
//! │  UI Action               Command                  State Change          │
//! │  ─────────               ───────                  ────────────          │
//! │                                                                         │
//! │  "Add to Cart" ────────► add_to_cart(p) ───────► qty += 1 | push(p, 1) │
//! │                                                                         │
//! │  "+" button ───────────► increase_quantity(id) ─► qty += 1             │
//! │                                                                         │
//! │  "-" button ───────────► decrease_quantity(id) ─► qty -= 1 | remove    │
//! │                                                                         │
//! │  Trash icon ───────────► remove_from_cart(id) ──► remove               │
//! │                                                                         │
//! │  "Clear" ──────────────► clear_cart() ──────────► items.clear()        │
//! │                                                                         │
//! │  "Checkout" ───────────► checkout() ────────────► receipt + clear      │
//! │                                                                         │
//! │  NOTE: Unknown ids are no-ops. No command can fail.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Line Item
// =============================================================================

/// An entry in the cart: a product snapshot plus a quantity.
///
/// ## Snapshot Semantics
/// The product fields are frozen at the first add. Adding the same id again
/// only bumps `quantity`; the price used for totals stays the one captured
/// here even if the catalog price has changed since.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    /// Product fields at time of first add (frozen).
    #[serde(flatten)]
    pub product: Product,

    /// Always >= 1 while the item is in a cart.
    pub quantity: u32,
}

impl CartLineItem {
    fn from_product(product: &Product) -> Self {
        CartLineItem {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Catalog id of the snapshotted product.
    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Snapshot unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line item per product id
/// - Every stored quantity is >= 1 (reaching 0 removes the line)
/// - Lines keep the position of their first add
/// - Totals are recomputed from `items` on every call, never cached
///
/// A cart is only ever built through its operations; it serializes for
/// rendering but cannot be deserialized:
///
/// ```compile_fail
/// let cart: storefront_core::Cart = serde_json::from_str(r#"{"items":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn find_mut(&mut self, id: ProductId) -> Option<&mut CartLineItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity += 1, snapshot left untouched
    /// - Product not in cart: appended with quantity 1
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(item) = self.find_mut(product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return;
        }

        self.items.push(CartLineItem::from_product(product));
    }

    /// Adds one unit to an existing line. No-op when `id` is not in the cart.
    pub fn increase_quantity(&mut self, id: ProductId) {
        if let Some(item) = self.find_mut(id) {
            item.quantity = item.quantity.saturating_add(1);
        }
    }

    /// Removes one unit from a line, dropping the line when it reaches zero.
    /// No-op when `id` is not in the cart.
    pub fn decrease_quantity(&mut self, id: ProductId) {
        let Some(index) = self.position(id) else {
            return;
        };

        if self.items[index].quantity > 1 {
            self.items[index].quantity -= 1;
        } else {
            self.items.remove(index);
        }
    }

    /// Removes a line regardless of its quantity. No-op when absent.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.items.retain(|item| item.id() != id);
    }

    /// Clears all items from the cart.
    pub fn clear_cart(&mut self) {
        self.items.clear();
    }

    /// Simulated checkout: snapshots the totals into a receipt and empties
    /// the cart.
    ///
    /// Returns `None` (and leaves the cart alone) when there is nothing to
    /// check out.
    pub fn checkout(&mut self) -> Option<CheckoutReceipt> {
        if self.is_empty() {
            return None;
        }

        let receipt = CheckoutReceipt {
            confirmation_id: Uuid::new_v4(),
            item_count: self.item_count(),
            subtotal: self.subtotal(),
            completed_at: Utc::now(),
        };
        self.clear_cart();
        Some(receipt)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Total number of units across all lines (Σ quantity).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Σ snapshot price × quantity.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Quantity held for `id`, zero when absent.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .map_or(0, |item| item.quantity)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Summary used by the order-summary panel.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }
}

// =============================================================================
// Derived Views
// =============================================================================

/// Cart totals summary for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    #[ts(type = "number")]
    pub item_count: u64,
    #[ts(type = "number")]
    pub line_count: usize,
    pub subtotal: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            line_count: cart.line_count(),
            subtotal: cart.subtotal(),
        }
    }
}

/// Confirmation produced by [`Cart::checkout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutReceipt {
    #[ts(as = "String")]
    pub confirmation_id: Uuid,
    #[ts(type = "number")]
    pub item_count: u64,
    pub subtotal: Money,
    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: ProductId, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(price_cents))
    }

    #[test]
    fn test_add_to_empty_cart() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add_to_cart(&product);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.subtotal(), product.price);
    }

    #[test]
    fn test_repeat_add_keeps_first_snapshot() {
        let mut cart = Cart::new();
        let first = test_product(1, 1000);
        let mut repriced = first.clone();
        repriced.price = Money::from_cents(5000);
        repriced.title = "Renamed".to_string();

        cart.add_to_cart(&first);
        cart.add_to_cart(&repriced);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[0].product.title, "Product 1");
        assert_eq!(cart.subtotal().cents(), 2000);
    }

    #[test]
    fn test_repeat_add_keeps_position() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 100));
        cart.add_to_cart(&test_product(2, 100));
        cart.add_to_cart(&test_product(1, 100));

        let ids: Vec<_> = cart.items().iter().map(CartLineItem::id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_mixed_cart_totals() {
        let mut cart = Cart::new();
        let a = test_product(1, 1000);
        let b = test_product(2, 550);

        cart.add_to_cart(&a);
        cart.add_to_cart(&a);
        cart.add_to_cart(&b);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal().cents(), 2550);
        assert_eq!(cart.subtotal().to_string(), "€25.50");
    }

    #[test]
    fn test_increase_quantity() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 250));

        cart.increase_quantity(1);
        assert_eq!(cart.quantity_of(1), 2);

        cart.increase_quantity(42);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_decrease_quantity_to_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 1000));
        cart.add_to_cart(&test_product(2, 550));
        cart.increase_quantity(2);

        cart.decrease_quantity(2);
        assert_eq!(cart.quantity_of(2), 1);

        cart.decrease_quantity(1);
        assert_eq!(cart.quantity_of(1), 0);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.subtotal().cents(), 550);
    }

    #[test]
    fn test_decrease_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 1000));
        let before = cart.clone();

        cart.decrease_quantity(99);

        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_from_cart() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 1000));
        cart.increase_quantity(1);
        cart.add_to_cart(&test_product(2, 550));

        cart.remove_from_cart(1);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.subtotal().cents(), 550);

        let before = cart.clone();
        cart.remove_from_cart(99);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_cart() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 999));
        cart.add_to_cart(&test_product(2, 1));

        cart.clear_cart();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.subtotal().is_zero());

        cart.clear_cart();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_returns_receipt_and_clears() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 1000));
        cart.add_to_cart(&test_product(1, 1000));

        let receipt = cart.checkout().expect("non-empty cart checks out");

        assert_eq!(receipt.item_count, 2);
        assert_eq!(receipt.subtotal.cents(), 2000);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_is_none() {
        let mut cart = Cart::new();
        assert!(cart.checkout().is_none());
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(1, 1000));
        cart.increase_quantity(1);
        cart.add_to_cart(&test_product(2, 550));

        let totals = cart.totals();
        assert_eq!(totals.item_count, 3);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.subtotal.cents(), 2550);
    }

    #[test]
    fn test_line_item_serializes_flat() {
        let mut cart = Cart::new();
        cart.add_to_cart(&test_product(5, 120));

        let json = serde_json::to_value(&cart.items()[0]).unwrap();
        assert_eq!(json["id"], serde_json::json!(5));
        assert_eq!(json["quantity"], serde_json::json!(1));
        assert_eq!(json["price"], serde_json::json!(1.2));
    }
}
