//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌──────────┐  add_to_cart   ┌──────────┐   checkout   ┌──────────────┐
//! │  Empty   │───────────────►│ In Cart  │─────────────►│   Receipt    │
//! │  Cart    │◄───────────────│          │              │ (cart empty) │
//! └──────────┘  clear_cart /  └──────────┘              └──────────────┘
//!               last decrease   inc / dec / rm
//! ```

use serde::Serialize;
use storefront_catalog::CatalogClient;
use storefront_core::{Cart, CartLineItem, CartTotals, CheckoutReceipt, Product, ProductId};
use tracing::{debug, info};

use crate::commands::catalog::resolve_product;
use crate::error::ApiError;
use crate::state::AppContext;

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: cart.totals(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(ctx: &AppContext) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(&ctx.cart)
}

/// Adds a product by id, looking it up in the listed products first and
/// the catalog otherwise.
///
/// ## Behavior
/// - Already in cart: quantity increases, the stored snapshot is kept
/// - Not in cart: added with quantity 1 at the current price
pub async fn add_to_cart(
    ctx: &mut AppContext,
    catalog: &dyn CatalogClient,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = product_id, "add_to_cart command");

    let product = resolve_product(ctx, catalog, product_id).await?;
    Ok(add_product_to_cart(ctx, &product))
}

/// Adds a product the caller already holds.
pub fn add_product_to_cart(ctx: &mut AppContext, product: &Product) -> CartResponse {
    debug!(product_id = product.id, "add_product_to_cart command");
    ctx.cart.add_to_cart(product);
    CartResponse::from(&ctx.cart)
}

pub fn increase_quantity(ctx: &mut AppContext, product_id: ProductId) -> CartResponse {
    debug!(product_id = product_id, "increase_quantity command");
    ctx.cart.increase_quantity(product_id);
    CartResponse::from(&ctx.cart)
}

/// Decrements, removing the line when it reaches zero.
pub fn decrease_quantity(ctx: &mut AppContext, product_id: ProductId) -> CartResponse {
    debug!(product_id = product_id, "decrease_quantity command");
    ctx.cart.decrease_quantity(product_id);
    CartResponse::from(&ctx.cart)
}

pub fn remove_from_cart(ctx: &mut AppContext, product_id: ProductId) -> CartResponse {
    debug!(product_id = product_id, "remove_from_cart command");
    ctx.cart.remove_from_cart(product_id);
    CartResponse::from(&ctx.cart)
}

pub fn clear_cart(ctx: &mut AppContext) -> CartResponse {
    debug!("clear_cart command");
    ctx.cart.clear_cart();
    CartResponse::from(&ctx.cart)
}

/// Simulated checkout. `None` when the cart is empty.
pub fn checkout(ctx: &mut AppContext) -> Option<CheckoutReceipt> {
    debug!("checkout command");

    let receipt = ctx.cart.checkout()?;
    info!(
        confirmation_id = %receipt.confirmation_id,
        item_count = receipt.item_count,
        subtotal = %receipt.subtotal,
        "Order confirmed"
    );
    Some(receipt)
}
