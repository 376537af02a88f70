//! # Favorites Commands

use serde::Serialize;
use storefront_catalog::CatalogClient;
use storefront_core::{Favorites, Product, ProductId};
use tracing::debug;

use crate::commands::catalog::resolve_product;
use crate::error::ApiError;
use crate::state::AppContext;

/// The favorites list, in the order products were added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub items: Vec<Product>,
    pub count: usize,
}

impl From<&Favorites> for FavoritesResponse {
    fn from(favorites: &Favorites) -> Self {
        FavoritesResponse {
            items: favorites.items().to_vec(),
            count: favorites.len(),
        }
    }
}

/// Result of a toggle: the new membership plus the updated list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteResponse {
    pub product_id: ProductId,
    pub is_favorite: bool,
    pub favorites: FavoritesResponse,
}

pub fn get_favorites(ctx: &AppContext) -> FavoritesResponse {
    debug!("get_favorites command");
    FavoritesResponse::from(&ctx.favorites)
}

/// Toggles by id. Un-favoriting never touches the catalog.
pub async fn toggle_favorite(
    ctx: &mut AppContext,
    catalog: &dyn CatalogClient,
    product_id: ProductId,
) -> Result<ToggleFavoriteResponse, ApiError> {
    debug!(product_id = product_id, "toggle_favorite command");

    if ctx.favorites.is_favorite(product_id) {
        ctx.favorites.remove_favorite(product_id);
        return Ok(toggled(ctx, product_id, false));
    }

    let product = resolve_product(ctx, catalog, product_id).await?;
    let is_favorite = ctx.favorites.toggle_favorite(&product);
    Ok(toggled(ctx, product_id, is_favorite))
}

fn toggled(ctx: &AppContext, product_id: ProductId, is_favorite: bool) -> ToggleFavoriteResponse {
    ToggleFavoriteResponse {
        product_id,
        is_favorite,
        favorites: FavoritesResponse::from(&ctx.favorites),
    }
}

/// Adds a product the caller already holds. Idempotent.
pub fn add_favorite(ctx: &mut AppContext, product: &Product) -> FavoritesResponse {
    debug!(product_id = product.id, "add_favorite command");
    ctx.favorites.add_favorite(product);
    FavoritesResponse::from(&ctx.favorites)
}

pub fn remove_favorite(ctx: &mut AppContext, product_id: ProductId) -> FavoritesResponse {
    debug!(product_id = product_id, "remove_favorite command");
    ctx.favorites.remove_favorite(product_id);
    FavoritesResponse::from(&ctx.favorites)
}

pub fn clear_favorites(ctx: &mut AppContext) -> FavoritesResponse {
    debug!("clear_favorites command");
    ctx.favorites.clear_favorites();
    FavoritesResponse::from(&ctx.favorites)
}

pub fn is_favorite(ctx: &AppContext, product_id: ProductId) -> bool {
    ctx.favorites.is_favorite(product_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context, product, StubCatalog};

    #[tokio::test]
    async fn test_toggle_twice_is_empty() {
        let catalog = StubCatalog::with_products(3);
        let mut ctx = context();

        let on = toggle_favorite(&mut ctx, &catalog, 2).await.unwrap();
        assert!(on.is_favorite);
        assert_eq!(on.favorites.count, 1);

        let off = toggle_favorite(&mut ctx, &catalog, 2).await.unwrap();
        assert!(!off.is_favorite);
        assert_eq!(off.favorites.count, 0);
        assert_eq!(catalog.by_id_requests(), 1);
    }

    #[tokio::test]
    async fn test_toggle_unknown_product_fails_without_change() {
        let catalog = StubCatalog::with_products(3);
        let mut ctx = context();

        assert!(toggle_favorite(&mut ctx, &catalog, 77).await.is_err());
        assert!(get_favorites(&ctx).items.is_empty());
    }

    #[test]
    fn test_add_is_idempotent_and_remove_absent_is_noop() {
        let mut ctx = context();
        add_favorite(&mut ctx, &product(1, 100));
        let response = add_favorite(&mut ctx, &product(1, 100));
        assert_eq!(response.count, 1);
        assert!(is_favorite(&ctx, 1));

        let response = remove_favorite(&mut ctx, 9);
        assert_eq!(response.count, 1);

        assert_eq!(clear_favorites(&mut ctx).count, 0);
        assert!(!is_favorite(&ctx, 1));
    }
}
