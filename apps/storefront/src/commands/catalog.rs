//! # Catalog Commands
//!
//! Browsing and search go through the context's [`ProductFeed`], so a
//! search issued while an older one is in flight wins.
//!
//! ```text
//! list_products(search)  →  feed.reset  →  fetch page 0  →  feed.apply
//! load_more()            →  feed.next_request (None: nothing to do)
//! ```
//!
//! [`ProductFeed`]: storefront_catalog::ProductFeed

use serde::Serialize;
use storefront_catalog::{CatalogClient, FeedRequest, PageRequest, ProductFeed, ProductPage};
use storefront_core::{Money, Product, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppContext;

/// The listed products and where the listing stands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub loaded: u64,
    pub total: u64,
    pub has_more: bool,
    pub search: Option<String>,
}

impl From<&ProductFeed> for ProductListResponse {
    fn from(feed: &ProductFeed) -> Self {
        ProductListResponse {
            products: feed.products().cloned().collect(),
            loaded: feed.loaded_count(),
            total: feed.total(),
            has_more: feed.has_more(),
            search: feed.search().map(str::to_string),
        }
    }
}

/// A product with the per-user state the detail screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: Product,
    /// Pre-discount price, equal to `price` without a discount.
    pub original_price: Money,
    /// Rounded discount percentage, 0 without a discount.
    pub discount_badge: u32,
    pub in_stock: bool,
    pub in_cart: u32,
    pub is_favorite: bool,
}

impl ProductDetail {
    fn new(ctx: &AppContext, product: Product) -> Self {
        ProductDetail {
            original_price: product.original_price(),
            discount_badge: product.discount_badge(),
            in_stock: product.is_in_stock(),
            in_cart: ctx.cart.quantity_of(product.id),
            is_favorite: ctx.favorites.is_favorite(product.id),
            product,
        }
    }
}

async fn fetch_into_feed(
    ctx: &mut AppContext,
    catalog: &dyn CatalogClient,
    request: FeedRequest,
) -> Result<ProductListResponse, ApiError> {
    let page = catalog.fetch_products(&request.query).await?;
    ctx.feed.apply(&request, page);
    Ok(ProductListResponse::from(&ctx.feed))
}

/// Starts a listing: every product, or the matches for `search`.
pub async fn list_products(
    ctx: &mut AppContext,
    catalog: &dyn CatalogClient,
    search: Option<String>,
) -> Result<ProductListResponse, ApiError> {
    debug!(search = ?search, "list_products command");

    let request = ctx.feed.reset(search);
    fetch_into_feed(ctx, catalog, request).await
}

/// Fetches the next page of the current listing, if there is one.
pub async fn load_more(
    ctx: &mut AppContext,
    catalog: &dyn CatalogClient,
) -> Result<ProductListResponse, ApiError> {
    debug!(loaded = ctx.feed.loaded_count(), "load_more command");

    match ctx.feed.next_request() {
        Some(request) => fetch_into_feed(ctx, catalog, request).await,
        None => Ok(ProductListResponse::from(&ctx.feed)),
    }
}

/// Product detail, always fetched fresh from the catalog.
pub async fn get_product(
    ctx: &AppContext,
    catalog: &dyn CatalogClient,
    product_id: ProductId,
) -> Result<ProductDetail, ApiError> {
    debug!(product_id = product_id, "get_product command");

    let product = catalog.fetch_product_by_id(product_id).await?;
    Ok(ProductDetail::new(ctx, product))
}

pub async fn list_categories(catalog: &dyn CatalogClient) -> Result<Vec<String>, ApiError> {
    debug!("list_categories command");
    Ok(catalog.fetch_categories().await?)
}

/// First page of a category, sized like the browsing feed.
pub async fn products_by_category(
    ctx: &AppContext,
    catalog: &dyn CatalogClient,
    category: &str,
) -> Result<ProductPage, ApiError> {
    debug!(category = %category, "products_by_category command");

    let category = category.trim();
    if category.is_empty() {
        return Err(ApiError::validation("Category is required"));
    }

    let page = PageRequest::first(ctx.feed.page_size());
    Ok(catalog.fetch_products_by_category(category, page).await?)
}

/// Finds a product the user is looking at: the current listing, the
/// favorites, then the catalog.
///
/// Cart snapshots are never consulted.
pub(crate) async fn resolve_product(
    ctx: &AppContext,
    catalog: &dyn CatalogClient,
    product_id: ProductId,
) -> Result<Product, ApiError> {
    let known = ctx
        .feed
        .products()
        .chain(ctx.favorites.items())
        .find(|p| p.id == product_id);

    match known {
        Some(product) => Ok(product.clone()),
        None => Ok(catalog.fetch_product_by_id(product_id).await?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{context, product, StubCatalog};

    #[tokio::test]
    async fn test_list_and_load_more() {
        let catalog = StubCatalog::with_products(25);
        let mut ctx = context();

        let first = list_products(&mut ctx, &catalog, None).await.unwrap();
        assert_eq!(first.loaded, 20);
        assert_eq!(first.total, 25);
        assert!(first.has_more);

        let second = load_more(&mut ctx, &catalog).await.unwrap();
        assert_eq!(second.loaded, 25);
        assert!(!second.has_more);

        // Nothing left: no request, same listing
        let third = load_more(&mut ctx, &catalog).await.unwrap();
        assert_eq!(third, second);
        assert_eq!(catalog.product_requests(), 2);
    }

    #[tokio::test]
    async fn test_search_replaces_listing() {
        let catalog = StubCatalog::with_products(25);
        let mut ctx = context();

        list_products(&mut ctx, &catalog, None).await.unwrap();
        let results = list_products(&mut ctx, &catalog, Some("Product 1".into()))
            .await
            .unwrap();

        assert_eq!(results.search.as_deref(), Some("Product 1"));
        assert!(results.products.iter().all(|p| p.title.contains("Product 1")));
    }

    #[tokio::test]
    async fn test_product_detail_reflects_user_state() {
        let catalog = StubCatalog::with_products(5);
        let mut ctx = context();
        ctx.cart.add_to_cart(&product(3, 100));
        ctx.favorites.add_favorite(&product(3, 100));

        let detail = get_product(&ctx, &catalog, 3).await.unwrap();
        assert_eq!(detail.in_cart, 1);
        assert!(detail.is_favorite);
        assert!(detail.in_stock);

        let err = get_product(&ctx, &catalog, 99).await.unwrap_err();
        assert_eq!(err.message, "Failed to fetch product: 404 Not Found");
    }

    #[tokio::test]
    async fn test_resolve_prefers_listing() {
        let catalog = StubCatalog::with_products(5);
        let mut ctx = context();
        list_products(&mut ctx, &catalog, None).await.unwrap();

        resolve_product(&ctx, &catalog, 2).await.unwrap();
        assert_eq!(catalog.by_id_requests(), 0);

        resolve_product(&ctx, &catalog, 4000).await.unwrap_err();
        assert_eq!(catalog.by_id_requests(), 1);
    }

    #[tokio::test]
    async fn test_blank_category_rejected() {
        let catalog = StubCatalog::with_products(5);
        let ctx = context();

        assert!(products_by_category(&ctx, &catalog, "  ").await.is_err());

        let page = products_by_category(&ctx, &catalog, "beauty").await.unwrap();
        assert_eq!(page.len(), 5);
        assert_eq!(list_categories(&catalog).await.unwrap(), vec!["beauty"]);
    }
}
