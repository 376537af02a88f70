//! # Catalog Client Contract
//!
//! The narrow interface the rest of the app uses to reach the catalog.
//! [`DummyJsonClient`](crate::DummyJsonClient) is the production
//! implementation; tests substitute their own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use storefront_core::{Product, ProductId};

use crate::error::FetchResult;

/// Page size used when a caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 30;

// =============================================================================
// Requests
// =============================================================================

/// A window into a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub skip: u64,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(skip: u64, limit: u32) -> Self {
        PageRequest { skip, limit }
    }

    /// The first page of the given size.
    pub fn first(limit: u32) -> Self {
        PageRequest { skip: 0, limit }
    }
}

/// Parameters of a product listing, optionally filtered by a search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: PageRequest,
    pub search: Option<String>,
}

impl ProductQuery {
    pub fn new(page: PageRequest, search: Option<String>) -> Self {
        ProductQuery { page, search }
    }

    /// The search term, if it has any non-whitespace content.
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

// =============================================================================
// Responses
// =============================================================================

/// One page of products plus the size of the whole listing.
///
/// Deserializes straight from the dummyjson list envelope
/// (`{"products": [...], "total": 194, "skip": 0, "limit": 30}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub total: u64,
}

impl ProductPage {
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Client Trait
// =============================================================================

/// Read access to a remote product catalog.
///
/// Every failure is reported as a [`FetchError`](crate::FetchError) with a
/// human-readable message.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Lists products, or searches them when `query` carries a search term.
    async fn fetch_products(&self, query: &ProductQuery) -> FetchResult<ProductPage>;

    async fn fetch_product_by_id(&self, id: ProductId) -> FetchResult<Product>;

    async fn fetch_products_by_category(
        &self,
        category: &str,
        page: PageRequest,
    ) -> FetchResult<ProductPage>;

    /// Category slugs, in catalog order.
    async fn fetch_categories(&self) -> FetchResult<Vec<String>>;
}
