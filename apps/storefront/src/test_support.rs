//! Fixtures shared by the command tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use storefront_catalog::{
    CatalogClient, FetchError, FetchResult, PageRequest, ProductPage, ProductQuery,
};
use storefront_core::{Money, Product, ProductId};
use storefront_db::MemoryStore;

use crate::state::{AppContext, ThemeController};

pub fn product(id: ProductId, price_cents: i64) -> Product {
    let mut product = Product::new(id, format!("Product {id}"), Money::from_cents(price_cents));
    product.stock = 10;
    product
}

/// Fresh context with page size 20 and an in-memory theme store.
pub fn context() -> AppContext {
    AppContext::new(ThemeController::new(Arc::new(MemoryStore::new())), 20)
}

/// Catalog of products `1..=n` that counts the requests it serves.
pub struct StubCatalog {
    products: Vec<Product>,
    product_requests: AtomicUsize,
    by_id_requests: AtomicUsize,
}

impl StubCatalog {
    pub fn with_products(n: u64) -> Self {
        StubCatalog {
            products: (1..=n).map(|id| product(id, 100 * id as i64)).collect(),
            product_requests: AtomicUsize::new(0),
            by_id_requests: AtomicUsize::new(0),
        }
    }

    pub fn product_requests(&self) -> usize {
        self.product_requests.load(Ordering::SeqCst)
    }

    pub fn by_id_requests(&self) -> usize {
        self.by_id_requests.load(Ordering::SeqCst)
    }

    fn page_of(products: Vec<Product>, page: PageRequest) -> ProductPage {
        let total = products.len() as u64;
        ProductPage {
            products: products
                .into_iter()
                .skip(page.skip as usize)
                .take(page.limit as usize)
                .collect(),
            total,
        }
    }
}

#[async_trait]
impl CatalogClient for StubCatalog {
    async fn fetch_products(&self, query: &ProductQuery) -> FetchResult<ProductPage> {
        self.product_requests.fetch_add(1, Ordering::SeqCst);

        let matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| query.search_term().map_or(true, |t| p.title.contains(t)))
            .cloned()
            .collect();

        Ok(Self::page_of(matches, query.page))
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> FetchResult<Product> {
        self.by_id_requests.fetch_add(1, Ordering::SeqCst);

        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| FetchError::failed("product", "404 Not Found"))
    }

    async fn fetch_products_by_category(
        &self,
        _category: &str,
        page: PageRequest,
    ) -> FetchResult<ProductPage> {
        Ok(Self::page_of(self.products.clone(), page))
    }

    async fn fetch_categories(&self) -> FetchResult<Vec<String>> {
        Ok(vec!["beauty".to_string()])
    }
}
