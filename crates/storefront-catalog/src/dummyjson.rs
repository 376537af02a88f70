//! # dummyjson Catalog Client
//!
//! [`CatalogClient`] over HTTP against the dummyjson e-commerce API.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation                    Request                                   │
//! │  ───────────────────────────  ──────────────────────────────────────── │
//! │  fetch_products (no search)   GET /products?skip=&limit=               │
//! │  fetch_products (search)      GET /products/search?q=&skip=&limit=     │
//! │  fetch_product_by_id          GET /products/{id}                       │
//! │  fetch_products_by_category   GET /products/category/{slug}?skip=&limit=│
//! │  fetch_categories             GET /products/categories                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Path segments are percent-encoded by `url`, so a category such as
//! `"home decoration"` is sent as `home%20decoration`.

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use storefront_core::validation::validate_product;
use storefront_core::{Product, ProductId};
use tracing::{debug, warn};

use crate::client::{CatalogClient, PageRequest, ProductPage, ProductQuery};
use crate::config::CatalogConfig;
use crate::error::{FetchError, FetchResult};

/// HTTP catalog client. Cheap to clone (the reqwest client is shared).
#[derive(Debug, Clone)]
pub struct DummyJsonClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DummyJsonClient {
    /// Builds a client from validated settings.
    pub fn new(config: &CatalogConfig) -> FetchResult<Self> {
        let base_url = config
            .parsed_base_url()
            .map_err(|e| FetchError::new(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::new(format!("Failed to build HTTP client: {e}")))?;

        Ok(DummyJsonClient { client, base_url })
    }

    /// `{base}/products/{segments...}` with the given query pairs.
    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> FetchResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::new(format!("Invalid catalog base URL: {}", self.base_url)))?
            .pop_if_empty()
            .push("products")
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    fn page_params(page: PageRequest) -> Vec<(&'static str, String)> {
        vec![
            ("skip", page.skip.to_string()),
            ("limit", page.limit.to_string()),
        ]
    }

    /// GET and decode JSON. `what` names the resource in error messages.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> FetchResult<T> {
        debug!(url = %url, "Catalog request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::failed(what, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, what = what, "Catalog request rejected");
            return Err(FetchError::failed(what, status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::failed(what, e))
    }

    fn check_products(products: &[Product], what: &str) -> FetchResult<()> {
        for product in products {
            validate_product(product).map_err(|e| {
                FetchError::failed(what, format!("invalid product {}: {e}", product.id))
            })?;
        }
        Ok(())
    }
}

/// `/products/categories` returns bare slugs on older API versions and
/// `{slug, name, url}` objects on newer ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryEntry {
    Slug(String),
    Detailed { slug: String },
}

impl CategoryEntry {
    fn into_slug(self) -> String {
        match self {
            CategoryEntry::Slug(slug) | CategoryEntry::Detailed { slug } => slug,
        }
    }
}

#[async_trait]
impl CatalogClient for DummyJsonClient {
    async fn fetch_products(&self, query: &ProductQuery) -> FetchResult<ProductPage> {
        let mut params = Self::page_params(query.page);

        let url = match query.search_term() {
            Some(term) => {
                params.insert(0, ("q", term.to_string()));
                self.endpoint(&["search"], &params)?
            }
            None => self.endpoint(&[], &params)?,
        };

        let page: ProductPage = self.get_json(url, "products").await?;
        Self::check_products(&page.products, "products")?;

        debug!(
            count = page.len(),
            total = page.total,
            skip = query.page.skip,
            "Fetched products"
        );
        Ok(page)
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> FetchResult<Product> {
        let id = id.to_string();
        let url = self.endpoint(&[id.as_str()], &[])?;

        let product: Product = self.get_json(url, "product").await?;
        Self::check_products(std::slice::from_ref(&product), "product")?;

        Ok(product)
    }

    async fn fetch_products_by_category(
        &self,
        category: &str,
        page: PageRequest,
    ) -> FetchResult<ProductPage> {
        let what = "products by category";
        let url = self.endpoint(&["category", category], &Self::page_params(page))?;

        let page: ProductPage = self.get_json(url, what).await?;
        Self::check_products(&page.products, what)?;

        debug!(category = %category, count = page.len(), "Fetched category products");
        Ok(page)
    }

    async fn fetch_categories(&self) -> FetchResult<Vec<String>> {
        let url = self.endpoint(&["categories"], &[])?;

        let entries: Vec<CategoryEntry> = self.get_json(url, "categories").await?;
        Ok(entries.into_iter().map(CategoryEntry::into_slug).collect())
    }
}
