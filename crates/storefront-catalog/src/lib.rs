//! # storefront-catalog: Remote Product Catalog
//!
//! The catalog is a collaborator of the cart and favorites engines: it only
//! supplies [`Product`](storefront_core::Product) values. Everything here is
//! read-only.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Request Flow                             │
//! │                                                                         │
//! │  Command layer                                                         │
//! │       │  feed.reset(Some("phone"))  → FeedRequest { generation, query } │
//! │       ▼                                                                 │
//! │  dyn CatalogClient::fetch_products(&query)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DummyJsonClient                                                       │
//! │  ├── GET /products/search?q=phone&skip=0&limit=20                      │
//! │  ├── non-2xx      → FetchError("Failed to fetch products: 404 ...")   │
//! │  └── 2xx + JSON   → ProductPage { products, total }                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  feed.apply(request, page)  ← dropped if a newer search started        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`client`] - The `CatalogClient` trait and its request/response types
//! - [`dummyjson`] - reqwest implementation against dummyjson.com
//! - [`pagination`] - Next-page computation and the `ProductFeed`
//! - [`config`] - Base URL, page size, timeout
//! - [`error`] - `FetchError`

pub mod client;
pub mod config;
pub mod dummyjson;
pub mod error;
pub mod pagination;

pub use client::{CatalogClient, PageRequest, ProductPage, ProductQuery, DEFAULT_LIMIT};
pub use config::{CatalogConfig, CatalogConfigError, DEFAULT_BASE_URL};
pub use dummyjson::DummyJsonClient;
pub use error::{FetchError, FetchResult};
pub use pagination::{next_page_skip, FeedRequest, ProductFeed};
