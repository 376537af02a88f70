//! # Pagination
//!
//! Infinite-scroll bookkeeping for the product list.
//!
//! ## Feed Lifecycle
//! ```text
//! reset(search)  ──► generation += 1, pages cleared, request for skip 0
//!      │
//!      ▼
//! apply(request, page)
//!      ├── request.generation != current  → dropped (superseded search)
//!      ├── request.skip != loaded count   → dropped (duplicate load)
//!      └── otherwise                      → page appended
//!      │
//!      ▼
//! next_request()  ──► skip = loaded count, or None once total is reached
//! ```

use storefront_core::Product;
use tracing::debug;

use crate::client::{PageRequest, ProductPage, ProductQuery};

/// Where the next page starts, given every page loaded so far.
///
/// `None` before the first page, once the loaded count reaches the last
/// page's `total`, or when the last page came back empty.
pub fn next_page_skip(pages: &[ProductPage]) -> Option<u64> {
    let last = pages.last()?;
    if last.is_empty() {
        return None;
    }

    let loaded: u64 = pages.iter().map(|page| page.len() as u64).sum();
    (loaded < last.total).then_some(loaded)
}

/// A page request stamped with the feed generation that issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    pub generation: u64,
    pub query: ProductQuery,
}

/// Accumulated pages of one product listing.
#[derive(Debug, Clone)]
pub struct ProductFeed {
    page_size: u32,
    search: Option<String>,
    pages: Vec<ProductPage>,
    generation: u64,
}

impl ProductFeed {
    pub fn new(page_size: u32) -> Self {
        ProductFeed {
            page_size,
            search: None,
            pages: Vec::new(),
            generation: 0,
        }
    }

    /// Starts a new listing, superseding any request still in flight.
    pub fn reset(&mut self, search: Option<String>) -> FeedRequest {
        self.generation += 1;
        self.search = search.filter(|term| !term.trim().is_empty());
        self.pages.clear();

        debug!(
            generation = self.generation,
            search = ?self.search,
            "Product feed reset"
        );

        self.request_at(0)
    }

    /// The request for the page after the last one loaded.
    pub fn next_request(&self) -> Option<FeedRequest> {
        next_page_skip(&self.pages).map(|skip| self.request_at(skip))
    }

    /// Appends a fetched page. Returns `false` when the page was discarded.
    pub fn apply(&mut self, request: &FeedRequest, page: ProductPage) -> bool {
        if request.generation != self.generation {
            debug!(
                stale = request.generation,
                current = self.generation,
                "Discarding page from superseded search"
            );
            return false;
        }

        if request.query.page.skip != self.loaded_count() {
            debug!(
                skip = request.query.page.skip,
                loaded = self.loaded_count(),
                "Discarding out-of-order page"
            );
            return false;
        }

        self.pages.push(page);
        true
    }

    fn request_at(&self, skip: u64) -> FeedRequest {
        FeedRequest {
            generation: self.generation,
            query: ProductQuery::new(PageRequest::new(skip, self.page_size), self.search.clone()),
        }
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.pages.iter().flat_map(|page| page.products.iter())
    }

    pub fn loaded_count(&self) -> u64 {
        self.pages.iter().map(|page| page.len() as u64).sum()
    }

    /// Size of the whole listing as last reported by the catalog.
    pub fn total(&self) -> u64 {
        self.pages.last().map_or(0, |page| page.total)
    }

    pub fn has_more(&self) -> bool {
        next_page_skip(&self.pages).is_some()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Money;

    fn page(ids: std::ops::Range<u64>, total: u64) -> ProductPage {
        ProductPage {
            products: ids
                .map(|id| Product::new(id, format!("Product {id}"), Money::from_cents(100)))
                .collect(),
            total,
        }
    }

    #[test]
    fn test_next_skip_counts_loaded_products() {
        assert_eq!(next_page_skip(&[]), None);

        let pages = vec![page(0..20, 45)];
        assert_eq!(next_page_skip(&pages), Some(20));

        let pages = vec![page(0..20, 45), page(20..40, 45)];
        assert_eq!(next_page_skip(&pages), Some(40));
    }

    #[test]
    fn test_next_skip_stops_at_total() {
        let pages = vec![page(0..20, 45), page(20..40, 45), page(40..45, 45)];
        assert_eq!(next_page_skip(&pages), None);

        let pages = vec![page(0..20, 20)];
        assert_eq!(next_page_skip(&pages), None);
    }

    #[test]
    fn test_next_skip_stops_on_empty_page() {
        let pages = vec![page(0..20, 100), page(20..20, 100)];
        assert_eq!(next_page_skip(&pages), None);
    }

    #[test]
    fn test_feed_accumulates_pages() {
        let mut feed = ProductFeed::new(20);
        let first = feed.reset(None);
        assert_eq!(first.query.page, PageRequest::new(0, 20));

        assert!(feed.apply(&first, page(0..20, 30)));
        let second = feed.next_request().unwrap();
        assert_eq!(second.query.page.skip, 20);

        assert!(feed.apply(&second, page(20..30, 30)));
        assert_eq!(feed.loaded_count(), 30);
        assert_eq!(feed.total(), 30);
        assert!(!feed.has_more());
        assert!(feed.next_request().is_none());
        assert_eq!(feed.products().count(), 30);
    }

    #[test]
    fn test_superseded_page_is_discarded() {
        let mut feed = ProductFeed::new(20);
        let old = feed.reset(Some("phone".to_string()));
        let current = feed.reset(Some("laptop".to_string()));

        assert!(!feed.apply(&old, page(0..5, 5)));
        assert_eq!(feed.loaded_count(), 0);

        assert!(feed.apply(&current, page(10..12, 2)));
        assert_eq!(feed.search(), Some("laptop"));
        assert_eq!(current.query.search_term(), Some("laptop"));
    }

    #[test]
    fn test_duplicate_load_more_is_discarded() {
        let mut feed = ProductFeed::new(20);
        let first = feed.reset(None);
        feed.apply(&first, page(0..20, 60));

        let next = feed.next_request().unwrap();
        let again = feed.next_request().unwrap();
        assert!(feed.apply(&next, page(20..40, 60)));
        assert!(!feed.apply(&again, page(20..40, 60)));
        assert_eq!(feed.loaded_count(), 40);
    }

    #[test]
    fn test_blank_search_resets_to_plain_listing() {
        let mut feed = ProductFeed::new(20);
        let request = feed.reset(Some("  ".to_string()));
        assert_eq!(feed.search(), None);
        assert_eq!(request.query.search, None);
    }
}
