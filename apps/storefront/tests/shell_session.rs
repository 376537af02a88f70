//! Scripted shell sessions against an in-process catalog.

use std::sync::Arc;

use async_trait::async_trait;
use storefront_app::shell::{Outcome, Shell, ShellCommand};
use storefront_app::state::{AppContext, ThemeController};
use storefront_catalog::{
    CatalogClient, FetchError, FetchResult, PageRequest, ProductPage, ProductQuery,
};
use storefront_core::{Money, Product, ProductId, ThemeMode};
use storefront_db::MemoryStore;

struct FixedCatalog {
    products: Vec<Product>,
}

impl FixedCatalog {
    fn new() -> Self {
        let mut phone = Product::new(1, "Phone", Money::from_cents(1000));
        phone.stock = 3;
        phone.discount_percentage = 20.0;

        let mut case = Product::new(2, "Phone Case", Money::from_cents(550));
        case.stock = 10;

        let lamp = Product::new(3, "Lamp", Money::from_cents(2500));

        FixedCatalog {
            products: vec![phone, case, lamp],
        }
    }
}

#[async_trait]
impl CatalogClient for FixedCatalog {
    async fn fetch_products(&self, query: &ProductQuery) -> FetchResult<ProductPage> {
        let matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| query.search_term().map_or(true, |t| p.title.contains(t)))
            .cloned()
            .collect();
        let total = matches.len() as u64;

        Ok(ProductPage {
            products: matches
                .into_iter()
                .skip(query.page.skip as usize)
                .take(query.page.limit as usize)
                .collect(),
            total,
        })
    }

    async fn fetch_product_by_id(&self, id: ProductId) -> FetchResult<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| FetchError::failed("product", "404 Not Found"))
    }

    async fn fetch_products_by_category(
        &self,
        category: &str,
        _page: PageRequest,
    ) -> FetchResult<ProductPage> {
        Err(FetchError::failed("products by category", format!("unknown category {category}")))
    }

    async fn fetch_categories(&self) -> FetchResult<Vec<String>> {
        Ok(vec!["smartphones".into(), "lighting".into()])
    }
}

fn shell(page_size: u32) -> Shell {
    let theme = ThemeController::new(Arc::new(MemoryStore::new()));
    Shell::new(
        AppContext::new(theme, page_size),
        Arc::new(FixedCatalog::new()),
    )
}

async fn session(shell: &mut Shell, script: &str) -> String {
    let mut output = Vec::new();
    shell.run(script.as_bytes(), &mut output).await.unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn test_browse_add_and_checkout() {
    let mut shell = shell(2);

    let out = session(
        &mut shell,
        "products\nmore\nadd 1\nadd 1\nadd 2\ncart\ncheckout\ncart\nquit\n",
    )
    .await;

    assert!(out.contains("Showing 2 of 3 (type 'more' for the next page)"));
    assert!(out.contains("Showing 3 of 3"));
    assert!(out.contains("Items: 3  Subtotal: €25.50  Shipping: Free  Total: €25.50"));
    assert!(out.contains("Thank you for your purchase!"));
    assert!(out.contains("Order "));
    assert!(out.ends_with("Your cart is empty\n> "));
    assert!(shell.context().cart.is_empty());
}

#[tokio::test]
async fn test_errors_do_not_end_the_session() {
    let mut shell = shell(20);

    let out = session(&mut shell, "dance\nshow 99\nadd\ncategory x\nadd 3\n").await;

    assert!(out.contains("Error: Unknown command: 'dance'"));
    assert!(out.contains("Error: Failed to fetch product: 404 Not Found"));
    assert!(out.contains("Error: Usage: add <id>"));
    assert!(out.contains("Error: Failed to fetch products by category: unknown category x"));
    // End of input closes the session after the last command ran
    assert_eq!(shell.context().cart.quantity_of(3), 1);
}

#[tokio::test]
async fn test_search_and_detail() {
    let mut shell = shell(20);

    let out = session(&mut shell, "search lamp\ncategories\n").await;
    assert!(out.contains("Results for \"lamp\":\nShowing 0 of 0"));
    assert!(out.contains("smartphones\nlighting"));

    let out = session(&mut shell, "search Phone\nshow 1\n").await;
    assert!(out.contains("Results for \"Phone\":"));
    assert!(out.contains("Showing 2 of 2"));
    assert!(out.contains("Price: €10.00 (was €12.50, -20%)"));
    assert!(out.contains("In cart: 0  Favorite: no"));
}

#[tokio::test]
async fn test_favorites_and_theme() {
    let mut shell = shell(20);

    let out = shell.execute(ShellCommand::Fav(2)).await.unwrap();
    assert!(matches!(out, Outcome::Print(text) if text.starts_with("Added favorite 2")));

    let out = shell.execute(ShellCommand::Fav(2)).await.unwrap();
    assert!(matches!(out, Outcome::Print(text) if text.starts_with("Removed favorite 2")));
    assert!(shell.context().favorites.is_empty());

    shell.execute(ShellCommand::Theme(None)).await.unwrap();
    assert_eq!(shell.context().theme.current(), ThemeMode::Dark);

    let err = shell
        .execute(ShellCommand::Theme(Some("neon".into())))
        .await
        .unwrap_err();
    assert!(err.message.contains("neon"));
    assert_eq!(shell.context().theme.current(), ThemeMode::Dark);

    assert_eq!(shell.execute(ShellCommand::Quit).await.unwrap(), Outcome::Quit);
}
