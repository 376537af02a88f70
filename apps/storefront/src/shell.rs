//! # Interactive Shell
//!
//! A line-oriented front end over the commands. Each line is parsed into a
//! [`ShellCommand`], executed against the context, and rendered as text.
//!
//! ```text
//! > search phone          ← list_products(Some("phone"))
//! > more                  ← load_more()
//! > add 3                 ← add_to_cart(3)
//! > cart                  ← get_cart()
//! > checkout              ← checkout()
//! > theme dark            ← set_theme("dark")
//! > quit
//! ```

use std::fmt::Write as _;
use std::str::FromStr;
use std::sync::Arc;

use storefront_catalog::{CatalogClient, ProductPage};
use storefront_core::{CheckoutReceipt, Product, ProductId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::commands::cart::{self, CartResponse};
use crate::commands::catalog::{self, ProductDetail, ProductListResponse};
use crate::commands::favorites::{self, FavoritesResponse};
use crate::commands::theme::{self, ThemeResponse};
use crate::error::ApiError;
use crate::state::AppContext;

pub const HELP: &str = "\
Browse
  products              list all products
  search <text>         search products
  more                  load the next page
  show <id>             product details
  categories            list categories
  category <slug>       products in a category
Cart
  add <id>              add one to the cart
  inc <id> / dec <id>   change quantity
  rm <id>               remove from the cart
  cart                  show the cart
  clear                 empty the cart
  checkout              place the order
Favorites
  fav <id>              toggle favorite
  unfav <id>            remove favorite
  favs                  list favorites
  clearfavs             remove all favorites
Settings
  theme [light|dark]    toggle or set the theme
  help                  this text
  quit                  exit";

// =============================================================================
// Parsing
// =============================================================================

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Products,
    Search(String),
    More,
    Show(ProductId),
    Categories,
    Category(String),
    Add(ProductId),
    Inc(ProductId),
    Dec(ProductId),
    Rm(ProductId),
    Cart,
    Clear,
    Checkout,
    Fav(ProductId),
    Unfav(ProductId),
    Favs,
    ClearFavs,
    Theme(Option<String>),
    Help,
    Quit,
}

fn parse_id(name: &str, arg: &str) -> Result<ProductId, ApiError> {
    if arg.is_empty() {
        return Err(ApiError::validation(format!("Usage: {name} <id>")));
    }
    arg.parse()
        .map_err(|_| ApiError::validation(format!("Invalid product id: '{arg}'")))
}

fn required(name: &str, placeholder: &str, arg: &str) -> Result<String, ApiError> {
    if arg.is_empty() {
        return Err(ApiError::validation(format!("Usage: {name} <{placeholder}>")));
    }
    Ok(arg.to_string())
}

impl FromStr for ShellCommand {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "products" | "ls" => ShellCommand::Products,
            "search" => ShellCommand::Search(required(name, "text", arg)?),
            "more" => ShellCommand::More,
            "show" => ShellCommand::Show(parse_id(name, arg)?),
            "categories" => ShellCommand::Categories,
            "category" => ShellCommand::Category(required(name, "slug", arg)?),
            "add" => ShellCommand::Add(parse_id(name, arg)?),
            "inc" => ShellCommand::Inc(parse_id(name, arg)?),
            "dec" => ShellCommand::Dec(parse_id(name, arg)?),
            "rm" => ShellCommand::Rm(parse_id(name, arg)?),
            "cart" => ShellCommand::Cart,
            "clear" => ShellCommand::Clear,
            "checkout" => ShellCommand::Checkout,
            "fav" => ShellCommand::Fav(parse_id(name, arg)?),
            "unfav" => ShellCommand::Unfav(parse_id(name, arg)?),
            "favs" => ShellCommand::Favs,
            "clearfavs" => ShellCommand::ClearFavs,
            "theme" => ShellCommand::Theme((!arg.is_empty()).then(|| arg.to_string())),
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            _ => {
                return Err(ApiError::validation(format!(
                    "Unknown command: '{name}'. Type 'help' for a list."
                )))
            }
        };

        Ok(command)
    }
}

// =============================================================================
// Shell
// =============================================================================

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Quit,
}

pub struct Shell {
    ctx: AppContext,
    catalog: Arc<dyn CatalogClient>,
}

impl Shell {
    pub fn new(ctx: AppContext, catalog: Arc<dyn CatalogClient>) -> Self {
        Shell { ctx, catalog }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Runs one command and renders its result.
    pub async fn execute(&mut self, command: ShellCommand) -> Result<Outcome, ApiError> {
        debug!(?command, "Shell command");

        let ctx = &mut self.ctx;
        let client = self.catalog.as_ref();

        let text = match command {
            ShellCommand::Products => {
                render_listing(&catalog::list_products(ctx, client, None).await?)
            }
            ShellCommand::Search(term) => {
                render_listing(&catalog::list_products(ctx, client, Some(term)).await?)
            }
            ShellCommand::More => render_listing(&catalog::load_more(ctx, client).await?),
            ShellCommand::Show(id) => render_detail(&catalog::get_product(ctx, client, id).await?),
            ShellCommand::Categories => catalog::list_categories(client).await?.join("\n"),
            ShellCommand::Category(slug) => {
                render_page(&catalog::products_by_category(ctx, client, &slug).await?)
            }
            ShellCommand::Add(id) => render_cart(&cart::add_to_cart(ctx, client, id).await?),
            ShellCommand::Inc(id) => render_cart(&cart::increase_quantity(ctx, id)),
            ShellCommand::Dec(id) => render_cart(&cart::decrease_quantity(ctx, id)),
            ShellCommand::Rm(id) => render_cart(&cart::remove_from_cart(ctx, id)),
            ShellCommand::Cart => render_cart(&cart::get_cart(ctx)),
            ShellCommand::Clear => render_cart(&cart::clear_cart(ctx)),
            ShellCommand::Checkout => match cart::checkout(ctx) {
                Some(receipt) => render_receipt(&receipt),
                None => "Your cart is empty".to_string(),
            },
            ShellCommand::Fav(id) => {
                let toggled = favorites::toggle_favorite(ctx, client, id).await?;
                let verb = if toggled.is_favorite { "Added" } else { "Removed" };
                format!("{verb} favorite {id}\n{}", render_favorites(&toggled.favorites))
            }
            ShellCommand::Unfav(id) => render_favorites(&favorites::remove_favorite(ctx, id)),
            ShellCommand::Favs => render_favorites(&favorites::get_favorites(ctx)),
            ShellCommand::ClearFavs => render_favorites(&favorites::clear_favorites(ctx)),
            ShellCommand::Theme(None) => render_theme(theme::toggle_theme(ctx)),
            ShellCommand::Theme(Some(mode)) => render_theme(theme::set_theme(ctx, &mode)?),
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Print(text))
    }

    /// Reads commands until `quit` or end of input, then waits for pending
    /// theme writes so nothing is lost when the runtime stops.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let result = self.read_loop(input, &mut output).await;
        self.ctx.theme.flush().await;
        info!("Shell closed");
        result
    }

    async fn read_loop<R, W>(&mut self, input: R, output: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        output
            .write_all(b"Storefront ready. Type 'help' for commands.\n")
            .await?;

        loop {
            output.write_all(b"> ").await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let result = match line.parse::<ShellCommand>() {
                Ok(command) => self.execute(command).await,
                Err(e) => Err(e),
            };

            match result {
                Ok(Outcome::Print(text)) => {
                    output.write_all(text.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                }
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    output
                        .write_all(format!("Error: {}\n", e.message).as_bytes())
                        .await?;
                }
            }
        }

        output.flush().await
    }
}

// =============================================================================
// Rendering
// =============================================================================

fn product_line(out: &mut String, product: &Product) {
    let _ = write!(out, "#{:<4} {}  {}", product.id, product.title, product.price);
    if product.has_discount() {
        let _ = write!(
            out,
            " (was {}, -{}%)",
            product.original_price(),
            product.discount_badge()
        );
    }
    if !product.is_in_stock() {
        out.push_str("  [out of stock]");
    }
    out.push('\n');
}

fn render_listing(list: &ProductListResponse) -> String {
    let mut out = String::new();
    if let Some(term) = &list.search {
        let _ = writeln!(out, "Results for \"{term}\":");
    }
    for product in &list.products {
        product_line(&mut out, product);
    }
    let _ = write!(out, "Showing {} of {}", list.loaded, list.total);
    if list.has_more {
        out.push_str(" (type 'more' for the next page)");
    }
    out
}

fn render_page(page: &ProductPage) -> String {
    let mut out = String::new();
    for product in &page.products {
        product_line(&mut out, product);
    }
    let _ = write!(out, "Showing {} of {}", page.len(), page.total);
    out
}

fn render_detail(detail: &ProductDetail) -> String {
    let product = &detail.product;
    let mut out = String::new();

    let _ = writeln!(out, "{} (#{})", product.title, product.id);
    if let Some(brand) = &product.brand {
        let _ = writeln!(out, "Brand: {brand}");
    }
    let _ = writeln!(out, "Category: {}", product.category);
    let _ = write!(out, "Price: {}", product.price);
    if detail.discount_badge > 0 {
        let _ = write!(
            out,
            " (was {}, -{}%)",
            detail.original_price, detail.discount_badge
        );
    }
    out.push('\n');
    let _ = writeln!(out, "Rating: {:.1}/5", product.rating);
    if detail.in_stock {
        let _ = writeln!(out, "In stock: {}", product.stock);
    } else {
        out.push_str("Out of stock\n");
    }
    if !product.description.is_empty() {
        let _ = writeln!(out, "{}", product.description);
    }
    let _ = write!(
        out,
        "In cart: {}  Favorite: {}",
        detail.in_cart,
        if detail.is_favorite { "yes" } else { "no" }
    );
    out
}

fn render_cart(cart: &CartResponse) -> String {
    if cart.items.is_empty() {
        return "Your cart is empty".to_string();
    }

    let mut out = String::new();
    for item in &cart.items {
        let _ = writeln!(
            out,
            "#{:<4} {}  {} each x{} = {}",
            item.id(),
            item.product.title,
            item.unit_price(),
            item.quantity,
            item.line_total()
        );
    }
    let _ = write!(
        out,
        "Items: {}  Subtotal: {}  Shipping: Free  Total: {}",
        cart.totals.item_count, cart.totals.subtotal, cart.totals.subtotal
    );
    out
}

fn render_receipt(receipt: &CheckoutReceipt) -> String {
    format!(
        "Thank you for your purchase!\nOrder {}: {} items, total {}",
        receipt.confirmation_id, receipt.item_count, receipt.subtotal
    )
}

fn render_favorites(favorites: &FavoritesResponse) -> String {
    if favorites.items.is_empty() {
        return "No favorites yet".to_string();
    }

    let mut out = String::new();
    for product in &favorites.items {
        product_line(&mut out, product);
    }
    let _ = write!(out, "{} favorite(s)", favorites.count);
    out
}

fn render_theme(theme: ThemeResponse) -> String {
    format!("Theme: {}", theme.mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("products".parse::<ShellCommand>().unwrap(), ShellCommand::Products);
        assert_eq!(
            "search  red lipstick ".parse::<ShellCommand>().unwrap(),
            ShellCommand::Search("red lipstick".into())
        );
        assert_eq!("ADD 7".parse::<ShellCommand>().unwrap(), ShellCommand::Add(7));
        assert_eq!("theme".parse::<ShellCommand>().unwrap(), ShellCommand::Theme(None));
        assert_eq!(
            "theme dark".parse::<ShellCommand>().unwrap(),
            ShellCommand::Theme(Some("dark".into()))
        );
        assert_eq!("exit".parse::<ShellCommand>().unwrap(), ShellCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        let err = "add".parse::<ShellCommand>().unwrap_err();
        assert_eq!(err.message, "Usage: add <id>");

        let err = "rm abc".parse::<ShellCommand>().unwrap_err();
        assert_eq!(err.message, "Invalid product id: 'abc'");

        let err = "search".parse::<ShellCommand>().unwrap_err();
        assert_eq!(err.message, "Usage: search <text>");

        assert!("dance".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn test_render_empty_cart() {
        let cart = CartResponse::from(&storefront_core::Cart::new());
        assert_eq!(render_cart(&cart), "Your cart is empty");
    }
}
