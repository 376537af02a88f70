//! # Storefront Application Library
//!
//! Application layer of the storefront client: configuration, the explicit
//! [`AppContext`](state::AppContext), the command functions and the
//! interactive shell that drives them.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── storefront.toml + STOREFRONT_* env
//! ├── state/
//! │   ├── mod.rs      ◄─── AppContext
//! │   └── theme.rs    ◄─── ThemeController (mode + background writes)
//! ├── commands/
//! │   ├── cart.rs     ◄─── Cart commands, checkout
//! │   ├── favorites.rs◄─── Favorites commands
//! │   ├── theme.rs    ◄─── Theme commands
//! │   └── catalog.rs  ◄─── Listing, search, detail, categories
//! ├── shell.rs        ◄─── Line-oriented front end
//! └── error.rs        ◄─── ApiError for commands
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod shell;
pub mod state;

#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::sync::Arc;

use storefront_catalog::DummyJsonClient;
use storefront_db::{Database, DbConfig, KeyValueStore, MemoryStore};
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::ApiError;
use shell::Shell;
use state::{AppContext, ThemeController};

/// Startup options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Explicit config file; the platform default otherwise.
    pub config_path: Option<PathBuf>,

    /// Keep preferences in memory only.
    pub ephemeral: bool,
}

/// Runs the storefront shell on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ─── tracing-subscriber with env filter (stderr)  │
/// │  2. Load Config ────────── defaults → storefront.toml → STOREFRONT_*    │
/// │  3. Open Storage ───────── SQLite prefs (memory store on failure)       │
/// │  4. Restore Theme ──────── persisted "light"/"dark", else light         │
/// │  5. Build Context ──────── empty cart, empty favorites, product feed    │
/// │  6. Run Shell ──────────── until `quit` or end of input                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(options: RunOptions) -> Result<(), ApiError> {
    init_tracing();

    info!("Starting storefront");

    let config = AppConfig::load_or_default(options.config_path);
    info!(catalog = %config.catalog.base_url, "Configuration loaded");

    let store = open_store(&config, options.ephemeral).await;
    let theme = ThemeController::restore(store).await;

    let catalog = DummyJsonClient::new(&config.catalog)?;
    let ctx = AppContext::new(theme, config.catalog.page_size);

    info!("State initialized");

    let mut shell = Shell::new(ctx, Arc::new(catalog));
    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .map_err(|e| ApiError::internal(format!("Terminal I/O failed: {e}")))?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with shell output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: `info,storefront=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,sqlx=warn"));

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Opens the preference store for the theme.
///
/// Storage problems never stop the app: the theme then lives in memory for
/// this session.
pub async fn open_store(config: &AppConfig, ephemeral: bool) -> Arc<dyn KeyValueStore> {
    if ephemeral {
        info!("Ephemeral session, preferences kept in memory");
        return Arc::new(MemoryStore::new());
    }

    match open_database(config).await {
        Ok(db) => Arc::new(db.preferences()),
        Err(e) => {
            warn!(error = %e.message, "Preferences database unavailable, using memory");
            Arc::new(MemoryStore::new())
        }
    }
}

async fn open_database(config: &AppConfig) -> Result<Database, ApiError> {
    let path = config.database_path()?;
    info!(path = %path.display(), "Opening preferences database");
    Ok(Database::new(DbConfig::new(path)).await?)
}
