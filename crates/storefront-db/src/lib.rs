//! # storefront-db: Local Persistence for the Storefront Client
//!
//! This crate owns everything the client writes to disk. Today that is a
//! single key-value table of preferences (the theme mode), stored in SQLite
//! through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  ThemeController (app) ── toggle / set ──► spawned write task          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  storefront-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐   ┌─────────────┐  │   │
//! │  │   │   Database    │    │  KeyValueStore   │   │ Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│  PreferenceRepo  │   │ (embedded)  │  │   │
//! │  │   │  SqlitePool   │    │  MemoryStore     │   │ 001_prefs   │  │   │
//! │  │   └───────────────┘    └──────────────────┘   └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storefront.db (platform data directory)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`store`] - The `KeyValueStore` collaborator trait and an in-memory store
//! - [`repository`] - SQLite-backed repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_db::{Database, DbConfig, KeyValueStore};
//!
//! let db = Database::new(DbConfig::new("storefront.db")).await?;
//! let prefs = db.preferences();
//! prefs.set("theme", "dark").await?;
//! assert_eq!(prefs.get("theme").await?.as_deref(), Some("dark"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::preference::PreferenceRepository;
pub use store::{KeyValueStore, MemoryStore};
