//! # Repository Module
//!
//! SQLite-backed repositories.
//!
//! ```text
//! ThemeController
//!      │  store.set("theme", "dark")
//!      ▼
//! PreferenceRepository ── upsert ──► preferences table
//! ```
//!
//! ## Available Repositories
//!
//! - [`PreferenceRepository`](preference::PreferenceRepository) - Key-value preferences

pub mod preference;
