//! # Theme Controller
//!
//! Pairs the in-memory [`ThemePreference`] with the store it is persisted
//! to.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  toggle() / set(mode)                                                   │
//! │       │                                                                 │
//! │       ├── 1. preference mutated (synchronous, visible immediately)     │
//! │       │                                                                 │
//! │       └── 2. writes.spawn(store.set("theme", mode))  → PendingWrite    │
//! │                    │                                                    │
//! │                    ├── Ok   → debug!                                    │
//! │                    └── Err  → warn!, in-memory mode kept, no retry     │
//! │                                                                         │
//! │  flush() ── awaits every write still in flight (shutdown)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes are fire-and-forget: callers may await the returned
//! [`PendingWrite`] or drop it. Two quick toggles issue two independent
//! writes whose completion order is not guaranteed. The controller keeps
//! the tasks in a `JoinSet`, so a runtime shutdown after [`flush`] cannot
//! cancel a write.
//!
//! [`flush`]: ThemeController::flush

use std::sync::Arc;

use storefront_core::{ThemeMode, ThemePreference, THEME_STORAGE_KEY};
use storefront_db::KeyValueStore;
use tokio::sync::oneshot;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Resolves once the write it was issued for has finished, successfully or
/// not. Dropping it leaves the write running.
pub type PendingWrite = oneshot::Receiver<()>;

/// Theme state plus its persistence collaborator.
pub struct ThemeController {
    preference: ThemePreference,
    store: Arc<dyn KeyValueStore>,
    writes: JoinSet<()>,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.preference.current())
            .field("pending_writes", &self.writes.len())
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// A controller at the default mode, without reading the store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        ThemeController {
            preference: ThemePreference::new(),
            store,
            writes: JoinSet::new(),
        }
    }

    /// Startup load: applies the persisted mode if it is recognized.
    ///
    /// A missing key, an unknown value or a read failure leaves `light`.
    pub async fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let mut controller = Self::new(store);

        let persisted = match controller.store.get(THEME_STORAGE_KEY).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Failed to read persisted theme, using default");
                None
            }
        };

        if controller.preference.restore(persisted.as_deref()) {
            info!(mode = %controller.current(), "Restored theme");
        } else if let Some(value) = persisted {
            warn!(value = %value, "Ignoring unrecognized persisted theme");
        }

        controller
    }

    pub fn current(&self) -> ThemeMode {
        self.preference.current()
    }

    /// Flips the mode, then persists it in the background.
    pub fn toggle(&mut self) -> PendingWrite {
        let mode = self.preference.toggle();
        self.persist(mode)
    }

    /// Assigns the mode, then persists it in the background.
    pub fn set(&mut self, mode: ThemeMode) -> PendingWrite {
        self.preference.set(mode);
        self.persist(mode)
    }

    /// Number of writes spawned and not yet reaped.
    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    /// Waits for every write still in flight. Call before the runtime
    /// shuts down.
    pub async fn flush(&mut self) {
        if !self.writes.is_empty() {
            debug!(pending = self.writes.len(), "Flushing theme writes");
        }

        while let Some(result) = self.writes.join_next().await {
            if let Err(e) = result {
                warn!(error = %e, "Theme write task did not complete");
            }
        }
    }

    fn persist(&mut self, mode: ThemeMode) -> PendingWrite {
        // Reap finished writes so the set only holds in-flight ones
        while self.writes.try_join_next().is_some() {}

        let store = Arc::clone(&self.store);
        let (done, pending) = oneshot::channel();

        self.writes.spawn(async move {
            match store.set(THEME_STORAGE_KEY, mode.as_str()).await {
                Ok(()) => debug!(mode = %mode, "Theme persisted"),
                Err(e) => warn!(mode = %mode, error = %e, "Failed to persist theme"),
            }
            let _ = done.send(());
        });

        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_db::MemoryStore;

    #[tokio::test]
    async fn test_restore_applies_persisted_mode() {
        let store = Arc::new(MemoryStore::with_entry(THEME_STORAGE_KEY, "dark"));
        let theme = ThemeController::restore(store).await;
        assert_eq!(theme.current(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_restore_ignores_unknown_value() {
        let store = Arc::new(MemoryStore::with_entry(THEME_STORAGE_KEY, "sepia"));
        let theme = ThemeController::restore(store).await;
        assert_eq!(theme.current(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_toggle_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut theme = ThemeController::restore(store.clone()).await;
        assert_eq!(theme.current(), ThemeMode::Light);

        theme.toggle().await.unwrap();
        assert_eq!(theme.current(), ThemeMode::Dark);
        assert_eq!(
            store.get(THEME_STORAGE_KEY).await.unwrap().as_deref(),
            Some("dark")
        );

        theme.set(ThemeMode::Light).await.unwrap();
        assert_eq!(
            store.get(THEME_STORAGE_KEY).await.unwrap().as_deref(),
            Some("light")
        );
    }

    #[tokio::test]
    async fn test_mutation_visible_before_write_completes() {
        let store = Arc::new(MemoryStore::new());
        let mut theme = ThemeController::new(store);

        let pending = theme.toggle();
        assert_eq!(theme.current(), ThemeMode::Dark);
        pending.await.unwrap();
    }

    #[tokio::test]
    async fn test_flush_completes_dropped_writes() {
        let store = Arc::new(MemoryStore::new());
        let mut theme = ThemeController::new(store.clone());

        drop(theme.toggle());
        assert_eq!(theme.pending_writes(), 1);

        theme.flush().await;
        assert_eq!(theme.pending_writes(), 0);
        assert_eq!(
            store.get(THEME_STORAGE_KEY).await.unwrap().as_deref(),
            Some("dark")
        );
    }

    #[tokio::test]
    async fn test_finished_writes_are_reaped() {
        let mut theme = ThemeController::new(Arc::new(MemoryStore::new()));

        theme.toggle().await.unwrap();
        theme.toggle().await.unwrap();
        assert!(theme.pending_writes() <= 1);
    }
}
