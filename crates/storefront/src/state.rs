//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use sqlx::SqlitePool;

use greenshelf_core::Basket;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// database pool, configuration, and the process-wide basket.
///
/// The basket is a single instance for the whole process (multi-user
/// isolation is explicitly out of scope); the mutex is the one
/// mutual-exclusion boundary around every basket read-modify-write, so
/// concurrent requests cannot lose updates.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: SqlitePool,
    basket: Mutex<Basket>,
}

impl AppState {
    /// Create a new application state with an empty basket.
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: SqlitePool) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                basket: Mutex::new(Basket::new()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Lock and return the shared basket.
    ///
    /// A poisoned lock is recovered rather than propagated: the basket is
    /// plain data and stays consistent even if a holder panicked.
    pub fn basket(&self) -> MutexGuard<'_, Basket> {
        self.inner
            .basket
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
