//! Lazily-established, process-wide database handle.
//!
//! A [`Database`] is built once at startup and shared through application
//! state. Nothing touches the network until the first [`Database::acquire`];
//! from then on every caller gets the same [`PgPool`] until
//! [`Database::release`] closes it.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tokio::sync::Mutex;

use crate::config::DbConfig;
use crate::error::CatalogError;

/// Owner of the shared connection handle.
pub struct Database {
    connect_options: PgConnectOptions,
    pool_options: PgPoolOptions,
    /// `None` until the first successful connect, and again after release.
    pool: Mutex<Option<PgPool>>,
}

impl Database {
    /// Build an unconnected manager from configuration.
    ///
    /// Fails only when the configured `DATABASE_URL` cannot be parsed; no
    /// connection is attempted here.
    pub fn new(config: &DbConfig) -> Result<Self, sqlx::Error> {
        let connect_options = config.connect_options()?;
        let pool_options = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout());

        Ok(Self {
            connect_options,
            pool_options,
            pool: Mutex::new(None),
        })
    }

    /// Wrap a pool that is already connected.
    ///
    /// After [`Database::release`] the manager reconnects with the pool's own
    /// connect options.
    pub fn from_pool(pool: PgPool) -> Self {
        let connect_options = (*pool.connect_options()).clone();
        let pool_options = pool.options().clone();

        Self {
            connect_options,
            pool_options,
            pool: Mutex::new(Some(pool)),
        }
    }

    /// Return the shared handle, connecting on first use.
    ///
    /// Concurrent first callers wait on the same lock, so at most one
    /// connect attempt is in flight. A failed attempt leaves the manager
    /// unconnected.
    pub async fn acquire(&self) -> Result<PgPool, CatalogError> {
        let mut guard = self.pool.lock().await;
        if let Some(pool) = guard.as_ref() {
            return Ok(pool.clone());
        }

        tracing::debug!(
            host = self.connect_options.get_host(),
            port = self.connect_options.get_port(),
            "Connecting to database"
        );

        let pool = self
            .pool_options
            .clone()
            .connect_with(self.connect_options.clone())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Database connection failed");
                CatalogError::Connection(e)
            })?;

        tracing::info!("Database connection established");
        *guard = Some(pool.clone());
        Ok(pool)
    }

    /// Close the handle if one exists. Safe to call when not connected.
    pub async fn release(&self) {
        let pool = self.pool.lock().await.take();
        if let Some(pool) = pool {
            pool.close().await;
            tracing::info!("Database connection closed");
        }
    }

    /// Whether a handle is currently held.
    pub async fn is_connected(&self) -> bool {
        self.pool.lock().await.is_some()
    }
}
