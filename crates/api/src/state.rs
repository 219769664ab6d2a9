use std::sync::Arc;

use catalog_db::Database;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Lazily-connected database handle, released on shutdown.
    pub db: Arc<Database>,
}
