pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// ```text
/// /movies            list (GET), add (POST)
/// /movies/search     search (GET, ?q=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(movies::router())
}
