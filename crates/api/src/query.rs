//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /movies/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to look for in titles and descriptions.
    pub q: Option<String>,
}
