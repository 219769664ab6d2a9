//! Handlers for the `/movies` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog_core::movie::validate_new_movie;
use catalog_db::models::movie::{Movie, NewMovie};
use catalog_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::state::AppState;

/// POST /movies
pub async fn add(
    State(state): State<AppState>,
    Json(input): Json<NewMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    validate_new_movie(&input.title, &input.director)?;
    let movie = MovieRepo::add(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.db).await?;
    Ok(Json(movies))
}

/// GET /movies/search?q=
///
/// Rejects a missing or empty `q` before touching the database.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let q = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing query parameter `q`".into()))?;

    let movies = MovieRepo::search(&state.db, &q).await?;
    tracing::debug!(query = %q, matches = movies.len(), "Movie search");
    Ok(Json(movies))
}
