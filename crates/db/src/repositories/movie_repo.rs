//! Repository for the `movies` table.

use catalog_core::search::{contains_pattern, LIKE_ESCAPE};

use crate::connection::Database;
use crate::error::CatalogError;
use crate::models::movie::{Movie, NewMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, director, genres, release_year, description";

/// Unique index that enforces one row per `(title, director)`.
const UNIQUE_TITLE_DIRECTOR: &str = "uq_movies_title_director";

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Provides the catalog operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// List every movie ordered by title.
    pub async fn list(db: &Database) -> Result<Vec<Movie>, CatalogError> {
        let pool = db.acquire().await?;
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY title ASC");
        let movies = sqlx::query_as::<_, Movie>(&query).fetch_all(&pool).await?;
        Ok(movies)
    }

    /// Insert a movie, returning the created row.
    ///
    /// Fails with [`CatalogError::DuplicateMovie`] when a movie with the same
    /// title and director already exists. The check is the unique index
    /// itself, so concurrent adds of the same pair cannot both succeed.
    pub async fn add(db: &Database, input: &NewMovie) -> Result<Movie, CatalogError> {
        let pool = db.acquire().await?;
        let query = format!(
            "INSERT INTO movies (title, director, genres, release_year, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.director)
            .bind(&input.genres)
            .bind(input.release_year)
            .bind(&input.description)
            .fetch_one(&pool)
            .await
            .map_err(classify_insert_error)?;

        tracing::info!(movie_id = movie.id, title = %movie.title, "Movie added");
        Ok(movie)
    }

    /// Case-insensitive substring search over title and description,
    /// ordered by title.
    ///
    /// A movie without a description can still match on its title. An empty
    /// query matches nothing.
    pub async fn search(db: &Database, query: &str) -> Result<Vec<Movie>, CatalogError> {
        let Some(pattern) = contains_pattern(query) else {
            return Ok(Vec::new());
        };

        let pool = db.acquire().await?;
        let sql = format!(
            "SELECT {COLUMNS} FROM movies
             WHERE title ILIKE $1 ESCAPE '{LIKE_ESCAPE}'
                OR description ILIKE $1 ESCAPE '{LIKE_ESCAPE}'
             ORDER BY title ASC"
        );
        let movies = sqlx::query_as::<_, Movie>(&sql)
            .bind(&pattern)
            .fetch_all(&pool)
            .await?;
        Ok(movies)
    }
}

/// Map a unique violation on `(title, director)` to
/// [`CatalogError::DuplicateMovie`]; pass everything else through.
fn classify_insert_error(err: sqlx::Error) -> CatalogError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
            && db_err.constraint() == Some(UNIQUE_TITLE_DIRECTOR)
        {
            tracing::debug!("Rejected duplicate movie");
            return CatalogError::DuplicateMovie;
        }
    }
    CatalogError::Store(err)
}
