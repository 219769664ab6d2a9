use catalog_core::movie::DUPLICATE_MOVIE_MESSAGE;

/// Errors produced by [`crate::Database`] and the catalog repository.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The connection to the store could not be established. A later call
    /// attempts the connection again.
    #[error("Failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    /// A movie with the same title and director is already persisted.
    #[error("{}", DUPLICATE_MOVIE_MESSAGE)]
    DuplicateMovie,

    /// Any other failure talking to the store, passed through untouched.
    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),
}
