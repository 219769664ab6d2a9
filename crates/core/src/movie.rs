//! Business rules for movie records.

use crate::error::CoreError;

/// Message returned when a movie with the same title and director exists.
pub const DUPLICATE_MOVIE_MESSAGE: &str = "Movie with this Title from this Director already exists";

/// Validate the required text fields of a movie before it is inserted.
///
/// Title and director must contain at least one non-whitespace character.
/// Genres are not checked; an empty list is accepted.
pub fn validate_new_movie(title: &str, director: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    if director.trim().is_empty() {
        return Err(CoreError::Validation("director must not be empty".into()));
    }
    Ok(())
}
