//! Movie entity model and DTOs.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `movies` table.
///
/// Serialized with camelCase keys (`releaseYear`) for the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director: String,
    pub genres: Vec<String>,
    pub release_year: i32,
    pub description: Option<String>,
}

/// DTO for adding a movie. The id is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    pub genres: Vec<String>,
    pub release_year: i32,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_movie_reads_camel_case_and_optional_description() {
        let candidate: NewMovie = serde_json::from_value(serde_json::json!({
            "title": "Tenet",
            "director": "Christopher Nolan",
            "genres": ["sci-fi", "thriller"],
            "releaseYear": 2020
        }))
        .unwrap();

        assert_eq!(candidate.release_year, 2020);
        assert_eq!(candidate.genres, vec!["sci-fi", "thriller"]);
        assert!(candidate.description.is_none());
    }

    #[test]
    fn movie_writes_release_year_in_camel_case() {
        let movie = Movie {
            id: 7,
            title: "Inception".into(),
            director: "Christopher Nolan".into(),
            genres: vec![],
            release_year: 2010,
            description: None,
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["releaseYear"], 2010);
        assert!(json.get("release_year").is_none());
        assert!(json["description"].is_null());
    }
}
