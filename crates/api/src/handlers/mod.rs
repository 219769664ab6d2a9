//! Request handlers.
//!
//! Handlers delegate to the repositories in `catalog_db` and map errors via
//! [`crate::error::AppError`].

pub mod movies;
