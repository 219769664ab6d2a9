//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&Database` as the first argument and acquire the shared handle
//! per call.

pub mod movie_repo;

pub use movie_repo::MovieRepo;
