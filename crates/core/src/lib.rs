//! Domain types and rules shared by the catalog database and API crates.
//!
//! Nothing in here touches the database or HTTP; it is plain data plus
//! the validation rules applied before a request reaches the repository.

pub mod error;
pub mod movie;
pub mod search;
pub mod types;
