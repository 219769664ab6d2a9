//! Database layer for the movie catalog.
//!
//! [`Database`] owns the lazily-established connection handle;
//! [`repositories::MovieRepo`] runs the catalog queries through it.

pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use config::DbConfig;
pub use connection::Database;
pub use error::CatalogError;

pub type DbPool = sqlx::PgPool;

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Apply migrations if the database can be reached right now.
///
/// Returns `Ok(false)` without failing when the connection cannot be
/// established, leaving `db` unconnected so the first request connects
/// lazily. Migration errors on a reachable database are returned.
pub async fn migrate_if_reachable(db: &Database) -> Result<bool, sqlx::migrate::MigrateError> {
    let pool = match db.acquire().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable at startup, skipping migrations");
            return Ok(false);
        }
    };
    run_migrations(&pool).await?;
    Ok(true)
}
