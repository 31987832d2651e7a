//! Persistence layer: PostgreSQL via sqlx.
//!
//! `models` holds the row structs and DTOs, `repositories` the zero-sized
//! structs with async CRUD methods taking `&PgPool`. One shared pool is
//! created at startup and injected into every component; nothing in this
//! crate constructs its own connections.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Alias so callers do not need a direct sqlx dependency for the pool type.
pub type DbPool = PgPool;

/// Maximum connections in the shared pool.
const MAX_CONNECTIONS: u32 = 10;

/// Create the shared connection pool.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
