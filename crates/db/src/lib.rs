//! Postgres persistence gateway for the spy cat agency.
//!
//! Exposes the pool helpers, the entity models, the named store traits,
//! and their Postgres-backed repositories. All reads exclude soft-deleted
//! rows; no operation in this crate issues a physical row delete.

pub mod models;
pub mod repositories;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Transaction handle threaded through the mission create pipeline.
pub type PgTransaction = sqlx::Transaction<'static, sqlx::Postgres>;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations` at the workspace root.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
