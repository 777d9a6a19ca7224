//! Database connection pool management.
//!
//! The registry itself has no database dependency; the pool exists so the
//! surrounding application can gate plugin registration on connectivity
//! and answer health probes.

use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;

/// Create a PostgreSQL connection pool.
pub async fn create_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    Ok(pool)
}

/// Run a connectivity probe against the database.
///
/// Used as a startup gate: plugin registration only happens after this
/// succeeds.
pub async fn verify_connectivity(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .context("database connectivity check failed")?;

    Ok(())
}

/// Check if the database connection is healthy.
pub async fn check_health(pool: &PgPool) -> bool {
    verify_connectivity(pool).await.is_ok()
}
