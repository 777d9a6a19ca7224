//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use vetrina_sdk::ContentBlockRegistry;

use crate::config::Config;
use crate::db;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// PostgreSQL connection pool.
    db: PgPool,

    /// Content block registry.
    ///
    /// Frozen after startup: all registration happens in [`AppState::new`]
    /// before the registry is shared, so handlers only ever read it.
    blocks: Arc<ContentBlockRegistry>,
}

impl AppState {
    /// Create new application state.
    ///
    /// Connects to PostgreSQL and verifies connectivity, then registers
    /// plugin content blocks. Registration is deliberately sequenced after
    /// the connectivity check succeeds.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = db::create_pool(config)
            .await
            .context("failed to create database pool")?;

        db::verify_connectivity(&db)
            .await
            .context("database connectivity check failed at startup")?;

        info!("database connected");

        let mut blocks = ContentBlockRegistry::new();
        image_slider::register(&mut blocks);

        info!(blocks = blocks.len(), "content blocks registered");

        Ok(Self::from_parts(db, Arc::new(blocks)))
    }

    /// Build state from preconstructed parts.
    ///
    /// Used by integration tests that stub the database with a lazily
    /// connecting pool.
    pub fn from_parts(db: PgPool, blocks: Arc<ContentBlockRegistry>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { db, blocks }),
        }
    }

    /// Get the database pool.
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get the content block registry.
    pub fn blocks(&self) -> &ContentBlockRegistry {
        &self.inner.blocks
    }

    /// Check if PostgreSQL is healthy.
    pub async fn postgres_healthy(&self) -> bool {
        db::check_health(&self.inner.db).await
    }
}
