//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use socialplan_core::ports::PostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Open the post store and make sure its schema exists.
    ///
    /// Any failure here is fatal: the server never starts degraded.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let posts = Self::open_store(config).await?;

        posts
            .ensure_schema()
            .await
            .context("failed to create the posts schema")?;

        tracing::info!("Application state initialized");
        Ok(Self::new(posts))
    }

    #[cfg(feature = "postgres")]
    async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn PostRepository>> {
        use socialplan_infra::{DatabaseConnections, PostgresPostRepository};

        use crate::config::ConfigError;

        let db_config = config
            .database
            .as_ref()
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let connections = DatabaseConnections::init(db_config)
            .await
            .context("failed to connect to the database")?;

        Ok(Arc::new(PostgresPostRepository::new(connections.main)))
    }

    #[cfg(not(feature = "postgres"))]
    async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn PostRepository>> {
        use socialplan_infra::InMemoryPostRepository;

        if config.database.is_some() {
            tracing::warn!("Database settings ignored: built without the postgres feature");
        }
        tracing::warn!("Posts are kept in memory and lost on restart");

        Ok(Arc::new(InMemoryPostRepository::new()))
    }
}
