//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use blognest_core::ports::LocalStorage;
use blognest_core::services::Latency;
use blognest_core::{PostStore, SessionStore};
use blognest_infra::{FileStorage, InMemoryPostRepository, InMemoryStorage};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostStore>,
    pub session: Arc<SessionStore>,
}

impl AppState {
    /// Build the application state from configuration.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let storage: Arc<dyn LocalStorage> = match &config.storage_path {
            Some(path) => {
                let storage = FileStorage::open(path)
                    .await
                    .with_context(|| format!("open local storage at {}", path.display()))?;
                tracing::info!(path = %path.display(), "Using file-backed local storage");
                Arc::new(storage)
            }
            None => {
                tracing::warn!("STORAGE_PATH not set. Sessions will not survive a restart.");
                Arc::new(InMemoryStorage::new())
            }
        };

        Self::assemble(storage, config.latency).await
    }

    /// Seeded post store plus a session store hydrated from `storage`.
    pub async fn assemble(storage: Arc<dyn LocalStorage>, latency: Latency) -> anyhow::Result<Self> {
        let posts = PostStore::new(Arc::new(InMemoryPostRepository::seeded()));
        let session = SessionStore::new(storage, latency);
        session.hydrate().await.context("restore saved session")?;

        tracing::info!("Application state initialized");

        Ok(Self {
            posts: Arc::new(posts),
            session: Arc::new(session),
        })
    }
}
