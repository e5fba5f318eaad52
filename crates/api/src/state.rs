use std::sync::Arc;

use edicfg_core::store::InMemoryStore;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Committed configuration records. Validation holds the read lock for
    /// the whole call; commit holds the write lock across validate + insert.
    pub store: Arc<RwLock<InMemoryStore>>,
}

impl AppState {
    pub fn new(config: ServerConfig, store: InMemoryStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
        }
    }
}
