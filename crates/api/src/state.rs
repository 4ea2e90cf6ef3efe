use std::sync::Arc;

use ladle_store::{Catalog, EngagementManager, MemoryStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The backing store for recipes and users.
    pub store: Arc<MemoryStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Catalog services bound to this state's store.
    pub fn catalog(&self) -> Catalog<MemoryStore> {
        Catalog::new(Arc::clone(&self.store))
    }

    /// Engagement services bound to this state's store.
    pub fn engagement(&self) -> EngagementManager<MemoryStore> {
        EngagementManager::new(Arc::clone(&self.store))
    }
}
