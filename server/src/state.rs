//! Process-wide store handles shared by every router.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::{CategoryStore, Garage, ItemStore};

/// One lock per resource family. A request touches a single family and holds
/// its lock for the whole operation, so store calls never interleave.
#[derive(Clone, Default)]
pub struct AppState {
    pub items: Arc<RwLock<ItemStore>>,
    pub categories: Arc<RwLock<CategoryStore>>,
    pub garage: Arc<RwLock<Garage>>,
}

impl AppState {
    /// Seeded stores. Each call yields independent state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore seed data and id sequences in every store.
    ///
    /// Not routed; meant for tests and embedding code.
    pub async fn reset(&self) {
        self.items.write().await.reset();
        self.categories.write().await.reset();
        self.garage.write().await.reset();
        tracing::debug!("stores reset to seed state");
    }
}
