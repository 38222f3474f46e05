use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::RecordStore;

/// Shared application state injected into all route handlers via Axum
/// extractors.
///
/// The record store is process-wide mutable state; the lock keeps
/// index-based addressing correct when the runtime serves requests on
/// multiple threads. Handlers never hold it across an await point.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<RecordStore>>,
}

impl AppState {
    /// State backed by the seeded startup collections.
    pub fn seeded() -> Self {
        Self::with_store(RecordStore::seeded())
    }

    /// State over an arbitrary store, e.g. an empty one in tests.
    pub fn with_store(store: RecordStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
