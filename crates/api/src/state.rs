use std::sync::Arc;

use inkwell_store::MemStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the store and config are both behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory project/chapter store.
    pub store: MemStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
