use std::sync::Arc;

use patisserie_store::JsonStore;

use crate::config::ServerConfig;

/// Shared application state available to all axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; all inner data is behind `Arc`. The store handle is
/// the single owner of the persisted snapshot -- handlers never touch the
/// file directly.
#[derive(Clone)]
pub struct AppState {
    /// The record store and transaction coordinator.
    pub store: Arc<JsonStore>,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
}
