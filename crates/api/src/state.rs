use std::sync::Arc;

use admissions_core::store::ApplicationStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Application record store (PostgreSQL in production).
    pub store: Arc<dyn ApplicationStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
