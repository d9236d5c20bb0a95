use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Holds only the connection pool and immutable configuration; request
/// handlers share no other in-process mutable state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: songmap_db::DbPool,
    /// Server configuration (bind address, CORS, JWT settings).
    pub config: Arc<ServerConfig>,
}
