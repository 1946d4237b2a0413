use std::sync::Arc;

use geoline_core::upload::UploadStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: geoline_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// File storage for uploaded images and videos.
    pub uploads: Arc<UploadStore>,
}
