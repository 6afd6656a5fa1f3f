use std::sync::Arc;

use crate::config::ServerConfig;
use crate::metadata::MetadataCache;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: unipath_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Short-lived cache for the filter metadata (groups/colleges/regions).
    pub metadata_cache: MetadataCache,
}
