use std::sync::Arc;

use clubsite_core::reorder::ReorderService;
use clubsite_db::repositories::PgOrderedStore;

use crate::cache::PageCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: clubsite_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Cached public page payloads; also the reorder revalidator.
    pub pages: Arc<PageCache>,
    /// Reorder entry point for every ordered collection.
    pub reorder: Arc<ReorderService>,
}

impl AppState {
    /// Wire the Postgres-backed reorder service to a fresh page cache.
    pub fn new(pool: clubsite_db::DbPool, config: ServerConfig) -> Self {
        let pages = Arc::new(PageCache::new());
        let reorder = ReorderService::new(Arc::new(PgOrderedStore::new(pool.clone())))
            .with_revalidator(pages.clone());

        Self {
            pool,
            config: Arc::new(config),
            pages,
            reorder: Arc::new(reorder),
        }
    }
}
