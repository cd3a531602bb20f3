//! Route definitions for `/admin/collections`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::collections;
use crate::state::AppState;

/// Routes mounted at `/admin/collections`. `{kind}` is one of
/// `board-members`, `episodes`, `projects`, `tutorials`.
///
/// ```text
/// GET  /{kind}            -> list_collection
/// PUT  /{kind}/reorder    -> reorder_collection
/// POST /{kind}/move       -> move_in_collection
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{kind}", get(collections::list_collection))
        .route("/{kind}/reorder", put(collections::reorder_collection))
        .route("/{kind}/move", post(collections::move_in_collection))
}
