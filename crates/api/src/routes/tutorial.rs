//! Route definitions for the `/admin/tutorials` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tutorial;
use crate::state::AppState;

/// Routes mounted at `/admin/tutorials`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tutorial::list_tutorials).post(tutorial::create_tutorial))
        .route("/{id}", put(tutorial::update_tutorial).delete(tutorial::delete_tutorial))
}
