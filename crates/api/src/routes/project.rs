//! Route definitions for the `/admin/projects` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/admin/projects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list_projects).post(project::create_project))
        .route("/{id}", put(project::update_project).delete(project::delete_project))
}
