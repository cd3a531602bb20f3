//! Route definitions for the `/admin/episodes` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::episode;
use crate::state::AppState;

/// Routes mounted at `/admin/episodes`.
///
/// ```text
/// GET    /        -> list_episodes
/// POST   /        -> create_episode
/// PUT    /{id}    -> update_episode
/// DELETE /{id}    -> delete_episode
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(episode::list_episodes).post(episode::create_episode))
        .route("/{id}", put(episode::update_episode).delete(episode::delete_episode))
}
