//! Public list routes, mounted directly under `/api/v1`.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET /board      -> list_board
/// GET /episodes   -> list_episodes
/// GET /projects   -> list_projects
/// GET /tutorials  -> list_tutorials
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/board", get(pages::list_board))
        .route("/episodes", get(pages::list_episodes))
        .route("/projects", get(pages::list_projects))
        .route("/tutorials", get(pages::list_tutorials))
}
