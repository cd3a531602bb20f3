//! Route definitions for the `/admin/board-members` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::board_member;
use crate::state::AppState;

/// Routes mounted at `/admin/board-members`.
///
/// ```text
/// GET    /        -> list_board_members
/// POST   /        -> create_board_member
/// PUT    /{id}    -> update_board_member
/// DELETE /{id}    -> delete_board_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(board_member::list_board_members).post(board_member::create_board_member),
        )
        .route(
            "/{id}",
            put(board_member::update_board_member).delete(board_member::delete_board_member),
        )
}
