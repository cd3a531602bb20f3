pub mod board_member;
pub mod collections;
pub mod episode;
pub mod health;
pub mod pages;
pub mod project;
pub mod tutorial;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /board                                 public board (active members)
/// /episodes                              public episode list
/// /projects                              public project list
/// /tutorials                             public tutorial list
///
/// /admin/board-members                   list, create (admin only)
/// /admin/board-members/{id}              update, delete
/// /admin/episodes                        list, create (admin only)
/// /admin/episodes/{id}                   update, delete
/// /admin/projects                        list, create (admin only)
/// /admin/projects/{id}                   update, delete
/// /admin/tutorials                       list, create (admin only)
/// /admin/tutorials/{id}                  update, delete
///
/// /admin/collections/{kind}              current order (admin only)
/// /admin/collections/{kind}/reorder      full reorder (PUT)
/// /admin/collections/{kind}/move         single up/down move (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    let admin = Router::new()
        .nest("/board-members", board_member::router())
        .nest("/episodes", episode::router())
        .nest("/projects", project::router())
        .nest("/tutorials", tutorial::router())
        .nest("/collections", collections::router());

    Router::new()
        .merge(pages::router())
        .nest("/admin", admin)
}
