//! Public, unauthenticated list endpoints backing the site's pages.
//!
//! Each payload is cached under the page path it feeds and served from the
//! [`PageCache`] until a write revalidates it.

use std::future::Future;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use clubsite_core::collection::{BOARD_PAGE, EPISODES_PAGE, PROJECTS_PAGE, TUTORIALS_PAGE};
use clubsite_db::repositories::{BoardMemberRepo, EpisodeRepo, ProjectRepo, TutorialRepo};
use serde::Serialize;
use serde_json::Value;

use crate::cache::PageCache;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Serve `path` from the cache, loading and caching it on a miss.
///
/// A payload loaded while the page was revalidated is returned to this
/// caller but not cached.
async fn cached_page<T, F, Fut>(pages: &PageCache, path: &str, load: F) -> AppResult<Value>
where
    T: Serialize,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    if let Some(payload) = pages.get(path).await {
        return Ok(payload);
    }

    let generation = pages.generation(path).await;
    let rows = load().await?;
    let payload =
        serde_json::to_value(&rows).map_err(|e| AppError::InternalError(e.to_string()))?;
    if pages.put(path, generation, payload.clone()).await {
        tracing::debug!(path, "Page payload cached");
    } else {
        tracing::debug!(path, "Page revalidated during load; payload not cached");
    }
    Ok(payload)
}

/// GET /api/v1/board
///
/// Active board members in display order.
pub async fn list_board(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = state.pool.clone();
    let data = cached_page(&state.pages, BOARD_PAGE, || async move {
        BoardMemberRepo::list(&pool, false).await
    })
    .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/episodes
pub async fn list_episodes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = state.pool.clone();
    let data = cached_page(&state.pages, EPISODES_PAGE, || async move {
        EpisodeRepo::list(&pool).await
    })
    .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/projects
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = state.pool.clone();
    let data = cached_page(&state.pages, PROJECTS_PAGE, || async move {
        ProjectRepo::list(&pool).await
    })
    .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/tutorials
///
/// All tutorials in display order. The page groups them by category.
pub async fn list_tutorials(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = state.pool.clone();
    let data = cached_page(&state.pages, TUTORIALS_PAGE, || async move {
        TutorialRepo::list(&pool).await
    })
    .await?;
    Ok(Json(DataResponse { data }))
}
