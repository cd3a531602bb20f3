//! Admin handlers for episode CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clubsite_core::collection::CollectionKind;
use clubsite_core::error::CoreError;
use clubsite_core::types::DbId;
use clubsite_db::models::episode::{CreateEpisode, UpdateEpisode};
use clubsite_db::repositories::EpisodeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const KIND: CollectionKind = CollectionKind::Episodes;

/// GET /api/v1/admin/episodes
pub async fn list_episodes(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let episodes = EpisodeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: episodes }))
}

/// POST /api/v1/admin/episodes
pub async fn create_episode(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateEpisode>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let episode = EpisodeRepo::create(&state.pool, &input).await?;
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(
        episode_id = episode.id,
        sort_order = episode.sort_order,
        admin_id = admin.user_id,
        "Episode created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: episode })))
}

/// PUT /api/v1/admin/episodes/{id}
pub async fn update_episode(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEpisode>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let episode = EpisodeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.entity(),
            id,
        }))?;
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(episode_id = id, admin_id = admin.user_id, "Episode updated");

    Ok(Json(DataResponse { data: episode }))
}

/// DELETE /api/v1/admin/episodes/{id}
pub async fn delete_episode(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !EpisodeRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: KIND.entity(),
            id,
        }));
    }
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(episode_id = id, admin_id = admin.user_id, "Episode deleted");

    Ok(StatusCode::NO_CONTENT)
}
