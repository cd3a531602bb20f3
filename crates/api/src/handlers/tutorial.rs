//! Admin handlers for tutorial CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clubsite_core::collection::CollectionKind;
use clubsite_core::error::CoreError;
use clubsite_core::types::DbId;
use clubsite_db::models::tutorial::{CreateTutorial, UpdateTutorial};
use clubsite_db::repositories::TutorialRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const KIND: CollectionKind = CollectionKind::Tutorials;

/// GET /api/v1/admin/tutorials
pub async fn list_tutorials(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tutorials = TutorialRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tutorials }))
}

/// POST /api/v1/admin/tutorials
pub async fn create_tutorial(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTutorial>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let tutorial = TutorialRepo::create(&state.pool, &input).await?;
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(
        tutorial_id = tutorial.id,
        sort_order = tutorial.sort_order,
        admin_id = admin.user_id,
        "Tutorial created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: tutorial })))
}

/// PUT /api/v1/admin/tutorials/{id}
pub async fn update_tutorial(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTutorial>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let tutorial = TutorialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.entity(),
            id,
        }))?;
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(tutorial_id = id, admin_id = admin.user_id, "Tutorial updated");

    Ok(Json(DataResponse { data: tutorial }))
}

/// DELETE /api/v1/admin/tutorials/{id}
pub async fn delete_tutorial(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TutorialRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: KIND.entity(),
            id,
        }));
    }
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(tutorial_id = id, admin_id = admin.user_id, "Tutorial deleted");

    Ok(StatusCode::NO_CONTENT)
}
