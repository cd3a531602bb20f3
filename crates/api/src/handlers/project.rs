//! Admin handlers for project CRUD.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clubsite_core::collection::CollectionKind;
use clubsite_core::error::CoreError;
use clubsite_core::types::DbId;
use clubsite_db::models::project::{CreateProject, UpdateProject};
use clubsite_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const KIND: CollectionKind = CollectionKind::Projects;

/// GET /api/v1/admin/projects
pub async fn list_projects(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /api/v1/admin/projects
pub async fn create_project(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(
        project_id = project.id,
        sort_order = project.sort_order,
        admin_id = admin.user_id,
        "Project created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /api/v1/admin/projects/{id}
pub async fn update_project(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: KIND.entity(),
            id,
        }))?;
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(project_id = id, admin_id = admin.user_id, "Project updated");

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/admin/projects/{id}
pub async fn delete_project(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: KIND.entity(),
            id,
        }));
    }
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(project_id = id, admin_id = admin.user_id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
