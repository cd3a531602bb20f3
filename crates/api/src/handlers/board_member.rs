//! Admin handlers for board member CRUD.
//!
//! All endpoints require the `admin` role via [`RequireAdmin`]. Every
//! successful write revalidates the board, admin, and home pages.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use clubsite_core::collection::CollectionKind;
use clubsite_core::error::CoreError;
use clubsite_core::types::DbId;
use clubsite_db::models::board_member::{CreateBoardMember, UpdateBoardMember};
use clubsite_db::repositories::BoardMemberRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

const KIND: CollectionKind = CollectionKind::BoardMembers;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: KIND.entity(),
        id,
    })
}

/// GET /api/v1/admin/board-members
///
/// All board members, inactive ones included, in display order.
pub async fn list_board_members(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let members = BoardMemberRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: members }))
}

/// POST /api/v1/admin/board-members
pub async fn create_board_member(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateBoardMember>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let member = BoardMemberRepo::create(&state.pool, &input).await?;
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(
        member_id = member.id,
        sort_order = member.sort_order,
        admin_id = admin.user_id,
        "Board member created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// PUT /api/v1/admin/board-members/{id}
pub async fn update_board_member(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBoardMember>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let member = BoardMemberRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(member_id = id, admin_id = admin.user_id, "Board member updated");

    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/v1/admin/board-members/{id}
///
/// Remaining members keep their ranks; gaps are fine.
pub async fn delete_board_member(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !BoardMemberRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    state.pages.invalidate(&KIND.affected_paths()).await;

    tracing::info!(member_id = id, admin_id = admin.user_id, "Board member deleted");

    Ok(StatusCode::NO_CONTENT)
}
