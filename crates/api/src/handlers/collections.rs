//! Generic handlers for reordering any ordered collection.
//!
//! These take a plain [`AuthUser`] rather than `RequireAdmin`; the
//! [`ReorderService`](clubsite_core::reorder::ReorderService) runs the admin
//! gate itself, before it validates or writes anything.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use clubsite_core::collection::CollectionKind;
use clubsite_core::ordering::{Direction, ReorderRequest};
use clubsite_core::reorder::{reorder_succeeded, Caller};
use clubsite_core::types::DbId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for a full reorder.
#[derive(Debug, Deserialize)]
pub struct ReorderInput {
    pub ordered_ids: Vec<DbId>,
}

/// Request body for a single up/down move against the caller's snapshot.
#[derive(Debug, Deserialize)]
pub struct MoveInput {
    pub ordered_ids: Vec<DbId>,
    pub index: usize,
    pub direction: Direction,
}

/// GET /api/v1/admin/collections/{kind}
pub async fn list_collection(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> AppResult<impl IntoResponse> {
    let kind: CollectionKind = kind.parse()?;
    let items = state.reorder.list(kind).await?;
    Ok(Json(DataResponse { data: items }))
}

/// PUT /api/v1/admin/collections/{kind}/reorder
///
/// Persists `ordered_ids` as the new order (`rank = position`) in one
/// transaction.
pub async fn reorder_collection(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(input): Json<ReorderInput>,
) -> AppResult<impl IntoResponse> {
    let kind: CollectionKind = kind.parse()?;
    let assignment = state
        .reorder
        .reorder(&Caller::from(&auth), kind, &input.ordered_ids)
        .await?;

    tracing::info!(
        %kind,
        item_count = assignment.len(),
        admin_id = auth.user_id,
        "Collection reordered by admin",
    );

    Ok(Json(DataResponse {
        data: reorder_succeeded(kind, &assignment),
    }))
}

/// POST /api/v1/admin/collections/{kind}/move
///
/// Responds with the applied rank assignment, or `null` when the item was
/// already at that end of the list.
pub async fn move_in_collection(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(input): Json<MoveInput>,
) -> AppResult<impl IntoResponse> {
    let kind: CollectionKind = kind.parse()?;
    let request = ReorderRequest {
        index: input.index,
        direction: input.direction,
    };
    let applied = state
        .reorder
        .move_item(&Caller::from(&auth), kind, &input.ordered_ids, request)
        .await?;

    Ok(Json(DataResponse { data: applied }))
}
