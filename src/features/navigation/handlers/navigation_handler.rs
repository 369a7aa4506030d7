use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::navigation::dtos::{NavigationSnapshotDto, TransitionRequestDto};
use crate::features::navigation::services::NavigationService;
use crate::shared::types::ApiResponse;

/// Get the initial navigation snapshot
#[utoipa::path(
    get,
    path = "/api/navigation/home",
    responses(
        (status = 200, description = "Home view snapshot", body = ApiResponse<NavigationSnapshotDto>)
    ),
    tag = "navigation"
)]
pub async fn get_home(
    State(service): State<Arc<NavigationService>>,
) -> Result<Json<ApiResponse<NavigationSnapshotDto>>> {
    let snapshot = service.snapshot(service.home(), true)?;
    Ok(Json(ApiResponse::success(Some(snapshot.into()), None, None)))
}

/// Apply a navigation action to the client's context
///
/// Unresolved map clicks return the unchanged snapshot with `applied = false`.
#[utoipa::path(
    post,
    path = "/api/navigation/transitions",
    request_body = TransitionRequestDto,
    responses(
        (status = 200, description = "Snapshot after the action", body = ApiResponse<NavigationSnapshotDto>),
        (status = 400, description = "Malformed request or context referencing unknown keys"),
        (status = 404, description = "Region or district not found"),
        (status = 409, description = "District selected without an open region")
    ),
    tag = "navigation"
)]
pub async fn apply_transition(
    State(service): State<Arc<NavigationService>>,
    AppJson(dto): AppJson<TransitionRequestDto>,
) -> Result<Json<ApiResponse<NavigationSnapshotDto>>> {
    let snapshot = service.transition(dto.context, dto.action)?;
    Ok(Json(ApiResponse::success(Some(snapshot.into()), None, None)))
}
