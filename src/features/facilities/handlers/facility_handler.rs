use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::facilities::dtos::FacilityResponseDto;
use crate::features::facilities::services::FacilityService;
use crate::shared::types::ApiResponse;

/// Get the examination checklist of a district
///
/// Districts without their own record receive the template record with
/// `verified = false`.
#[utoipa::path(
    get,
    path = "/api/regions/{key}/districts/{code}/facility",
    params(
        ("key" = String, Path, description = "Region key (e.g. toshkent_shahar)"),
        ("code" = String, Path, description = "District code (e.g. mirabad)")
    ),
    responses(
        (status = 200, description = "District checklist", body = ApiResponse<FacilityResponseDto>),
        (status = 404, description = "Region or district not found")
    ),
    tag = "facilities"
)]
pub async fn get_facility(
    State(service): State<Arc<FacilityService>>,
    Path((key, code)): Path<(String, String)>,
) -> Result<Json<ApiResponse<FacilityResponseDto>>> {
    let data = service.get_facility(&key, &code)?;
    let dto = FacilityResponseDto::new(key, code, data);
    Ok(Json(ApiResponse::success(Some(dto), None, None)))
}
