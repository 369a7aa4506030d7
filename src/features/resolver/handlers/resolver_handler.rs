use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::resolver::dtos::{
    DistrictResolutionDto, RegionResolutionDto, ResolveLabelDto,
};
use crate::features::resolver::services::ResolverService;
use crate::shared::types::ApiResponse;

/// Resolve a region feature label
///
/// An unknown label is not an error: the response carries `resolved = false`.
#[utoipa::path(
    post,
    path = "/api/resolver/region",
    request_body = ResolveLabelDto,
    responses(
        (status = 200, description = "Resolution result", body = ApiResponse<RegionResolutionDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "resolver"
)]
pub async fn resolve_region(
    State(service): State<Arc<ResolverService>>,
    AppJson(dto): AppJson<ResolveLabelDto>,
) -> Result<Json<ApiResponse<RegionResolutionDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let region_key = service.resolve_region(&dto.label).map(str::to_string);
    let result = RegionResolutionDto {
        resolved: region_key.is_some(),
        label: dto.label,
        region_key,
    };

    Ok(Json(ApiResponse::success(Some(result), None, None)))
}

/// Resolve a district feature label within a region
#[utoipa::path(
    post,
    path = "/api/resolver/regions/{key}/district",
    params(
        ("key" = String, Path, description = "Region key the district layer belongs to")
    ),
    request_body = ResolveLabelDto,
    responses(
        (status = 200, description = "Resolution result", body = ApiResponse<DistrictResolutionDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Region not found")
    ),
    tag = "resolver"
)]
pub async fn resolve_district(
    State(service): State<Arc<ResolverService>>,
    Path(key): Path<String>,
    AppJson(dto): AppJson<ResolveLabelDto>,
) -> Result<Json<ApiResponse<DistrictResolutionDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let district = service.resolve_district_in(&key, &dto.label)?;
    let result = DistrictResolutionDto {
        resolved: district.is_some(),
        district_code: district.map(|d| d.code.clone()),
        district_name: district.map(|d| d.name.clone()),
        label: dto.label,
        region_key: key,
    };

    Ok(Json(ApiResponse::success(Some(result), None, None)))
}
