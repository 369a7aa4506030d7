use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::{
    DistrictResponseDto, RegionDetailDto, RegionSearchQuery, RegionSummaryDto,
};
use crate::features::regions::services::RegionService;
use crate::shared::types::{ApiResponse, Meta};

/// List all regions
#[utoipa::path(
    get,
    path = "/api/regions",
    params(RegionSearchQuery),
    responses(
        (status = 200, description = "List of regions", body = ApiResponse<Vec<RegionSummaryDto>>)
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<RegionService>>,
    Query(query): Query<RegionSearchQuery>,
) -> Json<ApiResponse<Vec<RegionSummaryDto>>> {
    let dtos: Vec<RegionSummaryDto> = service
        .list_regions(query.search.as_deref())
        .into_iter()
        .map(Into::into)
        .collect();
    let meta = Meta::total(dtos.len());
    Json(ApiResponse::success(Some(dtos), None, Some(meta)))
}

/// Get a region by key
#[utoipa::path(
    get,
    path = "/api/regions/{key}",
    params(
        ("key" = String, Path, description = "Region key (e.g. andijon)")
    ),
    responses(
        (status = 200, description = "Region details", body = ApiResponse<RegionDetailDto>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<RegionService>>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<RegionDetailDto>>> {
    let region = service.get_region(&key)?;
    Ok(Json(ApiResponse::success(Some(region.into()), None, None)))
}

/// List districts in a region
#[utoipa::path(
    get,
    path = "/api/regions/{key}/districts",
    params(
        ("key" = String, Path, description = "Region key (e.g. andijon)"),
        RegionSearchQuery
    ),
    responses(
        (status = 200, description = "Districts of the region in catalog order", body = ApiResponse<Vec<DistrictResponseDto>>),
        (status = 404, description = "Region not found")
    ),
    tag = "regions"
)]
pub async fn list_districts(
    State(service): State<Arc<RegionService>>,
    Path(key): Path<String>,
    Query(query): Query<RegionSearchQuery>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let dtos: Vec<DistrictResponseDto> = service
        .list_districts(&key, query.search.as_deref())?
        .into_iter()
        .map(Into::into)
        .collect();
    let meta = Meta::total(dtos.len());
    Ok(Json(ApiResponse::success(Some(dtos), None, Some(meta))))
}
