use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::map::dtos::BoundaryLayerDto;
use crate::features::map::services::MapService;
use crate::shared::types::{ApiResponse, Meta};

/// Get the nationwide region boundary layer
#[utoipa::path(
    get,
    path = "/api/map/regions",
    responses(
        (status = 200, description = "Styled region boundaries", body = ApiResponse<BoundaryLayerDto>)
    ),
    tag = "map"
)]
pub async fn get_region_layer(
    State(service): State<Arc<MapService>>,
) -> Json<ApiResponse<BoundaryLayerDto>> {
    let dto = BoundaryLayerDto::new(None, service.region_layer());
    let meta = Meta::total(dto.feature_count);
    Json(ApiResponse::success(Some(dto), None, Some(meta)))
}

/// Get the district boundary layer of a region
#[utoipa::path(
    get,
    path = "/api/map/regions/{key}/districts",
    params(
        ("key" = String, Path, description = "Region key (e.g. andijon)")
    ),
    responses(
        (status = 200, description = "Styled district boundaries", body = ApiResponse<BoundaryLayerDto>),
        (status = 404, description = "Region not found")
    ),
    tag = "map"
)]
pub async fn get_district_layer(
    State(service): State<Arc<MapService>>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<BoundaryLayerDto>>> {
    let layer = service.district_layer(&key)?;
    let dto = BoundaryLayerDto::new(Some(key), layer);
    let meta = Meta::total(dto.feature_count);
    Ok(Json(ApiResponse::success(Some(dto), None, Some(meta))))
}
