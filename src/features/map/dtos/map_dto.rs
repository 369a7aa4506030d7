use geojson::FeatureCollection;
use serde::Serialize;
use utoipa::ToSchema;

/// Response DTO for a styled boundary layer
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryLayerDto {
    /// Region the district layer belongs to; absent for the nationwide layer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_key: Option<String>,
    pub feature_count: usize,
    /// GeoJSON FeatureCollection. Feature properties carry `style`,
    /// `hoverStyle`, `tooltip` and `target` (the navigation action a click
    /// produces, or null).
    #[schema(value_type = Object)]
    pub geojson: FeatureCollection,
}

impl BoundaryLayerDto {
    pub fn new(region_key: Option<String>, geojson: &FeatureCollection) -> Self {
        Self {
            region_key,
            feature_count: geojson.features.len(),
            geojson: geojson.clone(),
        }
    }
}
