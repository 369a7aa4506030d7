use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{Coordinate, District, Region};

/// Query parameters for searching regions and districts
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct RegionSearchQuery {
    /// Search by region or district name (case-insensitive, partial match)
    #[param(example = "mirobod")]
    pub search: Option<String>,
}

/// Response DTO for a region in the home list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummaryDto {
    pub key: String,
    pub name: String,
    pub center: Coordinate,
    pub zoom: u8,
    pub district_count: usize,
}

impl From<&Region> for RegionSummaryDto {
    fn from(region: &Region) -> Self {
        Self {
            key: region.key.clone(),
            name: region.name.clone(),
            center: region.center,
            zoom: region.zoom,
            district_count: region.districts.len(),
        }
    }
}

/// Response DTO for a region with its district list
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionDetailDto {
    pub key: String,
    pub name: String,
    pub center: Coordinate,
    pub zoom: u8,
    pub districts: Vec<DistrictResponseDto>,
}

impl From<&Region> for RegionDetailDto {
    fn from(region: &Region) -> Self {
        Self {
            key: region.key.clone(),
            name: region.name.clone(),
            center: region.center,
            zoom: region.zoom,
            districts: region.districts.iter().map(Into::into).collect(),
        }
    }
}

/// Response DTO for district data
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResponseDto {
    pub code: String,
    pub name: String,
}

impl From<&District> for DistrictResponseDto {
    fn from(district: &District) -> Self {
        Self {
            code: district.code.clone(),
            name: district.name.clone(),
        }
    }
}
