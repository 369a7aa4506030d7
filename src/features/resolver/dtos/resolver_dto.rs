use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO carrying a boundary feature label
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolveLabelDto {
    /// The feature's `name` property, e.g. "Andijon vil." or "Bektemir sh.".
    /// Unnamed features send an empty label.
    #[validate(length(max = 200, message = "Label must not exceed 200 characters"))]
    pub label: String,
}

/// Response DTO for a region label resolution
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionResolutionDto {
    pub label: String,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_key: Option<String>,
}

/// Response DTO for a district label resolution
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResolutionDto {
    pub label: String,
    pub region_key: String,
    pub resolved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_name: Option<String>,
}
