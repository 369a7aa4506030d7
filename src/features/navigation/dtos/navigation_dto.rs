use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::navigation::models::{
    ActiveView, Breadcrumb, MapLayer, NavigationAction, NavigationContext, NavigationSnapshot,
    NavigationState, Viewport,
};
use crate::features::regions::dtos::{DistrictResponseDto, RegionDetailDto, RegionSummaryDto};

/// Request DTO for applying an action to the client's current context
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequestDto {
    #[serde(default)]
    pub context: NavigationContext,
    pub action: NavigationAction,
}

/// Content of the active view
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ActiveViewDto {
    Home {
        regions: Vec<RegionSummaryDto>,
    },
    Region {
        region: RegionDetailDto,
    },
    #[serde(rename_all = "camelCase")]
    District {
        region: RegionSummaryDto,
        district: DistrictResponseDto,
        /// Where to fetch the checklist for this district
        facility_path: String,
    },
}

impl From<&ActiveView<'_>> for ActiveViewDto {
    fn from(view: &ActiveView<'_>) -> Self {
        match view {
            ActiveView::Home { regions } => Self::Home {
                regions: regions.iter().map(|&r| r.into()).collect(),
            },
            ActiveView::Region { region } => Self::Region {
                region: (*region).into(),
            },
            ActiveView::District { region, district } => Self::District {
                region: (*region).into(),
                district: (*district).into(),
                facility_path: format!(
                    "/api/regions/{}/districts/{}/facility",
                    region.key, district.code
                ),
            },
        }
    }
}

/// The active map layer with the endpoint serving it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MapLayerDto {
    #[serde(flatten)]
    pub layer: MapLayer,
    /// Absent while the map is hidden
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&MapLayer> for MapLayerDto {
    fn from(layer: &MapLayer) -> Self {
        let path = match layer {
            MapLayer::Regions => Some("/api/map/regions".to_string()),
            MapLayer::Districts { region_key } => {
                Some(format!("/api/map/regions/{}/districts", region_key))
            }
            MapLayer::Hidden => None,
        };
        Self {
            layer: layer.clone(),
            path,
        }
    }
}

/// Response DTO for a navigation snapshot
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshotDto {
    pub state: NavigationState,
    pub search: String,
    /// False when the action resolved to nothing and the context is unchanged
    pub applied: bool,
    pub view: ActiveViewDto,
    pub map_layer: MapLayerDto,
    pub viewport: Viewport,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl From<NavigationSnapshot<'_>> for NavigationSnapshotDto {
    fn from(snapshot: NavigationSnapshot<'_>) -> Self {
        Self {
            view: (&snapshot.view).into(),
            map_layer: (&snapshot.map_layer).into(),
            state: snapshot.context.state,
            search: snapshot.context.search,
            applied: snapshot.applied,
            viewport: snapshot.viewport,
            breadcrumbs: snapshot.breadcrumbs,
        }
    }
}
