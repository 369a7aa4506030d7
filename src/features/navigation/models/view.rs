use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{NavigationAction, NavigationContext};
use crate::features::regions::models::{Coordinate, District, Region};

/// What the client should render for a context
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView<'a> {
    /// Region list (filtered by the search text) next to the nationwide map
    Home { regions: Vec<&'a Region> },
    /// The region's district list next to its district layer
    Region { region: &'a Region },
    /// Procedural checklist, map hidden
    District {
        region: &'a Region,
        district: &'a District,
    },
}

/// Which boundary layer the map shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "layer", rename_all = "camelCase")]
pub enum MapLayer {
    Regions,
    #[serde(rename_all = "camelCase")]
    Districts { region_key: String },
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
    /// Always true: viewport changes are animated, never jumps
    pub animate: bool,
}

impl Viewport {
    pub fn animated(center: Coordinate, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            animate: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Breadcrumb {
    pub label: String,
    /// Action navigating to this crumb; absent on the current page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<NavigationAction>,
}

impl Breadcrumb {
    pub fn link(label: impl Into<String>, action: NavigationAction) -> Self {
        Self {
            label: label.into(),
            action: Some(action),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
        }
    }
}

/// A context together with every output derived from it
#[derive(Debug, Clone)]
pub struct NavigationSnapshot<'a> {
    pub context: NavigationContext,
    /// False when the action was a silent no-op (e.g. an unresolved map click)
    pub applied: bool,
    pub view: ActiveView<'a>,
    pub map_layer: MapLayer,
    pub viewport: Viewport,
    pub breadcrumbs: Vec<Breadcrumb>,
}
