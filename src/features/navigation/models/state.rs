use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Position in the Home → Region → District hierarchy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum NavigationState {
    #[default]
    Home,
    #[serde(rename_all = "camelCase")]
    Region { region_key: String },
    #[serde(rename_all = "camelCase")]
    District {
        region_key: String,
        district_code: String,
    },
}

impl NavigationState {
    pub fn region(key: impl Into<String>) -> Self {
        Self::Region {
            region_key: key.into(),
        }
    }

    pub fn district(region_key: impl Into<String>, district_code: impl Into<String>) -> Self {
        Self::District {
            region_key: region_key.into(),
            district_code: district_code.into(),
        }
    }

    /// Selected region, if any
    pub fn region_key(&self) -> Option<&str> {
        match self {
            Self::Home => None,
            Self::Region { region_key } | Self::District { region_key, .. } => Some(region_key),
        }
    }

    pub fn district_code(&self) -> Option<&str> {
        match self {
            Self::District { district_code, .. } => Some(district_code),
            _ => None,
        }
    }
}

/// The whole client-visible UI state, passed in and returned by every transition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationContext {
    pub state: NavigationState,
    /// Home list filter text
    #[serde(default)]
    #[validate(length(max = 200, message = "Search must not exceed 200 characters"))]
    pub search: String,
}

impl NavigationContext {
    pub fn new(state: NavigationState) -> Self {
        Self {
            state,
            search: String::new(),
        }
    }
}

/// Input events understood by the navigation controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavigationAction {
    /// List selection of a region
    #[serde(rename_all = "camelCase")]
    SelectRegion { region_key: String },
    /// List selection of a district inside the selected region
    #[serde(rename_all = "camelCase")]
    SelectDistrict { district_code: String },
    GoHome,
    GoBack,
    /// Click on a boundary feature of the active map layer
    MapClick { label: String },
    Search { query: String },
}
