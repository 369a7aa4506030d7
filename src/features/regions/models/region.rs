use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::District;

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Region model representing a province, the republic or the capital city
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub key: String,
    pub name: String,
    pub center: Coordinate,
    pub zoom: u8,
    /// Authored order, scanned first-match-wins by the district resolver
    pub districts: Vec<District>,
}

impl Region {
    /// First district carrying `code`, in catalog order
    pub fn district_by_code(&self, code: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.code == code)
    }

    pub fn has_district(&self, code: &str) -> bool {
        self.district_by_code(code).is_some()
    }

    /// Case-insensitive substring match on the region name or any district name.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .districts
                .iter()
                .any(|d| d.name.to_lowercase().contains(needle))
    }
}
