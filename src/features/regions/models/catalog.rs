use std::collections::HashMap;

use thiserror::Error;

use super::{District, Region};
use crate::features::regions::data::{RegionSeed, REGION_SEEDS};
use crate::shared::validation::CATALOG_CODE_REGEX;

/// Errors detected while assembling the reference catalog
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Duplicate region key '{0}'")]
    DuplicateRegion(String),

    #[error("Region '{0}' has no districts")]
    EmptyRegion(String),

    #[error("Invalid region key '{0}'")]
    InvalidRegionKey(String),

    #[error("Invalid district code '{code}' in region '{region_key}'")]
    InvalidDistrictCode { region_key: String, code: String },
}

/// Immutable region/district reference catalog, in authored order
#[derive(Debug, Clone)]
pub struct Catalog {
    regions: Vec<Region>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, checking key uniqueness and identifier shape
    pub fn new(regions: Vec<Region>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(regions.len());

        for (position, region) in regions.iter().enumerate() {
            if !CATALOG_CODE_REGEX.is_match(&region.key) {
                return Err(CatalogError::InvalidRegionKey(region.key.clone()));
            }
            if region.districts.is_empty() {
                return Err(CatalogError::EmptyRegion(region.key.clone()));
            }
            if let Some(bad) = region
                .districts
                .iter()
                .find(|d| !CATALOG_CODE_REGEX.is_match(&d.code))
            {
                return Err(CatalogError::InvalidDistrictCode {
                    region_key: region.key.clone(),
                    code: bad.code.clone(),
                });
            }
            if index.insert(region.key.clone(), position).is_some() {
                return Err(CatalogError::DuplicateRegion(region.key.clone()));
            }
        }

        Ok(Self { regions, index })
    }

    /// The nationwide catalog shipped with the service
    pub fn uzbekistan() -> Result<Self, CatalogError> {
        Self::new(REGION_SEEDS.iter().map(Region::from).collect())
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, key: &str) -> Option<&Region> {
        self.index.get(key).map(|&i| &self.regions[i])
    }

    pub fn contains_region(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Regions whose name, or any district name, contains `query`.
    /// A blank query returns every region.
    pub fn search(&self, query: Option<&str>) -> Vec<&Region> {
        match normalize_query(query) {
            Some(needle) => self
                .regions
                .iter()
                .filter(|r| r.matches_search(&needle))
                .collect(),
            None => self.regions.iter().collect(),
        }
    }

}

/// Lowercased, trimmed search needle, or `None` when there is nothing to filter by
pub fn normalize_query(query: Option<&str>) -> Option<String> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}

impl From<&RegionSeed> for Region {
    fn from(seed: &RegionSeed) -> Self {
        Self {
            key: seed.key.to_string(),
            name: seed.name.to_string(),
            center: seed.center.into(),
            zoom: seed.zoom,
            districts: seed
                .districts
                .iter()
                .map(|&(name, code)| District::new(name, code))
                .collect(),
        }
    }
}
