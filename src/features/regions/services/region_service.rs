use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{normalize_query, Catalog, District, Region};

/// Read-only access to the region/district reference catalog
pub struct RegionService {
    catalog: Arc<Catalog>,
}

impl RegionService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// List regions in catalog order with optional search
    pub fn list_regions(&self, search: Option<&str>) -> Vec<&Region> {
        self.catalog.search(search)
    }

    /// Get a region by its key
    pub fn get_region(&self, key: &str) -> Result<&Region> {
        self.catalog
            .region(key)
            .ok_or_else(|| AppError::NotFound(format!("Region with key '{}' not found", key)))
    }

    /// List the districts of a region with optional name search
    pub fn list_districts(&self, region_key: &str, search: Option<&str>) -> Result<Vec<&District>> {
        let region = self.get_region(region_key)?;

        let districts = match normalize_query(search) {
            Some(needle) => region
                .districts
                .iter()
                .filter(|d| d.name.to_lowercase().contains(&needle))
                .collect(),
            None => region.districts.iter().collect(),
        };

        Ok(districts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::uzbekistan_catalog;

    #[test]
    fn test_get_region_not_found() {
        let service = RegionService::new(uzbekistan_catalog());
        assert!(matches!(
            service.get_region("atlantis"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_districts_keeps_catalog_order() {
        let service = RegionService::new(uzbekistan_catalog());
        let districts = service.list_districts("toshkent_shahar", None).unwrap();
        assert_eq!(districts.len(), 12);
        assert_eq!(districts[0].code, "bektemir");
        assert_eq!(districts[11].code, "yunusabad");
    }

    #[test]
    fn test_list_districts_with_search() {
        let service = RegionService::new(uzbekistan_catalog());
        let codes: Vec<&str> = service
            .list_districts("samarqand", Some("kattaqo"))
            .unwrap()
            .iter()
            .map(|d| d.code.as_str())
            .collect();
        assert_eq!(codes, vec!["kattakurgan", "kattakurgan"]);
    }
}
