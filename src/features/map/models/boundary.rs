use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use geojson::{Feature, FeatureCollection, GeoJson};
use thiserror::Error;

use super::FeatureLabel;
use crate::core::error::AppError;
use crate::features::regions::models::Catalog;

/// Nationwide region boundaries
pub const REGIONS_FILE: &str = "regions.geojson";

#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("Failed to open boundary file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse boundary file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Boundary file {0:?} must be a FeatureCollection")]
    NotFeatureCollection(PathBuf),

    #[error("Region '{0}' has no district boundary layer")]
    MissingLayer(String),

    #[error("District boundary layer '{0}' does not match any catalog region")]
    UnknownRegion(String),

    #[error("Region '{0}' has more than one district boundary source")]
    DuplicateSource(String),
}

impl From<BoundaryError> for AppError {
    fn from(err: BoundaryError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Which features of a shared file belong to a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureFilter {
    All,
    /// Lowercased name contains the marker
    NameContains(&'static str),
    /// Lowercased name does not contain the marker
    NameExcludes(&'static str),
}

impl FeatureFilter {
    pub fn matches(&self, feature: &Feature) -> bool {
        let name = FeatureLabel::from_properties(feature.properties.as_ref())
            .name
            .unwrap_or_default()
            .to_lowercase();

        match self {
            Self::All => true,
            Self::NameContains(marker) => name.contains(marker),
            Self::NameExcludes(marker) => !name.contains(marker),
        }
    }
}

/// One district layer and the dataset file it is cut from
#[derive(Debug, Clone, Copy)]
pub struct BoundarySource {
    pub region_key: &'static str,
    pub file: &'static str,
    pub filter: FeatureFilter,
}

const fn source(region_key: &'static str, file: &'static str) -> BoundarySource {
    BoundarySource {
        region_key,
        file,
        filter: FeatureFilter::All,
    }
}

/// District layer sources. The Tashkent dataset covers both the city and the
/// province; city districts are the ones labelled "sh.".
pub const DISTRICT_BOUNDARY_SOURCES: &[BoundarySource] = &[
    BoundarySource {
        region_key: "toshkent_shahar",
        file: "toshkent.geojson",
        filter: FeatureFilter::NameContains("sh."),
    },
    BoundarySource {
        region_key: "toshkent_viloyat",
        file: "toshkent.geojson",
        filter: FeatureFilter::NameExcludes("sh."),
    },
    source("andijon", "andijon.geojson"),
    source("buxoro", "buxoro.geojson"),
    source("fargona", "fargona.geojson"),
    source("jizzax", "jizzax.geojson"),
    source("xorazm", "xorazm.geojson"),
    source("namangan", "namangan.geojson"),
    source("navoiy", "navoiy.geojson"),
    source("qashqadaryo", "qashqadaryo.geojson"),
    source("qoraqalpogiston", "qoraqalpogiston.geojson"),
    source("samarqand", "samarqand.geojson"),
    source("sirdaryo", "sirdaryo.geojson"),
    source("surxondaryo", "surxondaryo.geojson"),
];

/// Every catalog region has exactly one source and every source names a
/// catalog region
pub fn check_sources(sources: &[BoundarySource], catalog: &Catalog) -> Result<(), BoundaryError> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for source in sources {
        if !catalog.contains_region(source.region_key) {
            return Err(BoundaryError::UnknownRegion(source.region_key.to_string()));
        }
        *seen.entry(source.region_key).or_default() += 1;
    }

    if let Some((key, _)) = seen.iter().find(|(_, count)| **count > 1) {
        return Err(BoundaryError::DuplicateSource(key.to_string()));
    }

    match catalog.regions().iter().find(|r| !seen.contains_key(r.key.as_str())) {
        Some(missing) => Err(BoundaryError::MissingLayer(missing.key.clone())),
        None => Ok(()),
    }
}

/// Boundary layers in 1:1 correspondence with the catalog
#[derive(Debug, Clone)]
pub struct BoundarySet {
    regions: FeatureCollection,
    districts: HashMap<String, FeatureCollection>,
}

impl BoundarySet {
    /// Load `regions.geojson` plus every district source from `dir`
    pub fn load(dir: &Path, catalog: &Catalog) -> Result<Self, BoundaryError> {
        check_sources(DISTRICT_BOUNDARY_SOURCES, catalog)?;

        let regions = read_collection(&dir.join(REGIONS_FILE))?;

        let mut files: HashMap<&str, FeatureCollection> = HashMap::new();
        let mut districts = HashMap::with_capacity(DISTRICT_BOUNDARY_SOURCES.len());

        for source in DISTRICT_BOUNDARY_SOURCES {
            let file = match files.entry(source.file) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => entry.insert(read_collection(&dir.join(source.file))?),
            };

            let features: Vec<Feature> = file
                .features
                .iter()
                .filter(|f| source.filter.matches(f))
                .cloned()
                .collect();

            tracing::debug!(
                region_key = source.region_key,
                file = source.file,
                features = features.len(),
                "District boundary layer loaded"
            );

            districts.insert(
                source.region_key.to_string(),
                FeatureCollection {
                    bbox: None,
                    features,
                    foreign_members: None,
                },
            );
        }

        Self::from_collections(regions, districts, catalog)
    }

    /// Assemble from already parsed collections, keyed by region key
    pub fn from_collections(
        regions: FeatureCollection,
        districts: HashMap<String, FeatureCollection>,
        catalog: &Catalog,
    ) -> Result<Self, BoundaryError> {
        if let Some(unknown) = districts.keys().find(|key| !catalog.contains_region(key)) {
            return Err(BoundaryError::UnknownRegion(unknown.clone()));
        }
        if let Some(missing) = catalog
            .regions()
            .iter()
            .find(|r| !districts.contains_key(&r.key))
        {
            return Err(BoundaryError::MissingLayer(missing.key.clone()));
        }

        Ok(Self { regions, districts })
    }

    pub fn regions(&self) -> &FeatureCollection {
        &self.regions
    }

    pub fn districts(&self, region_key: &str) -> Option<&FeatureCollection> {
        self.districts.get(region_key)
    }
}

fn read_collection(path: &Path) -> Result<FeatureCollection, BoundaryError> {
    let file = File::open(path).map_err(|source| BoundaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let geojson = GeoJson::from_reader(BufReader::new(file)).map_err(|source| {
        BoundaryError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    match geojson {
        GeoJson::FeatureCollection(collection) => Ok(collection),
        _ => Err(BoundaryError::NotFeatureCollection(path.to_path_buf())),
    }
}
