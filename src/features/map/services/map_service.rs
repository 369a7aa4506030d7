use std::collections::HashMap;

use geojson::{Feature, FeatureCollection};
use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::features::map::models::{BoundaryError, BoundarySet, FeatureLabel};
use crate::features::map::services::{
    DistrictLayerInteraction, FeatureInteraction, RegionLayerInteraction,
};
use crate::features::regions::models::Catalog;
use crate::features::resolver::ResolverService;

/// Serves boundary layers with styling, tooltips and click targets embedded
/// in every feature's properties
pub struct MapService {
    regions: FeatureCollection,
    districts: HashMap<String, FeatureCollection>,
}

impl MapService {
    /// Decorate every layer once; the result is immutable
    pub fn new(
        boundaries: &BoundarySet,
        catalog: &Catalog,
        resolver: &ResolverService,
    ) -> std::result::Result<Self, BoundaryError> {
        let regions = decorate(
            boundaries.regions(),
            &RegionLayerInteraction::new(resolver),
        );

        let mut districts = HashMap::with_capacity(catalog.regions().len());
        for region in catalog.regions() {
            let layer = boundaries
                .districts(&region.key)
                .ok_or_else(|| BoundaryError::MissingLayer(region.key.clone()))?;
            let interaction = DistrictLayerInteraction::new(resolver, region);
            let decorated = decorate(layer, &interaction);

            let unresolved = decorated
                .features
                .iter()
                .filter(|f| f.property("target").is_some_and(Value::is_null))
                .count();
            if unresolved > 0 {
                tracing::warn!(
                    region_key = %region.key,
                    unresolved,
                    "District features without a catalog match"
                );
            }

            districts.insert(region.key.clone(), decorated);
        }

        Ok(Self { regions, districts })
    }

    pub fn region_layer(&self) -> &FeatureCollection {
        &self.regions
    }

    pub fn district_layer(&self, region_key: &str) -> Result<&FeatureCollection> {
        self.districts.get(region_key).ok_or_else(|| {
            AppError::NotFound(format!("Region with key '{}' not found", region_key))
        })
    }
}

fn decorate(layer: &FeatureCollection, interaction: &dyn FeatureInteraction) -> FeatureCollection {
    let features = layer
        .features
        .iter()
        .map(|feature| decorate_feature(feature, interaction))
        .collect();

    FeatureCollection {
        bbox: layer.bbox.clone(),
        features,
        foreign_members: layer.foreign_members.clone(),
    }
}

fn decorate_feature(feature: &Feature, interaction: &dyn FeatureInteraction) -> Feature {
    let label = FeatureLabel::from_properties(feature.properties.as_ref());
    let mut decorated = feature.clone();

    decorated.set_property("style", to_value(interaction.style(&label)));
    decorated.set_property("hoverStyle", to_value(interaction.on_hover(&label)));
    decorated.set_property("tooltip", interaction.tooltip(&label));
    decorated.set_property(
        "target",
        interaction
            .on_activate(&label)
            .map(to_value)
            .unwrap_or(Value::Null),
    );

    decorated
}

fn to_value<T: serde::Serialize>(value: T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::shared::test_helpers::{feature_collection, uzbekistan_catalog};

    fn boundaries(catalog: &Catalog) -> BoundarySet {
        let mut regions = feature_collection(&["Andijon vil.", "Atlantis vil.", ""]);
        regions.features[0].set_property("region_id", 3);

        let districts = catalog
            .regions()
            .iter()
            .map(|r| {
                let names: &[&str] = match r.key.as_str() {
                    "toshkent_shahar" => &["Bektemir sh.", "Mirobod sh.", "Nomsiz sh."],
                    _ => &["Birinchi tumani"],
                };
                (r.key.clone(), feature_collection(names))
            })
            .collect();

        BoundarySet::from_collections(regions, districts, catalog).unwrap()
    }

    fn service() -> MapService {
        let catalog = uzbekistan_catalog();
        let resolver = ResolverService::new(Arc::clone(&catalog));
        MapService::new(&boundaries(&catalog), &catalog, &resolver).unwrap()
    }

    #[test]
    fn test_region_layer_is_decorated() {
        let service = service();
        let features = &service.region_layer().features;
        assert_eq!(features.len(), 3);

        let andijon = &features[0];
        assert_eq!(andijon.property("tooltip").unwrap(), "Andijon vil.");
        assert_eq!(andijon.property("style").unwrap()["fillColor"], "#96CEB4");
        assert_eq!(andijon.property("hoverStyle").unwrap()["weight"], 2.0);
        assert_eq!(andijon.property("target").unwrap()["type"], "selectRegion");
        assert_eq!(andijon.property("target").unwrap()["regionKey"], "andijon");

        assert!(features[1].property("target").unwrap().is_null());
        assert_eq!(features[2].property("tooltip").unwrap(), "Noma'lum");
        assert_eq!(features[2].property("style").unwrap()["fillColor"], "#FF6B6B");
    }

    #[test]
    fn test_district_layer_is_decorated() {
        let service = service();
        let layer = service.district_layer("toshkent_shahar").unwrap();
        assert_eq!(layer.features.len(), 3);

        let mirobod = &layer.features[1];
        assert_eq!(mirobod.property("target").unwrap()["districtCode"], "mirabad");
        assert_eq!(mirobod.property("style").unwrap()["color"], "#1a73e8");
        assert_eq!(mirobod.property("hoverStyle").unwrap()["fillOpacity"], 0.8);
        assert!(layer.features[2].property("target").unwrap().is_null());
    }

    #[test]
    fn test_unknown_district_layer() {
        let service = service();
        assert!(matches!(
            service.district_layer("atlantis"),
            Err(AppError::NotFound(_))
        ));
    }
}
