use crate::features::map::models::{FeatureLabel, LayerStyle};
use crate::features::navigation::models::NavigationAction;
use crate::features::regions::models::Region;
use crate::features::resolver::ResolverService;
use crate::shared::constants::UNNAMED_FEATURE_LABEL;

/// Per-feature event handling of a rendered boundary layer
pub trait FeatureInteraction {
    /// Resting style
    fn style(&self, feature: &FeatureLabel) -> LayerStyle;

    fn on_hover(&self, feature: &FeatureLabel) -> LayerStyle;

    fn on_unhover(&self, feature: &FeatureLabel) -> LayerStyle {
        self.style(feature)
    }

    fn tooltip(&self, feature: &FeatureLabel) -> String;

    /// Navigation triggered by a click, `None` when the label does not resolve
    fn on_activate(&self, feature: &FeatureLabel) -> Option<NavigationAction>;
}

/// Nationwide layer: clicks select a region
pub struct RegionLayerInteraction<'a> {
    resolver: &'a ResolverService,
}

impl<'a> RegionLayerInteraction<'a> {
    pub fn new(resolver: &'a ResolverService) -> Self {
        Self { resolver }
    }
}

impl FeatureInteraction for RegionLayerInteraction<'_> {
    fn style(&self, feature: &FeatureLabel) -> LayerStyle {
        LayerStyle::region(feature.region_id)
    }

    fn on_hover(&self, feature: &FeatureLabel) -> LayerStyle {
        LayerStyle::region_hover(feature.region_id)
    }

    fn tooltip(&self, feature: &FeatureLabel) -> String {
        feature.name_or(UNNAMED_FEATURE_LABEL).to_string()
    }

    fn on_activate(&self, feature: &FeatureLabel) -> Option<NavigationAction> {
        let label = feature.name.as_deref()?;
        self.resolver
            .resolve_region(label)
            .map(|key| NavigationAction::SelectRegion {
                region_key: key.to_string(),
            })
    }
}

/// One region's district layer: clicks select a district of that region
pub struct DistrictLayerInteraction<'a> {
    resolver: &'a ResolverService,
    region: &'a Region,
}

impl<'a> DistrictLayerInteraction<'a> {
    pub fn new(resolver: &'a ResolverService, region: &'a Region) -> Self {
        Self { resolver, region }
    }
}

impl FeatureInteraction for DistrictLayerInteraction<'_> {
    fn style(&self, _feature: &FeatureLabel) -> LayerStyle {
        LayerStyle::district()
    }

    fn on_hover(&self, _feature: &FeatureLabel) -> LayerStyle {
        LayerStyle::district_hover()
    }

    fn tooltip(&self, feature: &FeatureLabel) -> String {
        feature.name_or("").to_string()
    }

    fn on_activate(&self, feature: &FeatureLabel) -> Option<NavigationAction> {
        self.resolver
            .resolve_district(feature.name_or(""), &self.region.districts)
            .map(|district| NavigationAction::SelectDistrict {
                district_code: district.code.clone(),
            })
    }
}
