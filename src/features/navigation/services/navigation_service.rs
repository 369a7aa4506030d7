use std::sync::Arc;

use validator::Validate;

use crate::features::map::services::{
    DistrictLayerInteraction, FeatureInteraction, RegionLayerInteraction,
};
use crate::features::map::models::FeatureLabel;
use crate::features::navigation::models::{
    ActiveView, Breadcrumb, MapLayer, NavigationAction, NavigationContext, NavigationError,
    NavigationSnapshot, NavigationState, Viewport,
};
use crate::features::regions::models::{Catalog, Region};
use crate::features::resolver::ResolverService;
use crate::shared::constants::{
    BREADCRUMB_DISTRICT_FALLBACK, BREADCRUMB_HOME_LABEL, HOME_CENTER, HOME_ZOOM,
};

type Result<T> = std::result::Result<T, NavigationError>;

/// View state machine over the reference catalog.
///
/// Every operation is a pure function of the catalog and the context it is
/// given; rejected operations leave the caller's context untouched.
pub struct NavigationService {
    catalog: Arc<Catalog>,
    resolver: Arc<ResolverService>,
}

impl NavigationService {
    pub fn new(catalog: Arc<Catalog>, resolver: Arc<ResolverService>) -> Self {
        Self { catalog, resolver }
    }

    /// Initial context: home view, empty search
    pub fn home(&self) -> NavigationContext {
        NavigationContext::default()
    }

    /// Check that an externally supplied context only references catalog entries
    pub fn validate(&self, context: &NavigationContext) -> Result<()> {
        context
            .validate()
            .map_err(|e| NavigationError::InvalidContext(e.to_string()))?;

        match &context.state {
            NavigationState::Home => Ok(()),
            NavigationState::Region { region_key } => {
                self.region(region_key)
                    .map_err(|e| NavigationError::InvalidContext(e.to_string()))?;
                Ok(())
            }
            NavigationState::District {
                region_key,
                district_code,
            } => {
                let region = self
                    .region(region_key)
                    .map_err(|e| NavigationError::InvalidContext(e.to_string()))?;
                if !region.has_district(district_code) {
                    return Err(NavigationError::InvalidContext(format!(
                        "district '{}' does not belong to region '{}'",
                        district_code, region_key
                    )));
                }
                Ok(())
            }
        }
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    pub fn select_region(&self, context: &NavigationContext, key: &str) -> Result<NavigationContext> {
        let region = self.region(key)?;

        tracing::debug!(region_key = %region.key, "Region selected");
        Ok(NavigationContext {
            state: NavigationState::region(&region.key),
            search: context.search.clone(),
        })
    }

    /// Only valid from a region view, and only for a district of that region
    pub fn select_district(&self, context: &NavigationContext, code: &str) -> Result<NavigationContext> {
        let NavigationState::Region { region_key } = &context.state else {
            tracing::warn!(district_code = code, "District selected without an open region");
            return Err(NavigationError::NoRegionSelected);
        };

        let region = self.region(region_key)?;
        if !region.has_district(code) {
            tracing::warn!(region_key = %region_key, district_code = code, "Unknown district");
            return Err(NavigationError::UnknownDistrict {
                region_key: region_key.clone(),
                district_code: code.to_string(),
            });
        }

        tracing::debug!(region_key = %region_key, district_code = code, "District selected");
        Ok(NavigationContext {
            state: NavigationState::district(region_key, code),
            search: context.search.clone(),
        })
    }

    /// Unconditional; also clears the search text
    pub fn go_home(&self, _context: &NavigationContext) -> NavigationContext {
        self.home()
    }

    pub fn go_back(&self, context: &NavigationContext) -> NavigationContext {
        match &context.state {
            NavigationState::District { region_key, .. } => NavigationContext {
                state: NavigationState::region(region_key),
                search: context.search.clone(),
            },
            _ => self.go_home(context),
        }
    }

    pub fn set_search(&self, context: &NavigationContext, query: &str) -> Result<NavigationContext> {
        let next = NavigationContext {
            state: context.state.clone(),
            search: query.to_string(),
        };
        next.validate()
            .map_err(|e| NavigationError::InvalidContext(e.to_string()))?;
        Ok(next)
    }

    /// Map click on a feature of the active layer. `Ok(None)` when the label
    /// does not resolve or the map is hidden.
    pub fn activate_feature(
        &self,
        context: &NavigationContext,
        label: &str,
    ) -> Result<Option<NavigationContext>> {
        let feature = FeatureLabel::named(label);

        let action = match self.active_map_layer(context) {
            MapLayer::Regions => RegionLayerInteraction::new(&self.resolver).on_activate(&feature),
            MapLayer::Districts { region_key } => {
                let region = self.region(&region_key)?;
                DistrictLayerInteraction::new(&self.resolver, region).on_activate(&feature)
            }
            MapLayer::Hidden => None,
        };

        match action {
            Some(NavigationAction::SelectRegion { region_key }) => {
                self.select_region(context, &region_key).map(Some)
            }
            Some(NavigationAction::SelectDistrict { district_code }) => {
                self.select_district(context, &district_code).map(Some)
            }
            _ => {
                tracing::debug!(label, "Map click ignored");
                Ok(None)
            }
        }
    }

    /// Apply one action to a validated context. `Ok(None)` means a silent no-op.
    pub fn apply(
        &self,
        context: &NavigationContext,
        action: NavigationAction,
    ) -> Result<Option<NavigationContext>> {
        self.validate(context)?;

        let next = match action {
            NavigationAction::SelectRegion { region_key } => {
                self.select_region(context, &region_key)?
            }
            NavigationAction::SelectDistrict { district_code } => {
                self.select_district(context, &district_code)?
            }
            NavigationAction::GoHome => self.go_home(context),
            NavigationAction::GoBack => self.go_back(context),
            NavigationAction::MapClick { label } => return self.activate_feature(context, &label),
            NavigationAction::Search { query } => self.set_search(context, &query)?,
        };

        Ok(Some(next))
    }

    /// Apply an action and derive the resulting snapshot
    pub fn transition(
        &self,
        context: NavigationContext,
        action: NavigationAction,
    ) -> Result<NavigationSnapshot<'_>> {
        let (next, applied) = match self.apply(&context, action)? {
            Some(next) => (next, true),
            None => (context, false),
        };
        self.snapshot(next, applied)
    }

    // =========================================================================
    // DERIVED OUTPUTS
    // =========================================================================

    pub fn snapshot(&self, context: NavigationContext, applied: bool) -> Result<NavigationSnapshot<'_>> {
        Ok(NavigationSnapshot {
            view: self.active_view(&context)?,
            map_layer: self.active_map_layer(&context),
            viewport: self.viewport(&context),
            breadcrumbs: self.breadcrumbs(&context),
            context,
            applied,
        })
    }

    pub fn active_view(&self, context: &NavigationContext) -> Result<ActiveView<'_>> {
        let view = match &context.state {
            NavigationState::Home => ActiveView::Home {
                regions: self.catalog.search(Some(context.search.as_str())),
            },
            NavigationState::Region { region_key } => ActiveView::Region {
                region: self.region(region_key)?,
            },
            NavigationState::District {
                region_key,
                district_code,
            } => {
                let region = self.region(region_key)?;
                let district = region.district_by_code(district_code).ok_or_else(|| {
                    NavigationError::UnknownDistrict {
                        region_key: region_key.clone(),
                        district_code: district_code.clone(),
                    }
                })?;
                ActiveView::District { region, district }
            }
        };
        Ok(view)
    }

    pub fn active_map_layer(&self, context: &NavigationContext) -> MapLayer {
        match &context.state {
            NavigationState::Home => MapLayer::Regions,
            NavigationState::Region { region_key } => MapLayer::Districts {
                region_key: region_key.clone(),
            },
            NavigationState::District { .. } => MapLayer::Hidden,
        }
    }

    /// Selected region's center and zoom, or the nationwide default
    pub fn viewport(&self, context: &NavigationContext) -> Viewport {
        context
            .state
            .region_key()
            .and_then(|key| self.catalog.region(key))
            .map(|region| Viewport::animated(region.center, region.zoom))
            .unwrap_or_else(|| Viewport::animated(HOME_CENTER.into(), HOME_ZOOM))
    }

    pub fn breadcrumbs(&self, context: &NavigationContext) -> Vec<Breadcrumb> {
        let region_name = |key: &str| {
            self.catalog
                .region(key)
                .map(|r| r.name.clone())
                .unwrap_or_else(|| key.to_string())
        };

        match &context.state {
            NavigationState::Home => vec![Breadcrumb::current(BREADCRUMB_HOME_LABEL)],
            NavigationState::Region { region_key } => vec![
                Breadcrumb::link(BREADCRUMB_HOME_LABEL, NavigationAction::GoHome),
                Breadcrumb::current(region_name(region_key.as_str())),
            ],
            NavigationState::District {
                region_key,
                district_code,
            } => {
                let district_name = self
                    .catalog
                    .region(region_key)
                    .and_then(|r| r.district_by_code(district_code))
                    .map(|d| d.name.clone())
                    .unwrap_or_else(|| BREADCRUMB_DISTRICT_FALLBACK.to_string());

                vec![
                    Breadcrumb::link(BREADCRUMB_HOME_LABEL, NavigationAction::GoHome),
                    Breadcrumb::link(region_name(region_key.as_str()), NavigationAction::GoBack),
                    Breadcrumb::current(district_name),
                ]
            }
        }
    }

    fn region(&self, key: &str) -> Result<&Region> {
        self.catalog.region(key).ok_or_else(|| {
            tracing::warn!(region_key = key, "Unknown region");
            NavigationError::UnknownRegion(key.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::uzbekistan_catalog;

    fn service() -> NavigationService {
        let catalog = uzbekistan_catalog();
        let resolver = Arc::new(ResolverService::new(Arc::clone(&catalog)));
        NavigationService::new(catalog, resolver)
    }

    fn home_viewport() -> Viewport {
        Viewport::animated(HOME_CENTER.into(), HOME_ZOOM)
    }

    #[test]
    fn test_select_every_region() {
        let service = service();
        let home = service.home();

        for region in service.catalog.regions() {
            let ctx = service.select_region(&home, &region.key).unwrap();
            assert_eq!(ctx.state, NavigationState::region(&region.key));

            match service.active_view(&ctx).unwrap() {
                ActiveView::Region { region: shown } => assert_eq!(shown.key, region.key),
                other => panic!("unexpected view {other:?}"),
            }

            let viewport = service.viewport(&ctx);
            assert_eq!(viewport.center, region.center);
            assert_eq!(viewport.zoom, region.zoom);
            assert!(viewport.animate);
        }
    }

    #[test]
    fn test_select_then_back_for_every_district() {
        let service = service();
        let home = service.home();

        for region in service.catalog.regions() {
            let region_ctx = service.select_region(&home, &region.key).unwrap();

            for district in &region.districts {
                let district_ctx = service
                    .select_district(&region_ctx, &district.code)
                    .unwrap();
                assert_eq!(
                    district_ctx.state,
                    NavigationState::district(&region.key, &district.code)
                );

                let back = service.go_back(&district_ctx);
                assert_eq!(back.state, NavigationState::region(&region.key));

                let back_again = service.go_back(&back);
                assert_eq!(back_again.state, NavigationState::Home);
            }
        }
    }

    #[test]
    fn test_go_home_is_idempotent() {
        let service = service();
        let start = service.select_region(&service.home(), "navoiy").unwrap();
        let start = service.select_district(&start, "zarafshan").unwrap();

        let once = service.go_home(&start);
        let twice = service.go_home(&once);

        assert_eq!(once.state, NavigationState::Home);
        assert_eq!(twice.state, NavigationState::Home);
        assert_eq!(service.viewport(&once), home_viewport());
        assert_eq!(service.viewport(&twice), home_viewport());
    }

    #[test]
    fn test_go_home_clears_search() {
        let service = service();
        let ctx = service.set_search(&service.home(), "chirchiq").unwrap();
        assert_eq!(service.go_home(&ctx).search, "");
    }

    #[test]
    fn test_go_back_from_home_stays_home() {
        let service = service();
        assert_eq!(service.go_back(&service.home()).state, NavigationState::Home);
    }

    #[test]
    fn test_unknown_region_is_rejected() {
        let service = service();
        let home = service.home();
        assert_eq!(
            service.select_region(&home, "atlantis"),
            Err(NavigationError::UnknownRegion("atlantis".to_string()))
        );
    }

    #[test]
    fn test_district_requires_open_region() {
        let service = service();
        let home = service.home();
        assert_eq!(
            service.select_district(&home, "mirabad"),
            Err(NavigationError::NoRegionSelected)
        );

        let region = service.select_region(&home, "toshkent_shahar").unwrap();
        let district = service.select_district(&region, "mirabad").unwrap();
        assert_eq!(
            service.select_district(&district, "bektemir"),
            Err(NavigationError::NoRegionSelected)
        );
    }

    #[test]
    fn test_district_of_other_region_is_rejected() {
        let service = service();
        let region = service.select_region(&service.home(), "andijon").unwrap();
        assert!(matches!(
            service.select_district(&region, "mirabad"),
            Err(NavigationError::UnknownDistrict { .. })
        ));
    }

    #[test]
    fn test_map_click_on_region_layer() {
        let service = service();
        let next = service
            .activate_feature(&service.home(), "Samarqand vil.")
            .unwrap()
            .unwrap();
        assert_eq!(next.state, NavigationState::region("samarqand"));
    }

    #[test]
    fn test_map_click_on_district_layer() {
        let service = service();
        let region = service.select_region(&service.home(), "toshkent_shahar").unwrap();
        let next = service
            .activate_feature(&region, "Bektemir sh.")
            .unwrap()
            .unwrap();
        assert_eq!(next.state, NavigationState::district("toshkent_shahar", "bektemir"));
    }

    #[test]
    fn test_unresolved_map_click_is_noop() {
        let service = service();
        let home = service.home();
        assert_eq!(service.activate_feature(&home, "Atlantis vil.").unwrap(), None);

        let region = service.select_region(&home, "andijon").unwrap();
        assert_eq!(service.activate_feature(&region, "Nukus").unwrap(), None);
    }

    #[test]
    fn test_map_click_ignored_while_map_hidden() {
        let service = service();
        let region = service.select_region(&service.home(), "andijon").unwrap();
        let district = service.select_district(&region, "asaka").unwrap();
        assert_eq!(service.activate_feature(&district, "Andijon vil.").unwrap(), None);
    }

    #[test]
    fn test_active_map_layer() {
        let service = service();
        let home = service.home();
        assert_eq!(service.active_map_layer(&home), MapLayer::Regions);

        let region = service.select_region(&home, "jizzax").unwrap();
        assert_eq!(
            service.active_map_layer(&region),
            MapLayer::Districts {
                region_key: "jizzax".to_string()
            }
        );

        let district = service.select_district(&region, "zaamin").unwrap();
        assert_eq!(service.active_map_layer(&district), MapLayer::Hidden);
    }

    #[test]
    fn test_home_view_is_filtered_by_search() {
        let service = service();
        let ctx = service.set_search(&service.home(), "Xiva").unwrap();

        match service.active_view(&ctx).unwrap() {
            ActiveView::Home { regions } => {
                let keys: Vec<&str> = regions.iter().map(|r| r.key.as_str()).collect();
                assert_eq!(keys, vec!["xorazm"]);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_search_too_long_is_rejected() {
        let service = service();
        let query = "a".repeat(201);
        assert!(matches!(
            service.set_search(&service.home(), &query),
            Err(NavigationError::InvalidContext(_))
        ));
    }

    #[test]
    fn test_breadcrumbs() {
        let service = service();
        let home = service.home();
        assert_eq!(
            service.breadcrumbs(&home),
            vec![Breadcrumb::current("Bosh sahifa")]
        );

        let region = service.select_region(&home, "andijon").unwrap();
        let district = service.select_district(&region, "andijan").unwrap();
        assert_eq!(
            service.breadcrumbs(&district),
            vec![
                Breadcrumb::link("Bosh sahifa", NavigationAction::GoHome),
                Breadcrumb::link("Andijon viloyati", NavigationAction::GoBack),
                Breadcrumb::current("Andijon sh."),
            ]
        );
    }

    #[test]
    fn test_validate_rejects_foreign_keys() {
        let service = service();
        let bad_region = NavigationContext::new(NavigationState::region("atlantis"));
        assert!(matches!(
            service.validate(&bad_region),
            Err(NavigationError::InvalidContext(_))
        ));

        let bad_district = NavigationContext::new(NavigationState::district("andijon", "mirabad"));
        assert!(matches!(
            service.validate(&bad_district),
            Err(NavigationError::InvalidContext(_))
        ));
    }

    #[test]
    fn test_transition_reports_noop() {
        let service = service();
        let snapshot = service
            .transition(
                service.home(),
                NavigationAction::MapClick {
                    label: "Atlantis vil.".to_string(),
                },
            )
            .unwrap();
        assert!(!snapshot.applied);
        assert_eq!(snapshot.context.state, NavigationState::Home);
        assert_eq!(snapshot.viewport, home_viewport());
    }

    #[test]
    fn test_rejected_transition_leaves_context_untouched() {
        let service = service();
        let ctx = service.set_search(&service.home(), "buxoro").unwrap();
        let before = ctx.clone();

        let result = service.apply(
            &ctx,
            NavigationAction::SelectRegion {
                region_key: "atlantis".to_string(),
            },
        );
        assert!(result.is_err());
        assert_eq!(ctx, before);
    }
}
