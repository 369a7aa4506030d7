use utoipa::{Modify, OpenApi};

use crate::features::facilities::{dtos as facilities_dtos, handlers as facilities_handlers};
use crate::features::map::{
    dtos as map_dtos, handlers as map_handlers, models as map_models,
};
use crate::features::navigation::{
    dtos as navigation_dtos, handlers as navigation_handlers, models as navigation_models,
};
use crate::features::regions::{
    dtos as regions_dtos, handlers as regions_handlers, models as regions_models,
};
use crate::features::resolver::{dtos as resolver_dtos, handlers as resolver_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_regions,
        regions_handlers::get_region,
        regions_handlers::list_districts,
        // Facilities
        facilities_handlers::get_facility,
        // Resolver
        resolver_handlers::resolve_region,
        resolver_handlers::resolve_district,
        // Navigation
        navigation_handlers::get_home,
        navigation_handlers::apply_transition,
        // Map
        map_handlers::get_region_layer,
        map_handlers::get_district_layer,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Regions
            regions_models::Coordinate,
            regions_dtos::RegionSummaryDto,
            regions_dtos::RegionDetailDto,
            regions_dtos::DistrictResponseDto,
            ApiResponse<Vec<regions_dtos::RegionSummaryDto>>,
            ApiResponse<regions_dtos::RegionDetailDto>,
            ApiResponse<Vec<regions_dtos::DistrictResponseDto>>,
            // Facilities
            facilities_dtos::FacilityResponseDto,
            facilities_dtos::DispensaryDto,
            facilities_dtos::PolyclinicTestDto,
            facilities_dtos::ConclusionDto,
            facilities_dtos::ContactDto,
            facilities_dtos::FaqItemDto,
            ApiResponse<facilities_dtos::FacilityResponseDto>,
            // Resolver
            resolver_dtos::ResolveLabelDto,
            resolver_dtos::RegionResolutionDto,
            resolver_dtos::DistrictResolutionDto,
            ApiResponse<resolver_dtos::RegionResolutionDto>,
            ApiResponse<resolver_dtos::DistrictResolutionDto>,
            // Navigation
            navigation_models::NavigationState,
            navigation_models::NavigationContext,
            navigation_models::NavigationAction,
            navigation_models::MapLayer,
            navigation_models::Viewport,
            navigation_models::Breadcrumb,
            navigation_dtos::TransitionRequestDto,
            navigation_dtos::ActiveViewDto,
            navigation_dtos::MapLayerDto,
            navigation_dtos::NavigationSnapshotDto,
            ApiResponse<navigation_dtos::NavigationSnapshotDto>,
            // Map
            map_models::LayerStyle,
            map_dtos::BoundaryLayerDto,
            ApiResponse<map_dtos::BoundaryLayerDto>,
        )
    ),
    tags(
        (name = "regions", description = "Uzbekistan regions and districts reference catalog"),
        (name = "facilities", description = "Per-district medical examination checklist"),
        (name = "resolver", description = "Boundary feature label resolution"),
        (name = "navigation", description = "Home / region / district view state machine"),
        (name = "map", description = "Styled boundary layers"),
    ),
    info(
        title = "Nikoh Tibbiy Ko'rigi API",
        version = "0.1.0",
        description = "Pre-marriage medical examination navigator for Uzbekistan",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
