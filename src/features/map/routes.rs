use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::map::handlers;
use crate::features::map::services::MapService;

/// Create routes for the map feature
pub fn routes(service: Arc<MapService>) -> Router {
    Router::new()
        .route("/api/map/regions", get(handlers::get_region_layer))
        .route(
            "/api/map/regions/{key}/districts",
            get(handlers::get_district_layer),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::Value;
    use std::collections::HashMap;

    use crate::features::map::models::BoundarySet;
    use crate::features::resolver::ResolverService;
    use crate::shared::test_helpers::{feature_collection, uzbekistan_catalog};

    fn server() -> TestServer {
        let catalog = uzbekistan_catalog();
        let districts: HashMap<_, _> = catalog
            .regions()
            .iter()
            .map(|r| (r.key.clone(), feature_collection(&["Asaka tumani"])))
            .collect();
        let boundaries = BoundarySet::from_collections(
            feature_collection(&["Andijon vil.", "Buxoro vil."]),
            districts,
            &catalog,
        )
        .unwrap();
        let resolver = ResolverService::new(Arc::clone(&catalog));
        let service = Arc::new(MapService::new(&boundaries, &catalog, &resolver).unwrap());
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_get_region_layer() {
        let response = server().get("/api/map/regions").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"]["geojson"]["type"], "FeatureCollection");
        assert_eq!(
            body["data"]["geojson"]["features"][1]["properties"]["target"]["regionKey"],
            "buxoro"
        );
        assert!(body["data"].get("regionKey").is_none());
    }

    #[tokio::test]
    async fn test_get_district_layer() {
        let response = server().get("/api/map/regions/andijon/districts").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["regionKey"], "andijon");
        let properties = &body["data"]["geojson"]["features"][0]["properties"];
        assert_eq!(properties["tooltip"], "Asaka tumani");
        assert_eq!(properties["target"]["districtCode"], "asaka");
        // no Asaka in Xorazm
        let response = server().get("/api/map/regions/xorazm/districts").await;
        let body: Value = response.json();
        assert!(body["data"]["geojson"]["features"][0]["properties"]["target"].is_null());
    }

    #[tokio::test]
    async fn test_get_unknown_district_layer() {
        let response = server().get("/api/map/regions/atlantis/districts").await;
        response.assert_status_not_found();
    }
}
