use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::navigation::handlers;
use crate::features::navigation::services::NavigationService;

/// Create routes for the navigation feature
pub fn routes(service: Arc<NavigationService>) -> Router {
    Router::new()
        .route("/api/navigation/home", get(handlers::get_home))
        .route("/api/navigation/transitions", post(handlers::apply_transition))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::features::resolver::ResolverService;
    use crate::shared::test_helpers::uzbekistan_catalog;

    fn server() -> TestServer {
        let catalog = uzbekistan_catalog();
        let resolver = Arc::new(ResolverService::new(Arc::clone(&catalog)));
        let service = Arc::new(NavigationService::new(catalog, resolver));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_home_snapshot() {
        let response = server().get("/api/navigation/home").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let data = &body["data"];
        assert_eq!(data["state"]["view"], "home");
        assert_eq!(data["view"]["kind"], "home");
        assert_eq!(data["view"]["regions"].as_array().unwrap().len(), 14);
        assert_eq!(data["mapLayer"]["layer"], "regions");
        assert_eq!(data["mapLayer"]["path"], "/api/map/regions");
        assert_eq!(data["viewport"]["center"]["lat"], 42.5);
        assert_eq!(data["viewport"]["zoom"], 6);
        assert_eq!(data["viewport"]["animate"], true);
        assert_eq!(data["breadcrumbs"][0]["label"], "Bosh sahifa");
    }

    #[tokio::test]
    async fn test_select_region_transition() {
        let response = server()
            .post("/api/navigation/transitions")
            .json(&json!({
                "context": { "state": { "view": "home" }, "search": "" },
                "action": { "type": "selectRegion", "regionKey": "sirdaryo" }
            }))
            .await;
        response.assert_status_ok();

        let data = response.json::<Value>()["data"].clone();
        assert_eq!(data["applied"], true);
        assert_eq!(data["state"]["view"], "region");
        assert_eq!(data["state"]["regionKey"], "sirdaryo");
        assert_eq!(data["mapLayer"]["layer"], "districts");
        assert_eq!(data["mapLayer"]["regionKey"], "sirdaryo");
        assert_eq!(data["viewport"]["zoom"], 9);
        assert_eq!(data["breadcrumbs"][0]["action"]["type"], "goHome");
        assert_eq!(data["breadcrumbs"][1]["label"], "Sirdaryo viloyati");
    }

    #[tokio::test]
    async fn test_map_click_selects_district() {
        let response = server()
            .post("/api/navigation/transitions")
            .json(&json!({
                "context": { "state": { "view": "region", "regionKey": "toshkent_shahar" } },
                "action": { "type": "mapClick", "label": "Mirobod sh." }
            }))
            .await;
        response.assert_status_ok();

        let data = response.json::<Value>()["data"].clone();
        assert_eq!(data["state"]["view"], "district");
        assert_eq!(data["state"]["districtCode"], "mirabad");
        assert_eq!(data["view"]["kind"], "district");
        assert_eq!(
            data["view"]["facilityPath"],
            "/api/regions/toshkent_shahar/districts/mirabad/facility"
        );
        assert_eq!(data["mapLayer"]["layer"], "hidden");
        assert!(data["mapLayer"].get("path").is_none());
    }

    #[tokio::test]
    async fn test_unresolved_map_click_is_not_applied() {
        let response = server()
            .post("/api/navigation/transitions")
            .json(&json!({
                "context": { "state": { "view": "home" }, "search": "" },
                "action": { "type": "mapClick", "label": "Atlantis vil." }
            }))
            .await;
        response.assert_status_ok();

        let data = response.json::<Value>()["data"].clone();
        assert_eq!(data["applied"], false);
        assert_eq!(data["state"]["view"], "home");
    }

    #[tokio::test]
    async fn test_unknown_region_is_404() {
        let response = server()
            .post("/api/navigation/transitions")
            .json(&json!({
                "context": { "state": { "view": "home" } },
                "action": { "type": "selectRegion", "regionKey": "atlantis" }
            }))
            .await;
        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_district_without_region_is_409() {
        let response = server()
            .post("/api/navigation/transitions")
            .json(&json!({
                "context": { "state": { "view": "home" } },
                "action": { "type": "selectDistrict", "districtCode": "mirabad" }
            }))
            .await;
        response.assert_status(axum::http::StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_invalid_context_is_400() {
        let response = server()
            .post("/api/navigation/transitions")
            .json(&json!({
                "context": { "state": { "view": "region", "regionKey": "atlantis" } },
                "action": { "type": "goBack" }
            }))
            .await;
        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_search_filters_home_view() {
        let response = server()
            .post("/api/navigation/transitions")
            .json(&json!({
                "action": { "type": "search", "query": "nukus" }
            }))
            .await;
        response.assert_status_ok();

        let data = response.json::<Value>()["data"].clone();
        assert_eq!(data["search"], "nukus");
        assert_eq!(data["view"]["regions"][0]["key"], "qoraqalpogiston");
        assert_eq!(data["view"]["regions"].as_array().unwrap().len(), 1);
    }
}
