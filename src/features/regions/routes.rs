use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions", get(handlers::list_regions))
        .route("/api/regions/{key}", get(handlers::get_region))
        .route("/api/regions/{key}/districts", get(handlers::list_districts))
        .with_state(service)
}
