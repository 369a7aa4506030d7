use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::facilities::handlers;
use crate::features::facilities::services::FacilityService;

/// Create routes for the facilities feature
pub fn routes(service: Arc<FacilityService>) -> Router {
    Router::new()
        .route(
            "/api/regions/{key}/districts/{code}/facility",
            get(handlers::get_facility),
        )
        .with_state(service)
}
