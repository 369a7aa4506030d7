use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::resolver::handlers;
use crate::features::resolver::services::ResolverService;

/// Create routes for the resolver feature
pub fn routes(service: Arc<ResolverService>) -> Router {
    Router::new()
        .route("/api/resolver/region", post(handlers::resolve_region))
        .route(
            "/api/resolver/regions/{key}/district",
            post(handlers::resolve_district),
        )
        .with_state(service)
}
