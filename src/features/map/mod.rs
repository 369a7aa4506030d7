//! Map layers feature.
//!
//! Loads the boundary datasets from `BOUNDARY_DATA_DIR` at startup, checks
//! that the district layers correspond 1:1 with the catalog regions, and
//! serves each layer as GeoJSON with per-feature style, hover style, tooltip
//! and click target precomputed by the layer's [`services::FeatureInteraction`].
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/map/regions` | Nationwide region layer |
//! | GET | `/api/map/regions/{key}/districts` | District layer of a region |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::BoundarySet;
pub use services::MapService;
