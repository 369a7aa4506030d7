//! Navigation controller feature.
//!
//! Drives the Home → Region → District view hierarchy. The service is
//! stateless across requests: the client posts its current
//! [`NavigationContext`](models::NavigationContext) together with an action
//! and receives the next context plus everything derived from it (active
//! view, active map layer, viewport and breadcrumbs).
//!
//! Map clicks are routed through the active layer's
//! [`FeatureInteraction`](crate::features::map::services::FeatureInteraction),
//! so an unresolved label is reported as `applied = false` instead of an error.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/navigation/home` | Initial snapshot |
//! | POST | `/api/navigation/transitions` | Apply an action to a context |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::NavigationService;
