//! Uzbekistan administrative regions (viloyatlar) feature.
//!
//! Read-only access to the reference catalog of 14 top-level regions and
//! their districts (tumanlar). The catalog is compiled into the binary and
//! shared by the resolver, navigation and facility features.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions` | List regions, optionally filtered by `search` |
//! | GET | `/api/regions/{key}` | Get a region with its districts |
//! | GET | `/api/regions/{key}/districts` | List districts of a region |

pub mod data;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use models::Catalog;
pub use services::RegionService;
