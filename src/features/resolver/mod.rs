//! Administrative resolver feature.
//!
//! Translates the free-text `name` of a boundary dataset feature into a
//! catalog region key (exact match against a literal label table) or a
//! district code (apostrophe-insensitive stem prefix match, first listed
//! district wins). Unresolved labels are reported, never treated as errors.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/resolver/region` | Resolve a region label |
//! | POST | `/api/resolver/regions/{key}/district` | Resolve a district label within a region |

pub mod data;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::ResolverService;
