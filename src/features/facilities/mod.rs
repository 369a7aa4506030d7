//! District facility checklist feature.
//!
//! Serves the sequence of dispensaries, polyclinic tests, conclusion office,
//! contact and FAQ a couple must go through for the pre-marriage medical
//! examination. Only one district has a verified record; every other district
//! receives that record relabelled and flagged `verified = false`.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/{key}/districts/{code}/facility` | District checklist |

pub mod data;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FacilityService;
