use thiserror::Error;

use crate::core::error::AppError;

/// Rejected navigation transitions. The caller's context is never modified.
#[derive(Debug, Error, PartialEq)]
pub enum NavigationError {
    #[error("Region with key '{0}' not found")]
    UnknownRegion(String),

    #[error("District '{district_code}' not found in region '{region_key}'")]
    UnknownDistrict {
        region_key: String,
        district_code: String,
    },

    #[error("A district can only be selected while a region is open")]
    NoRegionSelected,

    #[error("Invalid navigation context: {0}")]
    InvalidContext(String),
}

impl From<NavigationError> for AppError {
    fn from(err: NavigationError) -> Self {
        match err {
            NavigationError::UnknownRegion(_) | NavigationError::UnknownDistrict { .. } => {
                AppError::NotFound(err.to_string())
            }
            NavigationError::NoRegionSelected => AppError::Conflict(err.to_string()),
            NavigationError::InvalidContext(_) => AppError::BadRequest(err.to_string()),
        }
    }
}
