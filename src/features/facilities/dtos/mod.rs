mod facility_dto;

pub use facility_dto::*;
