mod resolver_dto;

pub use resolver_dto::*;
