mod catalog;
mod district;
mod region;

pub use catalog::{normalize_query, Catalog};
pub use district::District;
pub use region::{Coordinate, Region};
