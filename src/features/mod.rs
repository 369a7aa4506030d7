pub mod facilities;
pub mod map;
pub mod navigation;
pub mod regions;
pub mod resolver;
