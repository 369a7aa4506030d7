mod interaction;
mod map_service;

pub use interaction::{DistrictLayerInteraction, FeatureInteraction, RegionLayerInteraction};
pub use map_service::MapService;
