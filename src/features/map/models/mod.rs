mod boundary;
mod feature;
mod style;

pub use boundary::{BoundaryError, BoundarySet};
pub use feature::FeatureLabel;
pub use style::LayerStyle;
