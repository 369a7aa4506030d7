mod error;
mod state;
mod view;

pub use error::NavigationError;
pub use state::{NavigationAction, NavigationContext, NavigationState};
pub use view::{ActiveView, Breadcrumb, MapLayer, NavigationSnapshot, Viewport};
