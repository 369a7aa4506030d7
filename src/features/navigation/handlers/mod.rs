mod navigation_handler;

pub use navigation_handler::*;
