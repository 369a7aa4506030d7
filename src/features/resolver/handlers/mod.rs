mod resolver_handler;

pub use resolver_handler::*;
