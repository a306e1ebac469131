//! Application services for client type identification.

mod resolver;

pub use resolver::{ClientTypeResolver, determine_client_type};
