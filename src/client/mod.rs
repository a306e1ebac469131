//! Client type identification for the agent runtime.
//!
//! Client plugins (Discord, Telegram, custom integrations) expose
//! asynchronous `start` and `stop` operations. The runtime labels each
//! client instance with a short string naming the platform it represents.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Resolution services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

pub use services::determine_client_type;

#[cfg(test)]
mod tests;
