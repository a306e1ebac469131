//! Switchboard: client plugin identification for an agent runtime.
//!
//! An agent runtime hosts client plugins such as Discord or Telegram bots.
//! This crate defines the capability contract those clients implement and
//! labels each client instance with a short platform string.
//!
//! # Architecture
//!
//! Switchboard follows hexagonal architecture principles:
//!
//! - **Domain**: Labels, platform kinds, and resolver configuration
//! - **Ports**: The [`client::ports::Client`] lifecycle trait
//! - **Adapters**: Concrete client implementations
//! - **Services**: The [`client::services::ClientTypeResolver`]
//!
//! # Modules
//!
//! - [`client`]: Client contract and client type resolution

pub mod client;
