//! Port contracts for client plugins.
//!
//! Ports define the capability set the runtime expects from every client
//! integration.

pub mod client;

pub use client::{Client, ClientError, ClientResult};
