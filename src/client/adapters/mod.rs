//! Adapter implementations for client ports.

pub mod anonymous;

pub use anonymous::AnonymousClient;
