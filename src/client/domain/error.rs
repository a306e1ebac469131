//! Error types for client domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing client domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientDomainError {
    /// The client label is empty.
    #[error("client label must not be empty")]
    EmptyLabel,

    /// The configured fallback prefix is empty.
    #[error("fallback prefix must not be empty")]
    EmptyFallbackPrefix,
}

/// Error returned while parsing a fallback strategy from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown fallback strategy: {0}")]
pub struct ParseFallbackStrategyError(pub String);
