//! Resolver configuration value objects.

use super::{ClientDomainError, ParseFallbackStrategyError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of generated fallback labels.
pub const DEFAULT_FALLBACK_PREFIX: &str = "client_";

/// How the resolver generates labels for clients with no usable metadata.
///
/// [`FallbackStrategy::Timestamp`] collides when two clients resolve within
/// the same millisecond. The other strategies trade the timestamp for
/// uniqueness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStrategy {
    /// Milliseconds since the Unix epoch, read from the resolver clock.
    #[default]
    Timestamp,
    /// Per-resolver counter starting at 1.
    Sequence,
    /// Random v4 UUID in simple form.
    Random,
}

impl FallbackStrategy {
    /// Returns the canonical configuration representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Sequence => "sequence",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for FallbackStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for FallbackStrategy {
    type Error = ParseFallbackStrategyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "timestamp" => Ok(Self::Timestamp),
            "sequence" => Ok(Self::Sequence),
            "random" => Ok(Self::Random),
            _ => Err(ParseFallbackStrategyError(value.to_owned())),
        }
    }
}

/// Resolver settings a host can embed in its own configuration.
///
/// Every field has a default, so an empty object deserialises to the
/// standard `client_<millis>` behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    fallback_prefix: String,
    fallback: FallbackStrategy,
}

impl ResolverConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix for generated fallback labels.
    #[must_use]
    pub fn with_fallback_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.fallback_prefix = prefix.into();
        self
    }

    /// Sets the fallback strategy.
    #[must_use]
    pub const fn with_fallback(mut self, strategy: FallbackStrategy) -> Self {
        self.fallback = strategy;
        self
    }

    /// Returns the fallback prefix.
    #[must_use]
    pub fn fallback_prefix(&self) -> &str {
        &self.fallback_prefix
    }

    /// Returns the fallback strategy.
    #[must_use]
    pub const fn fallback(&self) -> FallbackStrategy {
        self.fallback
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientDomainError::EmptyFallbackPrefix`] when the prefix is
    /// empty.
    pub fn validate(&self) -> Result<(), ClientDomainError> {
        if self.fallback_prefix.is_empty() {
            return Err(ClientDomainError::EmptyFallbackPrefix);
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fallback_prefix: DEFAULT_FALLBACK_PREFIX.to_owned(),
            fallback: FallbackStrategy::default(),
        }
    }
}
