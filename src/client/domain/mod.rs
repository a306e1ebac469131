//! Domain model for client type identification.
//!
//! Labels, platform kinds, and resolver configuration live here. Nothing in
//! the domain touches the clock or the runtime directly.

mod config;
mod context;
mod error;
mod kind;
mod label;
mod resolution;

pub use config::{DEFAULT_FALLBACK_PREFIX, FallbackStrategy, ResolverConfig};
pub use context::RuntimeContext;
pub use error::{ClientDomainError, ParseFallbackStrategyError};
pub use kind::ClientKind;
pub use label::ClientLabel;
pub use resolution::{LabelSource, ResolvedLabel};
