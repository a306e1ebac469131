//! Service layer for client type resolution.
//!
//! Provides [`ClientTypeResolver`], which labels a client by its declared
//! type, then by its variant name, and finally by a generated identifier.

use crate::client::{
    domain::{
        ClientDomainError, ClientLabel, FallbackStrategy, LabelSource, ResolvedLabel,
        ResolverConfig,
    },
    ports::Client,
};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};
use uuid::Uuid;

/// Substring removed from normalised variant names.
const CLIENT_SUFFIX: &str = "client";

/// Marker carried by generic object type names.
const GENERIC_OBJECT_MARKER: &str = "Object";

/// Resolves client instances to short labels.
///
/// Resolution never fails. Rules are applied in order and the first match
/// wins:
///
/// 1. a non-empty declared type, returned verbatim;
/// 2. an informative variant name, lower-cased with the first `"client"`
///    removed (a variant named `Client` yields the empty label);
/// 3. the configured prefix followed by a generated identifier.
#[derive(Debug)]
pub struct ClientTypeResolver<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
    config: ResolverConfig,
    sequence: AtomicU64,
}

impl<C> ClientTypeResolver<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a resolver with the default configuration.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            config: ResolverConfig::default(),
            sequence: AtomicU64::new(0),
        }
    }

    /// Creates a resolver with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientDomainError::EmptyFallbackPrefix`] when the
    /// configuration has an empty fallback prefix.
    pub fn with_config(clock: Arc<C>, config: ResolverConfig) -> Result<Self, ClientDomainError> {
        config.validate()?;
        Ok(Self {
            clock,
            config,
            sequence: AtomicU64::new(0),
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves a client to its label.
    #[must_use]
    pub fn resolve(&self, client: &dyn Client) -> ClientLabel {
        self.resolve_detailed(client).into_label()
    }

    /// Resolves a client to its label and reports which rule matched.
    #[must_use]
    pub fn resolve_detailed(&self, client: &dyn Client) -> ResolvedLabel {
        let resolved = declared_label(client)
            .map(|label| ResolvedLabel::new(label, LabelSource::Declared))
            .or_else(|| {
                variant_label(client).map(|label| ResolvedLabel::new(label, LabelSource::Variant))
            })
            .unwrap_or_else(|| ResolvedLabel::new(self.fallback_label(), LabelSource::Fallback));

        debug!(
            label = %resolved.label(),
            source = %resolved.source(),
            "resolved client type"
        );
        resolved
    }

    fn fallback_label(&self) -> ClientLabel {
        let suffix = match self.config.fallback() {
            FallbackStrategy::Timestamp => {
                let millis = self.clock.utc().timestamp_millis();
                u64::try_from(millis).unwrap_or(0).to_string()
            }
            FallbackStrategy::Sequence => {
                let next = self.sequence.fetch_add(1, Ordering::Relaxed).saturating_add(1);
                next.to_string()
            }
            FallbackStrategy::Random => Uuid::new_v4().simple().to_string(),
        };
        ClientLabel::generated(self.config.fallback_prefix(), &suffix)
    }
}

fn declared_label(client: &dyn Client) -> Option<ClientLabel> {
    client
        .client_type()
        .and_then(|declared| ClientLabel::new(declared).ok())
}

fn variant_label(client: &dyn Client) -> Option<ClientLabel> {
    let name = client.variant_name()?;
    if is_anonymous_variant(name) {
        trace!(variant = name, "ignoring anonymous variant name");
        return None;
    }
    Some(ClientLabel::from_variant(normalize_variant_name(name)))
}

/// Returns `true` for names that say nothing about the client's platform.
fn is_anonymous_variant(name: &str) -> bool {
    name.is_empty() || name.contains(GENERIC_OBJECT_MARKER) || name.contains('{')
}

/// Lower-cases a variant name and removes the first `"client"`.
fn normalize_variant_name(name: &str) -> String {
    name.to_lowercase().replacen(CLIENT_SUFFIX, "", 1)
}

/// Labels a client using the system clock and the default configuration.
///
/// Plain clients with no metadata receive `client_<millis>`; two calls in
/// the same millisecond produce the same label.
#[must_use]
pub fn determine_client_type(client: &dyn Client) -> String {
    ClientTypeResolver::new(Arc::new(DefaultClock))
        .resolve(client)
        .into_inner()
}
