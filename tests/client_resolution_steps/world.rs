//! Shared world state for client type resolution BDD scenarios.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::fixture;
use switchboard::client::{
    domain::{ResolvedLabel, ResolverConfig, RuntimeContext},
    ports::{Client, ClientResult},
    services::ClientTypeResolver,
};

/// Resolver type used by the BDD world.
pub type TestResolver = ClientTypeResolver<DefaultClock>;

/// Client whose metadata is chosen by the scenario.
pub struct ScenarioClient {
    /// Declared client type, if any.
    pub declared: Option<String>,
    /// Reported variant name, if any.
    pub variant: Option<String>,
}

#[async_trait]
impl Client for ScenarioClient {
    async fn start(&self, _runtime: Option<&RuntimeContext>) -> ClientResult<()> {
        Ok(())
    }

    async fn stop(&self, _runtime: Option<&RuntimeContext>) -> ClientResult<()> {
        Ok(())
    }

    fn client_type(&self) -> Option<&str> {
        self.declared.as_deref()
    }

    fn variant_name(&self) -> Option<&str> {
        self.variant.as_deref()
    }
}

/// Scenario world for client type resolution behaviour tests.
pub struct ResolutionWorld {
    /// Resolver configuration applied when the scenario resolves.
    pub config: ResolverConfig,
    /// Client under test.
    pub client: Option<Box<dyn Client>>,
    /// Resolutions in the order they were produced.
    pub resolved: Vec<ResolvedLabel>,
}

impl ResolutionWorld {
    /// Creates a world with the default resolver configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ResolverConfig::default(),
            client: None,
            resolved: Vec::new(),
        }
    }

    /// Builds a resolver from the scenario configuration.
    pub fn resolver(&self) -> Result<TestResolver, eyre::Report> {
        ClientTypeResolver::with_config(Arc::new(DefaultClock), self.config.clone())
            .map_err(|err| eyre::eyre!("invalid resolver config: {err}"))
    }

    /// Returns the most recent resolution.
    pub fn last_resolved(&self) -> Result<&ResolvedLabel, eyre::Report> {
        self.resolved
            .last()
            .ok_or_else(|| eyre::eyre!("no resolution recorded in scenario world"))
    }
}

impl Default for ResolutionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ResolutionWorld {
    ResolutionWorld::default()
}
