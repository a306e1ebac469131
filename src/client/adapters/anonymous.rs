//! Closure-backed client with no identifying metadata.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::client::{
    domain::RuntimeContext,
    ports::{Client, ClientResult},
};

type LifecycleFn = Arc<dyn Fn(Option<&RuntimeContext>) -> ClientResult<()> + Send + Sync>;

/// Client assembled from a pair of lifecycle closures.
///
/// It declares no type and reports no variant name, so the resolver always
/// labels it through the fallback rule.
#[derive(Clone)]
pub struct AnonymousClient {
    on_start: LifecycleFn,
    on_stop: LifecycleFn,
}

impl AnonymousClient {
    /// Creates a client from start and stop closures.
    #[must_use]
    pub fn new<S, T>(on_start: S, on_stop: T) -> Self
    where
        S: Fn(Option<&RuntimeContext>) -> ClientResult<()> + Send + Sync + 'static,
        T: Fn(Option<&RuntimeContext>) -> ClientResult<()> + Send + Sync + 'static,
    {
        Self {
            on_start: Arc::new(on_start),
            on_stop: Arc::new(on_stop),
        }
    }

    /// Creates a client whose lifecycle operations always succeed.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_| Ok(()), |_| Ok(()))
    }
}

impl Default for AnonymousClient {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for AnonymousClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnonymousClient").finish_non_exhaustive()
    }
}

#[async_trait]
impl Client for AnonymousClient {
    async fn start(&self, runtime: Option<&RuntimeContext>) -> ClientResult<()> {
        (self.on_start)(runtime)
    }

    async fn stop(&self, runtime: Option<&RuntimeContext>) -> ClientResult<()> {
        (self.on_stop)(runtime)
    }

    fn variant_name(&self) -> Option<&str> {
        None
    }
}
