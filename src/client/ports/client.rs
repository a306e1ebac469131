//! Client capability contract.

use crate::client::domain::RuntimeContext;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for client lifecycle operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Lifecycle contract implemented by every client plugin.
///
/// Only `start` and `stop` are required. The metadata accessors have
/// defaults: no declared type, and the implementing type's own name as the
/// variant name.
#[async_trait]
pub trait Client: Send + Sync {
    /// Starts the client, optionally bound to an agent runtime.
    async fn start(&self, runtime: Option<&RuntimeContext>) -> ClientResult<()>;

    /// Stops the client.
    async fn stop(&self, runtime: Option<&RuntimeContext>) -> ClientResult<()>;

    /// Returns the declared client type, if any.
    ///
    /// The value is fixed at construction. First-class clients return
    /// their [`ClientKind`](crate::client::domain::ClientKind) label here.
    fn client_type(&self) -> Option<&str> {
        None
    }

    /// Returns the name of the concrete variant that produced this client.
    ///
    /// Defaults to the unqualified Rust type name with generic arguments
    /// removed, so `my_crate::bots::FooClient<T>` reports `FooClient`.
    fn variant_name(&self) -> Option<&str> {
        Some(short_type_name(std::any::type_name::<Self>()))
    }
}

/// Strips the module path and generic arguments from a type name.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Errors returned by client lifecycle operations.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The client failed to start.
    #[error("client failed to start: {0}")]
    Startup(Arc<dyn std::error::Error + Send + Sync>),

    /// The client failed to stop cleanly.
    #[error("client failed to stop: {0}")]
    Shutdown(Arc<dyn std::error::Error + Send + Sync>),
}

impl ClientError {
    /// Wraps a startup failure.
    pub fn startup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Startup(Arc::new(err))
    }

    /// Wraps a shutdown failure.
    pub fn shutdown(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Shutdown(Arc::new(err))
    }
}
