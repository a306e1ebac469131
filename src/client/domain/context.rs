//! Runtime context handed to client lifecycle operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reference to the agent runtime a client is started in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeContext {
    agent_id: Uuid,
    agent_name: String,
}

impl RuntimeContext {
    /// Creates a context for the named agent with a fresh identifier.
    #[must_use]
    pub fn new(agent_name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), agent_name)
    }

    /// Creates a context for an agent with a known identifier.
    #[must_use]
    pub fn with_id(agent_id: Uuid, agent_name: impl Into<String>) -> Self {
        Self {
            agent_id,
            agent_name: agent_name.into(),
        }
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn agent_id(&self) -> Uuid {
        self.agent_id
    }

    /// Returns the agent display name.
    #[must_use]
    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }
}
