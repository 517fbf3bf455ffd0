//! Opaque agent handle

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named reference to an agent owned by the execution engine
///
/// Tasks are generic over their agent type, so engines can pass their own
/// executor handles straight through. `AgentRef` is the handle to use when a
/// caller only knows the agent by name, e.g. when serializing tasks for an
/// engine running in another process.
///
/// # Example
///
/// ```
/// use crew_core::AgentRef;
///
/// let agent = AgentRef::new("financial_analyst");
/// assert_eq!(agent.name(), "financial_analyst");
/// assert_eq!(agent.to_string(), "financial_analyst");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentRef {
    name: String,
}

impl AgentRef {
    /// Create a handle for the named agent
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the agent's name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for AgentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for AgentRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for AgentRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}
