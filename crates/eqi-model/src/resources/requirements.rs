use serde::{Deserialize, Serialize};

use super::Resources;
use crate::error::{ModelError, ModelResult};

/// Resource requirements for one task, covering cores and/or nodes.
///
/// Cores and nodes are independent; either may be omitted but not both.
/// Serializes to the scheduler's resource block
/// (`{"numCores": {...}, "numNodes": {...}}`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequirements {
    #[serde(rename = "numCores", skip_serializing_if = "Option::is_none")]
    cores: Option<Resources>,
    #[serde(rename = "numNodes", skip_serializing_if = "Option::is_none")]
    nodes: Option<Resources>,
}

impl TaskRequirements {
    /// Combine core and node requests; at least one must be given.
    pub fn new(cores: Option<Resources>, nodes: Option<Resources>) -> ModelResult<Self> {
        if cores.is_none() && nodes.is_none() {
            return Err(ModelError::InvalidResources(
                "at least one of 'cores' or 'nodes' must be specified".to_string(),
            ));
        }
        Ok(Self { cores, nodes })
    }

    /// Request an exact number of cores, the most common case.
    pub fn cores_exact(count: u64) -> ModelResult<Self> {
        Self::new(Some(Resources::builder().exact(count).build()?), None)
    }

    /// The core request, if any.
    pub fn cores(&self) -> Option<&Resources> {
        self.cores.as_ref()
    }

    /// The node request, if any.
    pub fn nodes(&self) -> Option<&Resources> {
        self.nodes.as_ref()
    }
}
