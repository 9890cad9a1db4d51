//! Task spec registry.
//!
//! Specs are stored under their explicit name with the kind as metadata, so
//! two independently configured specs of the same kind can coexist as long
//! as lookups that need to tell them apart use names.

use std::collections::BTreeMap;

use tracing::debug;

use eqi_model::{TaskKind, TaskSpec};

use crate::error::CoreError;

/// Lookup key for a registered spec.
///
/// By-kind lookup is the common path when at most one spec per kind is
/// registered; by-name lookup disambiguates beyond that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskLookup<'a> {
    ByKind(TaskKind),
    ByName(&'a str),
}

/// Name-keyed collection of the task specs registered for a run.
#[derive(Default, Debug, Clone)]
pub struct TaskRegistry {
    specs: BTreeMap<String, TaskSpec>,
}

impl TaskRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spec under its registry name.
    ///
    /// Registering a second spec with the same name silently replaces the
    /// first one.
    pub fn add(&mut self, spec: TaskSpec) {
        let name = spec.registry_name().to_string();
        if self.specs.insert(name.clone(), spec).is_some() {
            debug!(name = %name, "task spec replaced an earlier registration");
        }
    }

    /// Resolve a lookup to a spec.
    ///
    /// Fails when nothing matches, or when a by-kind lookup is ambiguous
    /// because several specs of that kind are registered.
    pub fn get(&self, lookup: &TaskLookup<'_>) -> Result<&TaskSpec, CoreError> {
        match lookup {
            TaskLookup::ByName(name) => self
                .specs
                .get(*name)
                .ok_or_else(|| CoreError::MissingTask((*name).to_string())),
            TaskLookup::ByKind(kind) => {
                let mut matching = self.specs.values().filter(|s| s.kind == *kind);
                let first = matching
                    .next()
                    .ok_or_else(|| CoreError::MissingTask(kind.kind().to_string()))?;
                if matching.next().is_some() {
                    return Err(CoreError::AmbiguousTask(kind.kind().to_string()));
                }
                Ok(first)
            }
        }
    }

    /// Number of registered specs.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
