use serde::{Deserialize, Serialize};

use crate::{ResumeLevel, TaskKind, TaskParams, TaskRequirements};

/// Declarative description of one logical task type.
///
/// A `TaskSpec` describes *what* should run for a sample (encoding, the
/// application itself, or both) and with which resources and execution
/// flavor. It is created once per kind before a run, registered with the
/// executor, and then reused read-only by every sample in the batch.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    /// Logical task kind selecting the entry point and argument shape.
    pub kind: TaskKind,
    /// Registry name; defaults to the kind string when not set.
    ///
    /// Explicit names matter only when more than one spec of the same kind
    /// is registered and lookups need to disambiguate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resource requirements handed to the scheduler, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<TaskRequirements>,
    /// Execution flavor (plain process, an MPI variant, ...).
    ///
    /// Opaque pass-through to the scheduler; this layer never interprets it.
    #[serde(default = "default_model")]
    pub model: String,
    /// Cleanup applied to the task's working directory before a resumed
    /// re-run.
    #[serde(default)]
    pub resume_level: ResumeLevel,
    /// Free-form parameters consumed by specific kinds, e.g. the application
    /// command line under [`crate::PARAM_APPLICATION`].
    #[serde(default, skip_serializing_if = "TaskParams::is_empty")]
    pub params: TaskParams,
}

fn default_model() -> String {
    "default".to_string()
}

impl TaskSpec {
    /// Create a spec of the given kind with default settings.
    pub fn new(kind: TaskKind) -> Self {
        Self {
            kind,
            name: None,
            requirements: None,
            model: default_model(),
            resume_level: ResumeLevel::default(),
            params: TaskParams::new(),
        }
    }

    /// Set an explicit registry name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach resource requirements.
    pub fn with_requirements(mut self, requirements: TaskRequirements) -> Self {
        self.requirements = Some(requirements);
        self
    }

    /// Select an execution flavor.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Select a resume level.
    pub fn with_resume_level(mut self, level: ResumeLevel) -> Self {
        self.resume_level = level;
        self
    }

    /// Add a free-form parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Name under which the spec is registered: the explicit name when set,
    /// the kind string otherwise.
    pub fn registry_name(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.kind.kind())
    }
}
