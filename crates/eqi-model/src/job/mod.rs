use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{TaskEnv, TaskRequirements};

/// Iteration range attached to an iterative job description.
///
/// The scheduler expands the description into `stop - start` near-identical
/// jobs, substituting the iteration index for the `${it}` token wherever it
/// appears in the execution block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iteration {
    pub start: u64,
    pub stop: u64,
}

/// Execution block of a job description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobExecution {
    /// Execution flavor, passed through from the task spec.
    pub model: String,
    /// Executable name of the external entry point.
    pub exec: String,
    /// Argument list handed to the entry point.
    pub args: Vec<String>,
    /// Working directory the scheduler starts the process in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wd: Option<PathBuf>,
    /// File capturing the process standard output.
    pub stdout: String,
    /// File capturing the process standard error.
    pub stderr: String,
    /// Extra environment variables for the process.
    #[serde(default, skip_serializing_if = "TaskEnv::is_empty")]
    pub env: TaskEnv,
}

/// Dependency block: names of jobs that must complete before this one starts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependencies {
    pub after: Vec<String>,
}

/// A fully concrete, scheduler-ready unit of work.
///
/// `name` doubles as the scheduler's identifier and as the token other jobs
/// reference in their dependency lists, so it must be unique within a batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescription {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration: Option<Iteration>,
    pub execution: JobExecution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<TaskRequirements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Dependencies>,
}

impl JobDescription {
    /// Names of the jobs this one waits for; empty when independent.
    pub fn depends_on(&self) -> &[String] {
        self.dependencies
            .as_ref()
            .map(|d| d.after.as_slice())
            .unwrap_or(&[])
    }
}
