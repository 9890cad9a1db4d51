//! Pilot-job scheduler seam.
//!
//! The external scheduler owns resource allocation, process launching and the
//! job queue. This layer hands it job descriptions and blocks until they are
//! done; everything else stays on the scheduler's side of the trait.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use eqi_model::JobDescription;

#[derive(Debug, Error)]
pub enum PilotError {
    #[error("scheduler connection failed: {0}")]
    Connection(String),

    #[error("job submission rejected: {0}")]
    Rejected(String),

    /// Caller-triggered termination while jobs were in flight.
    ///
    /// Distinct from [`PilotError::Connection`] so that a deliberate
    /// interruption (e.g. for resume testing) is not mistaken for a fault.
    #[error("terminated on caller request")]
    Interrupted,

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for PilotError {
    fn from(e: std::io::Error) -> Self {
        PilotError::Io(e.to_string())
    }
}

pub type PilotResult<T> = Result<T, PilotError>;

/// Handle to a running pilot-job manager instance.
#[async_trait]
pub trait PilotManager: Send {
    /// Hand a batch of job descriptions to the scheduler.
    async fn submit(&mut self, batch: &[JobDescription]) -> PilotResult<()>;

    /// Block until every submitted job has finished.
    async fn wait_for_all(&mut self) -> PilotResult<()>;

    /// Introspect the resources available to the manager.
    async fn resources(&self) -> PilotResult<serde_json::Value>;

    /// Shut the manager down and clean up its service side.
    async fn finish(&mut self) -> PilotResult<()>;
}

/// Factory connecting to the scheduler in one of its two modes.
#[async_trait]
pub trait PilotConnector: Send + Sync {
    /// Start a fresh manager with `work_dir` as its working directory.
    async fn launch(&self, work_dir: &Path) -> PilotResult<Box<dyn PilotManager>>;

    /// Reconnect to the manager of an interrupted run in resume mode.
    ///
    /// `work_dir` is the working directory of the prior run; the scheduler
    /// picks up its own ledger from there and re-runs what never finished.
    async fn resume(&self, work_dir: &Path) -> PilotResult<Box<dyn PilotManager>>;
}
