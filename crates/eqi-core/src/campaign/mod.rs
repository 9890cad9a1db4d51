//! Campaign collaborator seam.
//!
//! The campaign manager owns the samples, their run directories and their
//! statuses; this layer only reads runs and writes statuses back through the
//! trait below. Concrete implementations wrap the campaign database; tests
//! use in-memory stubs.

use std::path::{Path, PathBuf};

use thiserror::Error;

use eqi_model::SampleKey;

#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("campaign database error: {0}")]
    Db(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for CampaignError {
    fn from(e: std::io::Error) -> Self {
        CampaignError::Io(e.to_string())
    }
}

pub type CampaignResult<T> = Result<T, CampaignError>;

/// Status of a run, in the campaign's own vocabulary.
///
/// The names are opaque to this layer: after a batch completes, runs that
/// were `New` are marked `Encoded`, which signals to the campaign that their
/// data is ready for collation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    New,
    Encoded,
}

/// Per-run data consumed from the campaign.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunInfo {
    /// Directory where encode output lands and execution happens.
    pub run_dir: PathBuf,
}

/// Read/write view of the campaign this orchestrator processes.
pub trait Campaign {
    /// Campaign database backend type descriptor.
    fn db_type(&self) -> &str;

    /// Campaign database location descriptor.
    fn db_location(&self) -> &str;

    /// Name of the campaign.
    fn campaign_name(&self) -> &str;

    /// Name of the campaign's currently active application.
    fn active_app_name(&self) -> &str;

    /// Root directory of the campaign, where working directories are created.
    fn campaign_dir(&self) -> &Path;

    /// All runs of the active sampler, in insertion order.
    fn list_runs(&self) -> CampaignResult<Vec<(SampleKey, RunInfo)>>;

    /// Invoke `f` for every run, optionally restricted to one status.
    fn call_for_each_run(
        &self,
        f: &mut dyn FnMut(&SampleKey, &RunInfo),
        status: Option<RunStatus>,
    ) -> CampaignResult<()>;

    /// Record a new status for the given runs.
    fn set_run_statuses(&self, keys: &[SampleKey], status: RunStatus) -> CampaignResult<()>;

    /// Export the full campaign state to `path`, sufficient to resurrect an
    /// encoder in an out-of-process task.
    fn save_state(&self, path: &Path) -> CampaignResult<()>;
}
