//! On-disk submission state.
//!
//! One small JSON object per working directory records how far a run got
//! (`submitted`, `completed`) together with a snapshot of the campaign
//! identity, enough for out-of-process tasks to resurrect an encoder and for
//! a later orchestrator instance to decide whether the run is resumable.
//!
//! Updates are read-merge-write and assume a single writer per directory;
//! two orchestrators pointed at the same working directory violate that
//! precondition and are not handled.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::campaign::Campaign;
use crate::error::CoreError;

/// File holding the submission state blob.
pub const STATE_FILE_NAME: &str = ".eqi_state.json";

/// File holding the full campaign-state export written by [`StateKeeper::setup`].
pub const CAMPAIGN_STATE_FILE_NAME: &str = ".eqi_campaign_state.json";

/// Key of the submitted flag in the state blob.
pub const KEY_SUBMITTED: &str = "submitted";

/// Key of the completed flag in the state blob.
pub const KEY_COMPLETED: &str = "completed";

#[derive(Debug, Error)]
pub enum StateError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed state file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Reads and merges the per-working-directory state blob.
#[derive(Debug, Clone)]
pub struct StateKeeper {
    directory: PathBuf,
}

impl StateKeeper {
    /// Attach to (not create) a working directory.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The working directory this keeper reads and writes.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Snapshot the campaign identity into the state blob and export the
    /// full campaign state alongside it.
    pub fn setup(&self, campaign: &dyn Campaign) -> Result<(), CoreError> {
        let mut snapshot = Map::new();
        snapshot.insert(
            "campaign_db_location".to_string(),
            Value::from(campaign.db_location()),
        );
        snapshot.insert(
            "campaign_db_type".to_string(),
            Value::from(campaign.db_type()),
        );
        snapshot.insert("campaign_write_to_db".to_string(), Value::from("FALSE"));
        snapshot.insert(
            "campaign_name".to_string(),
            Value::from(campaign.campaign_name()),
        );
        snapshot.insert(
            "campaign_active_app_name".to_string(),
            Value::from(campaign.active_app_name()),
        );
        self.write(&snapshot)?;

        campaign.save_state(&self.directory.join(CAMPAIGN_STATE_FILE_NAME))?;
        Ok(())
    }

    /// Read the state blob; an absent file reads as an empty object.
    pub fn read(&self) -> Result<Map<String, Value>, StateError> {
        let path = self.state_file();
        if !path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Merge a partial mapping into the on-disk blob.
    pub fn write(&self, partial: &Map<String, Value>) -> Result<(), StateError> {
        let mut state = self.read()?;
        for (key, value) in partial {
            state.insert(key.clone(), value.clone());
        }
        fs::write(self.state_file(), serde_json::to_string(&state)?)?;
        debug!(dir = %self.directory.display(), keys = partial.len(), "state file updated");
        Ok(())
    }

    /// Record whether the batch was handed to the scheduler.
    pub fn mark_submitted(&self, submitted: bool) -> Result<(), StateError> {
        let mut partial = Map::new();
        partial.insert(KEY_SUBMITTED.to_string(), Value::from(submitted));
        self.write(&partial)
    }

    /// Record that the wait finished and the campaign was synced.
    pub fn mark_completed(&self) -> Result<(), StateError> {
        let mut partial = Map::new();
        partial.insert(KEY_COMPLETED.to_string(), Value::from(true));
        self.write(&partial)
    }

    /// Whether the recorded run was submitted but never completed.
    pub fn is_resumable(&self) -> bool {
        let Ok(state) = self.read() else {
            return false;
        };
        let flag = |key: &str| state.get(key).and_then(Value::as_bool).unwrap_or(false);
        flag(KEY_SUBMITTED) && !flag(KEY_COMPLETED)
    }

    fn state_file(&self) -> PathBuf {
        self.directory.join(STATE_FILE_NAME)
    }
}
