use thiserror::Error;

use crate::campaign::CampaignError;
use crate::pilot::PilotError;
use crate::state::StateError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no task spec registered for: {0}")]
    MissingTask(String),

    #[error("more than one task spec registered for kind '{0}', lookup needs a name")]
    AmbiguousTask(String),

    #[error("task spec '{spec}' is missing required parameter '{param}'")]
    MissingParam { spec: String, param: &'static str },

    #[error("task kind '{0}' cannot be submitted")]
    UnsupportedKind(String),

    #[error("iterative scheme requires contiguous integer sample keys: {0}")]
    NonContiguousKeys(String),

    #[error("terminated on caller request")]
    Interrupted,

    #[error("pilot-job manager error: {0}")]
    Pilot(PilotError),

    #[error("campaign error: {0}")]
    Campaign(#[from] CampaignError),

    #[error("state file error: {0}")]
    State(#[from] StateError),
}

impl From<PilotError> for CoreError {
    fn from(err: PilotError) -> Self {
        match err {
            PilotError::Interrupted => CoreError::Interrupted,
            other => CoreError::Pilot(other),
        }
    }
}
