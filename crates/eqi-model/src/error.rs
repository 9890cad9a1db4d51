use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid resource requirements: {0}")]
    InvalidResources(String),

    #[error("unknown task kind: {0}")]
    UnknownTaskKind(String),

    #[error("unknown processing scheme: {0}")]
    UnknownScheme(String),

    #[error("unknown resume level: {0}")]
    UnknownResumeLevel(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
