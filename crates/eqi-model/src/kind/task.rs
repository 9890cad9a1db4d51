use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Logical type of work a task spec describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskKind {
    /// Render a sample's parameters into an application input file.
    Encoding,
    /// Run the target application inside an encoded run directory.
    Execution,
    /// Both phases combined into a single scheduler job.
    EncodingAndExecution,
    /// Reserved for future task types; not accepted by the builder.
    Other,
}

impl TaskKind {
    /// Returns the kind as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            TaskKind::Encoding => "encoding",
            TaskKind::Execution => "execution",
            TaskKind::EncodingAndExecution => "encoding-and-execution",
            TaskKind::Other => "other",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

impl FromStr for TaskKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "encoding" | "encode" => Ok(TaskKind::Encoding),
            "execution" | "execute" => Ok(TaskKind::Execution),
            "encoding-and-execution" | "encode-execute" => Ok(TaskKind::EncodingAndExecution),
            "other" => Ok(TaskKind::Other),
            other => Err(ModelError::UnknownTaskKind(other.to_string())),
        }
    }
}
