use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Degree of automatic working-directory cleanup before a resumed re-run.
///
/// A resumed task restarts in the working directory of the interrupted
/// attempt, where partially written output may be left behind. The level is
/// exported to the task through the `EQI_RESUME_LEVEL` environment variable
/// and interpreted by the external entry points.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResumeLevel {
    /// Automatic recovery is fully disabled.
    #[default]
    Disabled,
    /// Remove a run directory left behind by an unfinished task before the
    /// re-run starts.
    Basic,
    /// Everything `Basic` does, plus restore the recorded pre-run directory
    /// listing by removing files and directories created since.
    Moderate,
}

impl ResumeLevel {
    /// Spelling used in the job environment.
    pub fn as_env_str(&self) -> &'static str {
        match self {
            ResumeLevel::Disabled => "DISABLED",
            ResumeLevel::Basic => "BASIC",
            ResumeLevel::Moderate => "MODERATE",
        }
    }
}

impl FromStr for ResumeLevel {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disabled" | "" => Ok(ResumeLevel::Disabled),
            "basic" => Ok(ResumeLevel::Basic),
            "moderate" => Ok(ResumeLevel::Moderate),
            other => Err(ModelError::UnknownResumeLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResumeLevel;

    #[test]
    fn env_spelling_is_uppercase() {
        assert_eq!(ResumeLevel::Disabled.as_env_str(), "DISABLED");
        assert_eq!(ResumeLevel::Basic.as_env_str(), "BASIC");
        assert_eq!(ResumeLevel::Moderate.as_env_str(), "MODERATE");
    }

    #[test]
    fn from_str_accepts_env_spelling() {
        let level: ResumeLevel = "MODERATE".parse().unwrap();
        assert_eq!(level, ResumeLevel::Moderate);
        assert!("aggressive".parse::<ResumeLevel>().is_err());
    }
}
