use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Strategy deciding how encode and execute jobs are grouped and ordered
/// across the full set of samples.
///
/// Non-iterative schemes materialize one job description per sample and
/// phase; iterative schemes collapse all samples of a phase into a single
/// description carrying an iteration range, which the scheduler expands on
/// its side. Iterative schemes are only legal when the campaign's sample
/// keys form a contiguous integer sequence.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProcessingScheme {
    /// Submit all encoding jobs first, then all execution jobs, each
    /// execution depending only on its own sample's encoding.
    StepOriented,
    /// One iterative encoding job covering every sample, then one iterative
    /// execution job depending on the whole encoding job.
    StepOrientedIterative,
    /// For each sample in turn, submit its encoding job followed by the
    /// dependent execution job.
    #[default]
    SampleOriented,
    /// One job per sample combining both phases; no dependencies needed.
    SampleOrientedCondensed,
    /// A single iterative job whose every iteration runs both phases for
    /// one sample.
    SampleOrientedCondensedIterative,
    /// Execution jobs only; encoding is assumed to have happened already.
    ExecOnly,
    /// A single iterative job running the execution phase for every sample.
    ExecOnlyIterative,
}

impl ProcessingScheme {
    /// Checks if the scheme materializes iterative jobs.
    pub fn is_iterative(&self) -> bool {
        matches!(
            self,
            ProcessingScheme::StepOrientedIterative
                | ProcessingScheme::SampleOrientedCondensedIterative
                | ProcessingScheme::ExecOnlyIterative
        )
    }

    /// One-line description used in logs and diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            ProcessingScheme::StepOriented => {
                "all encoding jobs for all samples, then all execution jobs"
            }
            ProcessingScheme::StepOrientedIterative => {
                "one iterative encoding job, then one iterative execution job"
            }
            ProcessingScheme::SampleOriented => {
                "encoding and dependent execution jobs, sample by sample"
            }
            ProcessingScheme::SampleOrientedCondensed => {
                "a single combined encode-and-execute job per sample"
            }
            ProcessingScheme::SampleOrientedCondensedIterative => {
                "one iterative job combining both phases per iteration"
            }
            ProcessingScheme::ExecOnly => "execution jobs only, one per sample",
            ProcessingScheme::ExecOnlyIterative => "one iterative execution-only job",
        }
    }
}

impl FromStr for ProcessingScheme {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "step-oriented" => Ok(ProcessingScheme::StepOriented),
            "step-oriented-iterative" => Ok(ProcessingScheme::StepOrientedIterative),
            "sample-oriented" | "" => Ok(ProcessingScheme::SampleOriented),
            "sample-oriented-condensed" => Ok(ProcessingScheme::SampleOrientedCondensed),
            "sample-oriented-condensed-iterative" => {
                Ok(ProcessingScheme::SampleOrientedCondensedIterative)
            }
            "exec-only" => Ok(ProcessingScheme::ExecOnly),
            "exec-only-iterative" => Ok(ProcessingScheme::ExecOnlyIterative),
            other => Err(ModelError::UnknownScheme(other.to_string())),
        }
    }
}
