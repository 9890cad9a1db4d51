//! Batch planning.
//!
//! Maps a [`ProcessingScheme`] over the campaign's runs to the exact ordered
//! sequence of job descriptions handed to the scheduler in one submission.
//! Planning is deterministic; ordering between jobs is expressed exclusively
//! through dependency edges, never through submission order.

use tracing::debug;

use eqi_model::{
    Iteration, JobDescription, ProcessingScheme, RUN_KEY_PREFIX, SampleKey, TaskKind,
};

use crate::builder::{ENCODE_PREFIX, JobTarget, TaskBuilder, job_name};
use crate::campaign::RunInfo;
use crate::error::CoreError;
use crate::registry::{TaskLookup, TaskRegistry};

/// Materialize the full batch for `scheme` over `runs`.
///
/// An empty run set yields an empty batch; iterative schemes additionally
/// require the sample keys to form a contiguous integer sequence.
pub fn plan_batch(
    scheme: ProcessingScheme,
    registry: &TaskRegistry,
    builder: &TaskBuilder,
    runs: &[(SampleKey, RunInfo)],
) -> Result<Vec<JobDescription>, CoreError> {
    if runs.is_empty() {
        debug!("no runs to plan");
        return Ok(Vec::new());
    }

    let mut batch = Vec::new();
    match scheme {
        ProcessingScheme::StepOriented => {
            let encoding = registry.get(&TaskLookup::ByKind(TaskKind::Encoding))?;
            let execution = registry.get(&TaskLookup::ByKind(TaskKind::Execution))?;
            for (key, info) in runs {
                batch.push(builder.build(encoding, &sample_target(key, info), &[])?);
            }
            for (key, info) in runs {
                let target = sample_target(key, info);
                let after = vec![job_name(ENCODE_PREFIX, &target)];
                batch.push(builder.build(execution, &target, &after)?);
            }
        }
        ProcessingScheme::SampleOriented => {
            let encoding = registry.get(&TaskLookup::ByKind(TaskKind::Encoding))?;
            let execution = registry.get(&TaskLookup::ByKind(TaskKind::Execution))?;
            for (key, info) in runs {
                let target = sample_target(key, info);
                batch.push(builder.build(encoding, &target, &[])?);
                let after = vec![job_name(ENCODE_PREFIX, &target)];
                batch.push(builder.build(execution, &target, &after)?);
            }
        }
        ProcessingScheme::SampleOrientedCondensed => {
            let combined = registry.get(&TaskLookup::ByKind(TaskKind::EncodingAndExecution))?;
            for (key, info) in runs {
                batch.push(builder.build(combined, &sample_target(key, info), &[])?);
            }
        }
        ProcessingScheme::ExecOnly => {
            let execution = registry.get(&TaskLookup::ByKind(TaskKind::Execution))?;
            for (key, info) in runs {
                batch.push(builder.build(execution, &sample_target(key, info), &[])?);
            }
        }
        ProcessingScheme::StepOrientedIterative => {
            let encoding = registry.get(&TaskLookup::ByKind(TaskKind::Encoding))?;
            let execution = registry.get(&TaskLookup::ByKind(TaskKind::Execution))?;
            let target = JobTarget::Iterative(iteration_range(runs)?);
            batch.push(builder.build(encoding, &target, &[])?);
            // The scheduler cannot express per-iteration dependencies across
            // two iterative jobs; the execution job waits for the whole
            // encoding job.
            let after = vec![job_name(ENCODE_PREFIX, &target)];
            batch.push(builder.build(execution, &target, &after)?);
        }
        ProcessingScheme::SampleOrientedCondensedIterative => {
            let combined = registry.get(&TaskLookup::ByKind(TaskKind::EncodingAndExecution))?;
            let target = JobTarget::Iterative(iteration_range(runs)?);
            batch.push(builder.build(combined, &target, &[])?);
        }
        ProcessingScheme::ExecOnlyIterative => {
            let execution = registry.get(&TaskLookup::ByKind(TaskKind::Execution))?;
            let target = JobTarget::Iterative(iteration_range(runs)?);
            batch.push(builder.build(execution, &target, &[])?);
        }
    }

    debug!(scheme = scheme.description(), jobs = batch.len(), "batch planned");
    Ok(batch)
}

fn sample_target<'a>(key: &'a SampleKey, info: &'a RunInfo) -> JobTarget<'a> {
    JobTarget::Sample {
        key: key.as_str(),
        run_dir: &info.run_dir,
    }
}

/// Derive the iteration range covered by `runs`.
///
/// Sample keys must all be of the form `Run_<n>` and their indices must form
/// a contiguous range; sparse or non-numeric keys cannot be expressed as a
/// scheduler-side iteration and are a configuration error.
fn iteration_range(runs: &[(SampleKey, RunInfo)]) -> Result<Iteration, CoreError> {
    let mut indices = Vec::with_capacity(runs.len());
    for (key, _) in runs {
        let index = key
            .strip_prefix(RUN_KEY_PREFIX)
            .and_then(|suffix| suffix.parse::<u64>().ok())
            .ok_or_else(|| {
                CoreError::NonContiguousKeys(format!(
                    "sample key '{key}' is not of the form {RUN_KEY_PREFIX}<n>"
                ))
            })?;
        indices.push(index);
    }

    indices.sort_unstable();
    for pair in indices.windows(2) {
        if pair[1] != pair[0] + 1 {
            return Err(CoreError::NonContiguousKeys(format!(
                "gap between {RUN_KEY_PREFIX}{} and {RUN_KEY_PREFIX}{}",
                pair[0], pair[1]
            )));
        }
    }

    let start = indices[0];
    let stop = indices[indices.len() - 1] + 1;
    Ok(Iteration { start, stop })
}
