//! Job description construction.
//!
//! [`TaskBuilder`] turns a registered [`TaskSpec`] plus a concrete target
//! (one sample, or an iteration range covering all samples) into the
//! scheduler-ready [`JobDescription`]. Building has no side effects; the
//! planner decides what to build and in which order.

use std::path::{Path, PathBuf};

use eqi_model::{
    Dependencies, ENCODE_EXEC, ENCODE_EXECUTE_EXEC, ENV_CONFIG, ENV_RESUME_LEVEL, EXECUTE_EXEC,
    ITERATION_TOKEN, Iteration, JobDescription, JobExecution, PARAM_APPLICATION, RUN_KEY_PREFIX,
    TaskEnv, TaskKind, TaskSpec,
};

use crate::campaign::Campaign;
use crate::error::CoreError;

pub(crate) const ENCODE_PREFIX: &str = "encode";
pub(crate) const EXECUTE_PREFIX: &str = "execute";
pub(crate) const COMBINED_PREFIX: &str = "encode_execute";

/// How encoding jobs receive the campaign identity.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncoderArgs {
    /// Pass only the sample key; the out-of-process encoder resurrects the
    /// campaign from the state snapshot persisted in the working directory.
    ///
    /// Preferred: job arguments stay decoupled from campaign internals.
    #[default]
    StateFile,
    /// Pass the full campaign identity inline in the argument list.
    Inline,
}

/// Identity fields an out-of-process encoder needs, captured once from the
/// campaign so the builder does not borrow it.
#[derive(Clone, Debug)]
pub struct CampaignIdentity {
    pub db_type: String,
    pub db_location: String,
    pub campaign_name: String,
    pub active_app_name: String,
}

impl CampaignIdentity {
    /// Snapshot the identity of a campaign.
    pub fn capture(campaign: &dyn Campaign) -> Self {
        Self {
            db_type: campaign.db_type().to_string(),
            db_location: campaign.db_location().to_string(),
            campaign_name: campaign.campaign_name().to_string(),
            active_app_name: campaign.active_app_name().to_string(),
        }
    }
}

/// What one build call targets.
#[derive(Clone, Copy, Debug)]
pub enum JobTarget<'a> {
    /// One concrete sample.
    Sample { key: &'a str, run_dir: &'a Path },
    /// All samples at once, as a scheduler-expanded iteration range.
    Iterative(Iteration),
}

impl JobTarget<'_> {
    /// The sample key, or the substitution token for iterative targets.
    fn key_label(&self) -> String {
        match self {
            JobTarget::Sample { key, .. } => (*key).to_string(),
            JobTarget::Iterative(_) => format!("{RUN_KEY_PREFIX}{ITERATION_TOKEN}"),
        }
    }

    /// The run directory argument, token-based for iterative targets.
    fn run_dir_label(&self) -> String {
        match self {
            JobTarget::Sample { run_dir, .. } => run_dir.display().to_string(),
            JobTarget::Iterative(_) => format!("{RUN_KEY_PREFIX}{ITERATION_TOKEN}"),
        }
    }

    fn iteration(&self) -> Option<Iteration> {
        match self {
            JobTarget::Sample { .. } => None,
            JobTarget::Iterative(range) => Some(*range),
        }
    }
}

pub(crate) fn job_name(prefix: &str, target: &JobTarget<'_>) -> String {
    match target {
        JobTarget::Sample { key, .. } => format!("{prefix}_{key}"),
        // Iterative descriptions stand for the whole batch; the scheduler
        // appends iteration indices itself.
        JobTarget::Iterative(_) => prefix.to_string(),
    }
}

/// Renders task specs into concrete job descriptions.
#[derive(Clone, Debug)]
pub struct TaskBuilder {
    identity: CampaignIdentity,
    work_dir: PathBuf,
    config_file: Option<PathBuf>,
    encoder_args: EncoderArgs,
}

impl TaskBuilder {
    /// Create a builder stamping jobs with the given working directory.
    pub fn new(identity: CampaignIdentity, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            identity,
            work_dir: work_dir.into(),
            config_file: None,
            encoder_args: EncoderArgs::default(),
        }
    }

    /// Source this prelude config file in every job.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Select how encoding jobs receive the campaign identity.
    pub fn with_encoder_args(mut self, mode: EncoderArgs) -> Self {
        self.encoder_args = mode;
        self
    }

    /// Render `spec` for `target`, waiting on the jobs named in `after`.
    pub fn build(
        &self,
        spec: &TaskSpec,
        target: &JobTarget<'_>,
        after: &[String],
    ) -> Result<JobDescription, CoreError> {
        let (prefix, exec, args) = match spec.kind {
            TaskKind::Encoding => (ENCODE_PREFIX, ENCODE_EXEC, self.encode_args(target)),
            TaskKind::Execution => (
                EXECUTE_PREFIX,
                EXECUTE_EXEC,
                self.exec_args(spec, target)?,
            ),
            TaskKind::EncodingAndExecution => {
                let mut args = self.encode_args(target);
                args.extend(self.exec_args(spec, target)?);
                (COMBINED_PREFIX, ENCODE_EXECUTE_EXEC, args)
            }
            TaskKind::Other => {
                return Err(CoreError::UnsupportedKind(spec.kind.kind().to_string()));
            }
        };

        let key_label = target.key_label();
        Ok(JobDescription {
            name: job_name(prefix, target),
            iteration: target.iteration(),
            execution: JobExecution {
                model: spec.model.clone(),
                exec: exec.to_string(),
                args,
                wd: Some(self.work_dir.clone()),
                stdout: format!("{prefix}_{key_label}.stdout"),
                stderr: format!("{prefix}_{key_label}.stderr"),
                env: self.job_env(spec),
            },
            resources: spec.requirements,
            dependencies: (!after.is_empty()).then(|| Dependencies {
                after: after.to_vec(),
            }),
        })
    }

    fn encode_args(&self, target: &JobTarget<'_>) -> Vec<String> {
        let key = target.key_label();
        match self.encoder_args {
            EncoderArgs::StateFile => vec![key],
            EncoderArgs::Inline => vec![
                self.identity.db_type.clone(),
                self.identity.db_location.clone(),
                "FALSE".to_string(),
                self.identity.campaign_name.clone(),
                self.identity.active_app_name.clone(),
                key,
            ],
        }
    }

    fn exec_args(
        &self,
        spec: &TaskSpec,
        target: &JobTarget<'_>,
    ) -> Result<Vec<String>, CoreError> {
        let application =
            spec.params
                .get(PARAM_APPLICATION)
                .ok_or_else(|| CoreError::MissingParam {
                    spec: spec.registry_name().to_string(),
                    param: PARAM_APPLICATION,
                })?;
        Ok(vec![target.run_dir_label(), application.to_string()])
    }

    fn job_env(&self, spec: &TaskSpec) -> TaskEnv {
        let mut env = TaskEnv::single(ENV_RESUME_LEVEL, spec.resume_level.as_env_str());
        if let Some(config) = &self.config_file {
            env.insert(ENV_CONFIG, config.display().to_string());
        }
        env
    }
}
