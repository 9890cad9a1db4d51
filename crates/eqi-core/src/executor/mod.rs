//! Submission orchestration.
//!
//! [`Executor`] drives one batch through the external scheduler: decide
//! whether an interrupted run can be resumed, otherwise plan and submit a
//! fresh batch, block until everything finished, then sync the campaign and
//! record completion. The executor itself is sequential; all parallelism
//! lives on the scheduler's side.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use eqi_model::{ENV_CONFIG, ProcessingScheme, TaskSpec};

use crate::builder::{CampaignIdentity, EncoderArgs, TaskBuilder};
use crate::campaign::{Campaign, RunStatus};
use crate::error::CoreError;
use crate::pilot::{PilotConnector, PilotManager};
use crate::plan::plan_batch;
use crate::registry::TaskRegistry;
use crate::state::{KEY_COMPLETED, KEY_SUBMITTED, StateError, StateKeeper};

/// Prefix of working directories created inside the campaign directory.
pub const WORK_DIR_PREFIX: &str = ".eqi-";

/// Phase the executor is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecutorState {
    /// Constructed, nothing decided yet.
    Init,
    /// Reconnecting to an interrupted run.
    Resuming,
    /// Building and submitting a new batch.
    Fresh,
    /// Batch is with the scheduler, waiting for completion.
    Submitted,
    /// Wait returned and the campaign was synced.
    Completed,
}

/// What a finished run did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// A batch was submitted (or reconnected to) and waited to completion.
    Completed,
    /// The scheme produced zero jobs; nothing was handed to the scheduler.
    NothingToSubmit,
}

/// Why a resume check routed to a fresh run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FreshReason {
    /// No prior working directory exists for this campaign.
    NoPriorWorkDir,
    /// A prior directory exists but its batch was never submitted.
    NeverSubmitted,
    /// The prior run already completed.
    AlreadyCompleted,
}

/// Outcome of the resume check; a routing decision, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResumeDecision {
    /// Reconnect to the scheduler in this working directory.
    Resume(PathBuf),
    /// Start a new run.
    StartFresh(FreshReason),
}

/// Route a run to resume or fresh based on prior working directories.
///
/// Scans the campaign directory for `.eqi-*` working directories and picks
/// the first, in name order, whose state file records a submitted but not
/// yet completed batch. The working directory is trusted as written; job
/// identities inside it are not re-validated against the scheduler's ledger.
pub fn resume_decision(campaign_dir: &Path) -> ResumeDecision {
    let Ok(entries) = fs::read_dir(campaign_dir) else {
        return ResumeDecision::StartFresh(FreshReason::NoPriorWorkDir);
    };

    let mut work_dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_dir()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(WORK_DIR_PREFIX))
        })
        .collect();
    work_dirs.sort();

    let mut reason = FreshReason::NoPriorWorkDir;
    for dir in work_dirs {
        let state = StateKeeper::new(&dir).read().unwrap_or_default();
        let flag = |key: &str| state.get(key).and_then(Value::as_bool).unwrap_or(false);
        if flag(KEY_SUBMITTED) && !flag(KEY_COMPLETED) {
            return ResumeDecision::Resume(dir);
        }
        reason = if flag(KEY_COMPLETED) {
            FreshReason::AlreadyCompleted
        } else {
            FreshReason::NeverSubmitted
        };
    }
    ResumeDecision::StartFresh(reason)
}

/// Top-level driver integrating the campaign with the pilot-job scheduler.
pub struct Executor<C: Campaign> {
    campaign: C,
    connector: Box<dyn PilotConnector>,
    registry: TaskRegistry,
    config_file: Option<PathBuf>,
    encoder_args: EncoderArgs,
    resume: bool,
    state: ExecutorState,
}

impl<C: Campaign> Executor<C> {
    /// Create an executor for `campaign`, talking to the scheduler through
    /// `connector`.
    ///
    /// The prelude config file defaults to the `EQI_CONFIG` environment
    /// variable when set; [`Executor::with_config_file`] overrides it.
    pub fn new(campaign: C, connector: Box<dyn PilotConnector>) -> Self {
        let config_file = std::env::var(ENV_CONFIG).ok().map(PathBuf::from);
        if let Some(path) = &config_file {
            info!(path = %path.display(), "prelude config file taken from the environment");
        }
        Self {
            campaign,
            connector,
            registry: TaskRegistry::new(),
            config_file,
            encoder_args: EncoderArgs::default(),
            resume: true,
            state: ExecutorState::Init,
        }
    }

    /// Source this prelude config file in every task.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Select how encoding jobs receive the campaign identity.
    pub fn with_encoder_args(mut self, mode: EncoderArgs) -> Self {
        self.encoder_args = mode;
        self
    }

    /// Enable or disable the resume check (enabled by default).
    pub fn with_resume(mut self, resume: bool) -> Self {
        self.resume = resume;
        self
    }

    /// Register a task spec for the upcoming run.
    pub fn add_task(&mut self, spec: TaskSpec) {
        self.registry.add(spec);
    }

    /// Current phase of the executor.
    pub fn state(&self) -> ExecutorState {
        self.state
    }

    /// Process the campaign with the given scheme.
    ///
    /// Resumes an interrupted prior run when one exists, otherwise plans,
    /// submits and waits on a fresh batch. Connectivity failures while
    /// reconnecting to a prior run are demoted to a fresh attempt; failures
    /// during fresh submission are fatal.
    #[instrument(level = "info", skip(self, scheme), fields(scheme = scheme.description()))]
    pub async fn run(&mut self, scheme: ProcessingScheme) -> Result<RunOutcome, CoreError> {
        if self.resume {
            match resume_decision(self.campaign.campaign_dir()) {
                ResumeDecision::Resume(dir) => {
                    info!(dir = %dir.display(), "resumable run found, reconnecting");
                    self.state = ExecutorState::Resuming;
                    match self.attempt_resume(&dir).await {
                        Ok(()) => return Ok(RunOutcome::Completed),
                        Err(CoreError::Pilot(err)) => {
                            warn!(error = %err, "resume attempt failed, starting fresh");
                        }
                        Err(other) => return Err(other),
                    }
                }
                ResumeDecision::StartFresh(reason) => {
                    info!(reason = ?reason, "no resumable run, starting fresh");
                }
            }
        }

        self.state = ExecutorState::Fresh;
        self.fresh_run(scheme).await
    }

    /// Reconnect to an interrupted run and wait it out; nothing is rebuilt
    /// or resubmitted.
    async fn attempt_resume(&mut self, work_dir: &Path) -> Result<(), CoreError> {
        let mut manager = self.connector.resume(work_dir).await?;
        self.state = ExecutorState::Submitted;
        manager.wait_for_all().await?;
        self.complete(&StateKeeper::new(work_dir))?;
        Self::shutdown(manager.as_mut()).await;
        Ok(())
    }

    async fn fresh_run(&mut self, scheme: ProcessingScheme) -> Result<RunOutcome, CoreError> {
        let work_dir = self.create_work_dir()?;
        let keeper = StateKeeper::new(&work_dir);
        keeper.setup(&self.campaign)?;

        let runs = self.campaign.list_runs()?;
        let mut builder = TaskBuilder::new(CampaignIdentity::capture(&self.campaign), &work_dir)
            .with_encoder_args(self.encoder_args);
        if let Some(config) = &self.config_file {
            builder = builder.with_config_file(config);
        }

        let batch = plan_batch(scheme, &self.registry, &builder, &runs)?;
        if batch.is_empty() {
            keeper.mark_submitted(false)?;
            info!("scheme produced no jobs, nothing to submit");
            return Ok(RunOutcome::NothingToSubmit);
        }

        let mut manager = self.connector.launch(&work_dir).await?;
        match manager.resources().await {
            Ok(resources) => info!(%resources, "pilot-job resources"),
            Err(err) => debug!(error = %err, "resource introspection unavailable"),
        }

        info!(jobs = batch.len(), "submitting batch");
        manager.submit(&batch).await?;
        keeper.mark_submitted(true)?;
        self.state = ExecutorState::Submitted;

        manager.wait_for_all().await?;
        self.complete(&keeper)?;
        Self::shutdown(manager.as_mut()).await;
        Ok(RunOutcome::Completed)
    }

    /// Sync the campaign and record completion; shared by both paths.
    fn complete(&mut self, keeper: &StateKeeper) -> Result<(), CoreError> {
        debug!("syncing campaign state after execution");
        let mut fresh = Vec::new();
        self.campaign.call_for_each_run(
            &mut |key, _info| fresh.push(key.clone()),
            Some(RunStatus::New),
        )?;
        if !fresh.is_empty() {
            self.campaign.set_run_statuses(&fresh, RunStatus::Encoded)?;
        }
        keeper.mark_completed()?;
        self.state = ExecutorState::Completed;
        info!(runs = fresh.len(), "campaign synced, run completed");
        Ok(())
    }

    fn create_work_dir(&self) -> Result<PathBuf, CoreError> {
        let name = format!("{WORK_DIR_PREFIX}{}", Uuid::new_v4().simple());
        let dir = self.campaign.campaign_dir().join(name);
        fs::create_dir_all(&dir).map_err(StateError::from)?;
        info!(dir = %dir.display(), "created working directory");
        Ok(dir)
    }

    async fn shutdown(manager: &mut dyn PilotManager) {
        if let Err(err) = manager.finish().await {
            warn!(error = %err, "pilot-job manager shutdown reported an error");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use tempfile::TempDir;

    use super::{
        Executor, ExecutorState, FreshReason, ResumeDecision, RunOutcome, WORK_DIR_PREFIX,
        resume_decision,
    };
    use crate::campaign::{Campaign, CampaignResult, RunInfo, RunStatus};
    use crate::error::CoreError;
    use crate::pilot::{PilotConnector, PilotError, PilotManager, PilotResult};
    use crate::state::{KEY_COMPLETED, KEY_SUBMITTED, StateKeeper};
    use eqi_model::{
        JobDescription, PARAM_APPLICATION, ProcessingScheme, SampleKey, TaskKind,
        TaskRequirements, TaskSpec,
    };

    struct StubCampaign {
        dir: PathBuf,
        runs: Vec<(SampleKey, RunInfo)>,
        statuses: Arc<Mutex<BTreeMap<SampleKey, RunStatus>>>,
    }

    impl StubCampaign {
        fn new(dir: &Path, samples: u64) -> Self {
            let runs: Vec<_> = (0..samples)
                .map(|i| {
                    (
                        format!("Run_{i}"),
                        RunInfo {
                            run_dir: dir.join(format!("runs/Run_{i}")),
                        },
                    )
                })
                .collect();
            let statuses = runs
                .iter()
                .map(|(key, _)| (key.clone(), RunStatus::New))
                .collect();
            Self {
                dir: dir.to_path_buf(),
                runs,
                statuses: Arc::new(Mutex::new(statuses)),
            }
        }

        fn statuses(&self) -> Arc<Mutex<BTreeMap<SampleKey, RunStatus>>> {
            Arc::clone(&self.statuses)
        }
    }

    impl Campaign for StubCampaign {
        fn db_type(&self) -> &str {
            "sql"
        }

        fn db_location(&self) -> &str {
            "sqlite:///campaign.db"
        }

        fn campaign_name(&self) -> &str {
            "cooling"
        }

        fn active_app_name(&self) -> &str {
            "cooling-app"
        }

        fn campaign_dir(&self) -> &Path {
            &self.dir
        }

        fn list_runs(&self) -> CampaignResult<Vec<(SampleKey, RunInfo)>> {
            Ok(self.runs.clone())
        }

        fn call_for_each_run(
            &self,
            f: &mut dyn FnMut(&SampleKey, &RunInfo),
            status: Option<RunStatus>,
        ) -> CampaignResult<()> {
            let statuses = self.statuses.lock().unwrap();
            for (key, info) in &self.runs {
                if status.is_none() || status == statuses.get(key).copied() {
                    f(key, info);
                }
            }
            Ok(())
        }

        fn set_run_statuses(&self, keys: &[SampleKey], status: RunStatus) -> CampaignResult<()> {
            let mut statuses = self.statuses.lock().unwrap();
            for key in keys {
                statuses.insert(key.clone(), status);
            }
            Ok(())
        }

        fn save_state(&self, path: &Path) -> CampaignResult<()> {
            std::fs::write(path, "{}")?;
            Ok(())
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq)]
    enum FailMode {
        None,
        SubmitConnection,
        WaitInterrupted,
        ResumeConnection,
        ResumedWaitConnection,
    }

    struct SchedulerProbe {
        fail: FailMode,
        launched: AtomicUsize,
        resumed: AtomicUsize,
        finished: AtomicUsize,
        submitted: Mutex<Vec<Vec<JobDescription>>>,
    }

    impl SchedulerProbe {
        fn new(fail: FailMode) -> Arc<Self> {
            Arc::new(Self {
                fail,
                launched: AtomicUsize::new(0),
                resumed: AtomicUsize::new(0),
                finished: AtomicUsize::new(0),
                submitted: Mutex::new(Vec::new()),
            })
        }

        fn submitted_batches(&self) -> Vec<Vec<JobDescription>> {
            self.submitted.lock().unwrap().clone()
        }
    }

    struct StubConnector {
        probe: Arc<SchedulerProbe>,
    }

    #[async_trait]
    impl PilotConnector for StubConnector {
        async fn launch(&self, _work_dir: &Path) -> PilotResult<Box<dyn PilotManager>> {
            self.probe.launched.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(StubManager {
                probe: Arc::clone(&self.probe),
                resumed: false,
            }))
        }

        async fn resume(&self, _work_dir: &Path) -> PilotResult<Box<dyn PilotManager>> {
            if self.probe.fail == FailMode::ResumeConnection {
                return Err(PilotError::Connection(
                    "manager process is gone".to_string(),
                ));
            }
            self.probe.resumed.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(StubManager {
                probe: Arc::clone(&self.probe),
                resumed: true,
            }))
        }
    }

    struct StubManager {
        probe: Arc<SchedulerProbe>,
        resumed: bool,
    }

    #[async_trait]
    impl PilotManager for StubManager {
        async fn submit(&mut self, batch: &[JobDescription]) -> PilotResult<()> {
            if self.probe.fail == FailMode::SubmitConnection {
                return Err(PilotError::Connection("broker unreachable".to_string()));
            }
            self.probe.submitted.lock().unwrap().push(batch.to_vec());
            Ok(())
        }

        async fn wait_for_all(&mut self) -> PilotResult<()> {
            match self.probe.fail {
                FailMode::WaitInterrupted => Err(PilotError::Interrupted),
                FailMode::ResumedWaitConnection if self.resumed => {
                    Err(PilotError::Connection("manager process is gone".to_string()))
                }
                _ => Ok(()),
            }
        }

        async fn resources(&self) -> PilotResult<serde_json::Value> {
            Ok(serde_json::json!({ "total_cores": 4 }))
        }

        async fn finish(&mut self) -> PilotResult<()> {
            self.probe.finished.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn executor_with(
        campaign: StubCampaign,
        probe: &Arc<SchedulerProbe>,
    ) -> Executor<StubCampaign> {
        let mut executor = Executor::new(
            campaign,
            Box::new(StubConnector {
                probe: Arc::clone(probe),
            }),
        );
        executor.add_task(
            TaskSpec::new(TaskKind::Encoding)
                .with_requirements(TaskRequirements::cores_exact(1).unwrap()),
        );
        executor.add_task(
            TaskSpec::new(TaskKind::Execution)
                .with_requirements(TaskRequirements::cores_exact(1).unwrap())
                .with_param(PARAM_APPLICATION, "python3 model.py in.json"),
        );
        executor
    }

    fn work_dirs(campaign_dir: &Path) -> Vec<PathBuf> {
        let mut dirs: Vec<_> = std::fs::read_dir(campaign_dir)
            .unwrap()
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with(WORK_DIR_PREFIX))
            })
            .collect();
        dirs.sort();
        dirs
    }

    fn seed_prior_run(campaign_dir: &Path, submitted: bool, completed: bool) -> PathBuf {
        let dir = campaign_dir.join(format!("{WORK_DIR_PREFIX}prior"));
        std::fs::create_dir_all(&dir).unwrap();
        let keeper = StateKeeper::new(&dir);
        keeper.mark_submitted(submitted).unwrap();
        if completed {
            keeper.mark_completed().unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn sample_oriented_end_to_end() {
        let tmp = TempDir::new().unwrap();
        let campaign = StubCampaign::new(tmp.path(), 3);
        let statuses = campaign.statuses();
        let probe = SchedulerProbe::new(FailMode::None);
        let mut executor = executor_with(campaign, &probe);

        let outcome = executor.run(ProcessingScheme::SampleOriented).await.unwrap();

        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(executor.state(), ExecutorState::Completed);

        let batches = probe.submitted_batches();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 6);

        for status in statuses.lock().unwrap().values() {
            assert_eq!(*status, RunStatus::Encoded);
        }

        let dirs = work_dirs(tmp.path());
        assert_eq!(dirs.len(), 1);
        let state = StateKeeper::new(&dirs[0]).read().unwrap();
        assert_eq!(state.get(KEY_SUBMITTED).and_then(|v| v.as_bool()), Some(true));
        assert_eq!(state.get(KEY_COMPLETED).and_then(|v| v.as_bool()), Some(true));
        assert_eq!(probe.finished.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_campaign_submits_nothing() {
        let tmp = TempDir::new().unwrap();
        let campaign = StubCampaign::new(tmp.path(), 0);
        let probe = SchedulerProbe::new(FailMode::None);
        let mut executor = executor_with(campaign, &probe);

        let outcome = executor.run(ProcessingScheme::SampleOriented).await.unwrap();

        assert_eq!(outcome, RunOutcome::NothingToSubmit);
        assert_eq!(probe.launched.load(Ordering::SeqCst), 0);

        let dirs = work_dirs(tmp.path());
        let state = StateKeeper::new(&dirs[0]).read().unwrap();
        assert_eq!(
            state.get(KEY_SUBMITTED).and_then(|v| v.as_bool()),
            Some(false)
        );
        assert!(state.get(KEY_COMPLETED).is_none());
    }

    #[tokio::test]
    async fn resume_reconnects_without_resubmitting() {
        let tmp = TempDir::new().unwrap();
        let campaign = StubCampaign::new(tmp.path(), 3);
        let statuses = campaign.statuses();
        let prior = seed_prior_run(tmp.path(), true, false);
        let probe = SchedulerProbe::new(FailMode::None);
        let mut executor = executor_with(campaign, &probe);

        let outcome = executor.run(ProcessingScheme::SampleOriented).await.unwrap();

        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(probe.resumed.load(Ordering::SeqCst), 1);
        assert_eq!(probe.launched.load(Ordering::SeqCst), 0);
        assert!(probe.submitted_batches().is_empty());

        let state = StateKeeper::new(&prior).read().unwrap();
        assert_eq!(state.get(KEY_COMPLETED).and_then(|v| v.as_bool()), Some(true));
        for status in statuses.lock().unwrap().values() {
            assert_eq!(*status, RunStatus::Encoded);
        }
    }

    #[tokio::test]
    async fn completed_prior_run_starts_fresh() {
        let tmp = TempDir::new().unwrap();
        let campaign = StubCampaign::new(tmp.path(), 2);
        seed_prior_run(tmp.path(), true, true);
        let probe = SchedulerProbe::new(FailMode::None);
        let mut executor = executor_with(campaign, &probe);

        executor.run(ProcessingScheme::SampleOriented).await.unwrap();

        assert_eq!(probe.resumed.load(Ordering::SeqCst), 0);
        assert_eq!(probe.launched.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_resume_connection_falls_back_to_fresh() {
        let tmp = TempDir::new().unwrap();
        let campaign = StubCampaign::new(tmp.path(), 2);
        seed_prior_run(tmp.path(), true, false);
        let probe = SchedulerProbe::new(FailMode::ResumeConnection);
        let mut executor = executor_with(campaign, &probe);

        let outcome = executor.run(ProcessingScheme::SampleOriented).await.unwrap();

        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(probe.launched.load(Ordering::SeqCst), 1);
        assert_eq!(probe.submitted_batches().len(), 1);
    }

    #[tokio::test]
    async fn failed_wait_on_resumed_run_falls_back_to_fresh() {
        let tmp = TempDir::new().unwrap();
        let campaign = StubCampaign::new(tmp.path(), 2);
        seed_prior_run(tmp.path(), true, false);
        let probe = SchedulerProbe::new(FailMode::ResumedWaitConnection);
        let mut executor = executor_with(campaign, &probe);

        let outcome = executor.run(ProcessingScheme::SampleOriented).await.unwrap();

        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(probe.resumed.load(Ordering::SeqCst), 1);
        assert_eq!(probe.launched.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn interruption_is_surfaced_distinctly() {
        let tmp = TempDir::new().unwrap();
        let campaign = StubCampaign::new(tmp.path(), 2);
        let probe = SchedulerProbe::new(FailMode::WaitInterrupted);
        let mut executor = executor_with(campaign, &probe);

        let err = executor
            .run(ProcessingScheme::SampleOriented)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Interrupted));

        // The interrupted run stays resumable: submitted, never completed.
        let dirs = work_dirs(tmp.path());
        let state = StateKeeper::new(&dirs[0]).read().unwrap();
        assert_eq!(state.get(KEY_SUBMITTED).and_then(|v| v.as_bool()), Some(true));
        assert!(state.get(KEY_COMPLETED).is_none());
    }

    #[tokio::test]
    async fn fresh_submission_failure_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let campaign = StubCampaign::new(tmp.path(), 2);
        let probe = SchedulerProbe::new(FailMode::SubmitConnection);
        let mut executor = executor_with(campaign, &probe);

        let err = executor
            .run(ProcessingScheme::SampleOriented)
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Pilot(PilotError::Connection(_))));
    }

    #[tokio::test]
    async fn disabled_resume_skips_the_check() {
        let tmp = TempDir::new().unwrap();
        let campaign = StubCampaign::new(tmp.path(), 2);
        seed_prior_run(tmp.path(), true, false);
        let probe = SchedulerProbe::new(FailMode::None);
        let mut executor = executor_with(campaign, &probe).with_resume(false);

        executor.run(ProcessingScheme::SampleOriented).await.unwrap();

        assert_eq!(probe.resumed.load(Ordering::SeqCst), 0);
        assert_eq!(probe.launched.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn resume_decision_table() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(
            resume_decision(tmp.path()),
            ResumeDecision::StartFresh(FreshReason::NoPriorWorkDir)
        );

        let dir = seed_prior_run(tmp.path(), true, false);
        assert_eq!(resume_decision(tmp.path()), ResumeDecision::Resume(dir));

        let tmp = TempDir::new().unwrap();
        seed_prior_run(tmp.path(), true, true);
        assert_eq!(
            resume_decision(tmp.path()),
            ResumeDecision::StartFresh(FreshReason::AlreadyCompleted)
        );

        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join(format!("{WORK_DIR_PREFIX}empty"))).unwrap();
        assert_eq!(
            resume_decision(tmp.path()),
            ResumeDecision::StartFresh(FreshReason::NeverSubmitted)
        );
    }
}
