//! End-to-end wiring demo with an in-process stand-in scheduler.
//!
//! Builds a three-sample campaign in a temporary directory, registers
//! encoding and execution specs, and drives one sample-oriented batch
//! through the executor. The stand-in manager prints every job description
//! it receives and reports immediate completion.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::info;
use tracing_subscriber::EnvFilter;

use eqi_core::prelude::*;
use eqi_model::{
    PARAM_APPLICATION, ProcessingScheme, ResumeLevel, SampleKey, TaskKind, TaskRequirements,
    TaskSpec,
};

struct DemoCampaign {
    dir: PathBuf,
    runs: Vec<(SampleKey, RunInfo)>,
    statuses: Mutex<BTreeMap<SampleKey, RunStatus>>,
}

impl DemoCampaign {
    fn new(dir: &Path, samples: u64) -> anyhow::Result<Self> {
        let mut runs = Vec::new();
        for i in 0..samples {
            let key = format!("Run_{i}");
            let run_dir = dir.join("runs").join(&key);
            std::fs::create_dir_all(&run_dir)?;
            runs.push((key, RunInfo { run_dir }));
        }
        let statuses = runs
            .iter()
            .map(|(key, _)| (key.clone(), RunStatus::New))
            .collect();
        Ok(Self {
            dir: dir.to_path_buf(),
            runs,
            statuses: Mutex::new(statuses),
        })
    }
}

impl Campaign for DemoCampaign {
    fn db_type(&self) -> &str {
        "sql"
    }

    fn db_location(&self) -> &str {
        "sqlite:///demo-campaign.db"
    }

    fn campaign_name(&self) -> &str {
        "demo"
    }

    fn active_app_name(&self) -> &str {
        "demo-app"
    }

    fn campaign_dir(&self) -> &Path {
        &self.dir
    }

    fn list_runs(&self) -> Result<Vec<(SampleKey, RunInfo)>, CampaignError> {
        Ok(self.runs.clone())
    }

    fn call_for_each_run(
        &self,
        f: &mut dyn FnMut(&SampleKey, &RunInfo),
        status: Option<RunStatus>,
    ) -> Result<(), CampaignError> {
        let statuses = self.statuses.lock().unwrap();
        for (key, info) in &self.runs {
            if status.is_none() || status == statuses.get(key).copied() {
                f(key, info);
            }
        }
        Ok(())
    }

    fn set_run_statuses(&self, keys: &[SampleKey], status: RunStatus) -> Result<(), CampaignError> {
        let mut statuses = self.statuses.lock().unwrap();
        for key in keys {
            statuses.insert(key.clone(), status);
        }
        Ok(())
    }

    fn save_state(&self, path: &Path) -> Result<(), CampaignError> {
        std::fs::write(path, "{}")?;
        Ok(())
    }
}

/// Stand-in for the external pilot-job scheduler: accepts batches, prints
/// them, reports immediate completion.
struct PrintingConnector;

#[async_trait]
impl PilotConnector for PrintingConnector {
    async fn launch(&self, work_dir: &Path) -> Result<Box<dyn PilotManager>, PilotError> {
        info!(dir = %work_dir.display(), "stand-in manager launched");
        Ok(Box::new(PrintingManager::default()))
    }

    async fn resume(&self, work_dir: &Path) -> Result<Box<dyn PilotManager>, PilotError> {
        info!(dir = %work_dir.display(), "stand-in manager resumed");
        Ok(Box::new(PrintingManager::default()))
    }
}

#[derive(Default)]
struct PrintingManager {
    accepted: usize,
}

#[async_trait]
impl PilotManager for PrintingManager {
    async fn submit(&mut self, batch: &[eqi_model::JobDescription]) -> Result<(), PilotError> {
        for job in batch {
            let wire = serde_json::to_string_pretty(job)
                .map_err(|e| PilotError::Rejected(e.to_string()))?;
            println!("{wire}");
        }
        self.accepted += batch.len();
        Ok(())
    }

    async fn wait_for_all(&mut self) -> Result<(), PilotError> {
        info!(jobs = self.accepted, "all jobs reported finished");
        Ok(())
    }

    async fn resources(&self) -> Result<serde_json::Value, PilotError> {
        Ok(serde_json::json!({ "total_cores": 4, "total_nodes": 1 }))
    }

    async fn finish(&mut self) -> Result<(), PilotError> {
        Ok(())
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let campaign_dir = tempfile::tempdir()?;
    let campaign = DemoCampaign::new(campaign_dir.path(), 3)?;

    let mut executor = Executor::new(campaign, Box::new(PrintingConnector));
    executor.add_task(
        TaskSpec::new(TaskKind::Encoding)
            .with_requirements(TaskRequirements::cores_exact(1)?)
            .with_resume_level(ResumeLevel::Basic),
    );
    executor.add_task(
        TaskSpec::new(TaskKind::Execution)
            .with_requirements(TaskRequirements::cores_exact(1)?)
            .with_param(PARAM_APPLICATION, "python3 model.py input.json"),
    );

    let outcome = executor.run(ProcessingScheme::SampleOriented).await?;
    info!(outcome = ?outcome, state = ?executor.state(), "demo finished");
    Ok(())
}
