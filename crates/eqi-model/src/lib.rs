mod domain;
pub use domain::{SampleKey, TaskEnv, TaskParams};
pub use domain::{
    ENCODE_EXEC, ENCODE_EXECUTE_EXEC, ENV_CONFIG, ENV_RESUME_LEVEL, EXECUTE_EXEC, ITERATION_TOKEN,
    PARAM_APPLICATION, RUN_KEY_PREFIX,
};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::TaskKind;

mod spec;
pub use spec::TaskSpec;

mod strategy;
pub use strategy::{ProcessingScheme, ResumeLevel};

mod resources;
pub use resources::{Resources, ResourcesBuilder, TaskRequirements};

mod job;
pub use job::{Dependencies, Iteration, JobDescription, JobExecution};
