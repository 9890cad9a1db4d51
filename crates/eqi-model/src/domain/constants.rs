//! Common model-level constants.
//!
//! Well-known strings shared between the orchestrator, the job descriptions
//! it emits and the external entry points that consume them. Keeping them
//! here avoids scattering magic strings throughout the codebase.

/// Environment variable carrying the path of the prelude config file sourced
/// by every submitted task.
pub const ENV_CONFIG: &str = "EQI_CONFIG";

/// Environment variable carrying the resume level of a task.
///
/// The external entry points read it to decide how much working-directory
/// cleanup to apply before a resumed re-run.
pub const ENV_RESUME_LEVEL: &str = "EQI_RESUME_LEVEL";

/// Scheduler-side substitution token standing in for the iteration index of
/// an iterative job.
pub const ITERATION_TOKEN: &str = "${it}";

/// Prefix of campaign-assigned sample keys (`Run_0`, `Run_1`, ...).
///
/// Iterative schemes rely on it: the numeric suffixes must form a contiguous
/// range for an iteration block to be expressible.
pub const RUN_KEY_PREFIX: &str = "Run_";

/// Parameter key holding the application command line of an execution task.
pub const PARAM_APPLICATION: &str = "application";

/// External entry point rendering a sample into an application input file.
pub const ENCODE_EXEC: &str = "eqi_encode";

/// External entry point running the application inside a run directory.
pub const EXECUTE_EXEC: &str = "eqi_execute";

/// External entry point combining both phases in a single process.
pub const ENCODE_EXECUTE_EXEC: &str = "eqi_encode_execute";
