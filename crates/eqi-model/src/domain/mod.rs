mod env;
pub use env::TaskEnv;

mod params;
pub use params::TaskParams;

mod constants;
pub use constants::{
    ENCODE_EXEC, ENCODE_EXECUTE_EXEC, ENV_CONFIG, ENV_RESUME_LEVEL, EXECUTE_EXEC, ITERATION_TOKEN,
    PARAM_APPLICATION, RUN_KEY_PREFIX,
};

/// Unique identifier of one sample drawn for the campaign.
///
/// Keys are assigned by the campaign in insertion order; for non-iterative
/// schemes the insertion order is also the submission order.
pub type SampleKey = String;
