mod request;
pub use request::{Resources, ResourcesBuilder};

mod requirements;
pub use requirements::TaskRequirements;
