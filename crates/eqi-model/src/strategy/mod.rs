mod scheme;
pub use scheme::ProcessingScheme;

mod resume;
pub use resume::ResumeLevel;
