pub mod core;
pub mod messages;
pub mod worker;

// Re-export key components
pub use core::LevelEngine;
pub use messages::{FileReport, JobRequest, JobResult};
