//! Kernel module - infrastructure seams and their implementations.

pub mod http_job_service;
pub mod test_dependencies;
pub mod traits;

pub use http_job_service::HttpJobService;
pub use test_dependencies::{
    JobCall, JobOp, MockJobService, RecordingPrompter, TestDependencies,
};
pub use traits::*;
