// Trait definitions for dependency injection
//
// Infrastructure seams only. Controllers in domains/board hold these as
// trait objects so tests can swap in the doubles from test_dependencies.
//
// Naming convention: Base* for trait names (e.g., BaseJobService, BasePrompter)

use async_trait::async_trait;

use crate::domains::jobs::{Job, JobId, JobPatch, NewJob};
use crate::error::Result;

// =============================================================================
// Jobs API Trait
// =============================================================================

#[async_trait]
pub trait BaseJobService: Send + Sync {
    /// Every job, in server order
    async fn list_jobs(&self) -> Result<Vec<Job>>;

    /// Create a job; the returned record carries the server-assigned id
    async fn create_job(&self, job: &NewJob) -> Result<Job>;

    /// Apply `patch` to job `id`, returning the updated record
    async fn update_job(&self, id: &JobId, patch: &JobPatch) -> Result<Job>;

    async fn delete_job(&self, id: &JobId) -> Result<()>;
}

// =============================================================================
// Prompter Trait (blocking user dialogs)
// =============================================================================

pub trait BasePrompter: Send + Sync {
    /// Ask a yes/no question; `true` means the user agreed
    fn confirm(&self, question: &str) -> bool;

    /// Show a blocking message to the user
    fn notify(&self, message: &str);
}
