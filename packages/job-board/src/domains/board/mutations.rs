//! Create, update and delete.
//!
//! The store only changes after the API confirms the write. Failures leave the
//! store as it is, tell the user, and log the cause.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::editor::Editor;
use crate::domains::jobs::{Job, JobDraft, JobId, JobPatch, NewJob, SharedStore};
use crate::kernel::{BaseJobService, BasePrompter};

pub const CREATE_FAILED_MESSAGE: &str = "Failed to add job.";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update job.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete job.";
pub const DELETE_CONFIRM_QUESTION: &str = "Are you sure you want to delete this job?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User said no; nothing was sent
    Declined,
    Deleted,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Job),
    Updated(Job),
    Failed,
    /// Editor was closed; nothing to submit
    NotOpen,
}

pub struct MutationController {
    store: SharedStore,
    service: Arc<dyn BaseJobService>,
    prompter: Arc<dyn BasePrompter>,
}

impl MutationController {
    pub fn new(
        store: SharedStore,
        service: Arc<dyn BaseJobService>,
        prompter: Arc<dyn BasePrompter>,
    ) -> Self {
        Self {
            store,
            service,
            prompter,
        }
    }

    /// Create a job and append the server's record to the store.
    pub async fn create(&self, job: NewJob) -> Option<Job> {
        match self.service.create_job(&job).await {
            Ok(created) => {
                info!(job_id = %created.id, status = %created.status, "Job created");
                self.store.update(|current| current.with_appended(created.clone()));
                Some(created)
            }
            Err(e) => {
                error!(error = %e, title = %job.title, "Error creating job");
                self.prompter.notify(CREATE_FAILED_MESSAGE);
                None
            }
        }
    }

    /// Update a job and swap in the server's record wholesale.
    pub async fn update(&self, id: &JobId, patch: JobPatch) -> Option<Job> {
        match self.service.update_job(id, &patch).await {
            Ok(updated) => {
                info!(job_id = %id, "Job updated");
                self.store.update(|current| {
                    if !current.contains(id) {
                        warn!(job_id = %id, "Updated job is no longer on the board");
                    }
                    current.with_replaced(id, updated.clone())
                });
                Some(updated)
            }
            Err(e) => {
                error!(error = %e, job_id = %id, "Error updating job");
                self.prompter.notify(UPDATE_FAILED_MESSAGE);
                None
            }
        }
    }

    /// Delete a job after the user confirms.
    pub async fn delete(&self, id: &JobId) -> DeleteOutcome {
        if !self.prompter.confirm(DELETE_CONFIRM_QUESTION) {
            info!(job_id = %id, "Delete declined");
            return DeleteOutcome::Declined;
        }

        match self.service.delete_job(id).await {
            Ok(()) => {
                info!(job_id = %id, "Job deleted");
                self.store.update(|current| current.without(id));
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!(error = %e, job_id = %id, "Error deleting job");
                self.prompter.notify(DELETE_FAILED_MESSAGE);
                DeleteOutcome::Failed
            }
        }
    }

    /// Submit the form: update when editing, create when adding. The editor is
    /// closed afterwards whether or not the write succeeded.
    pub async fn submit(&self, editor: &mut Editor, draft: &JobDraft) -> SubmitOutcome {
        let outcome = match editor {
            Editor::Closed => return SubmitOutcome::NotOpen,
            Editor::Adding(column) => match self.create(draft.to_new_job(Some(*column))).await {
                Some(job) => SubmitOutcome::Created(job),
                None => SubmitOutcome::Failed,
            },
            Editor::Editing(job) => {
                let id = job.id.clone();
                match self.update(&id, draft.to_patch()).await {
                    Some(job) => SubmitOutcome::Updated(job),
                    None => SubmitOutcome::Failed,
                }
            }
        };

        editor.close();
        outcome
    }
}
