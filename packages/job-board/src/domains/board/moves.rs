//! Drag moves with optimistic apply and full-snapshot revert.
//!
//! The moved job's new status is written to the store before the API call is
//! made. If the call fails the store is put back to the snapshot taken before
//! the move, which also discards any change made by another operation in the
//! meantime. Overlapping in-flight moves are unsupported.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domains::jobs::{DragLocation, JobId, JobPatch, JobStatus, MoveEvent, SharedStore};
use crate::kernel::{BaseJobService, BasePrompter};

pub const MOVE_FAILED_MESSAGE: &str = "Failed to move job.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Dropped nowhere or back in place; nothing sent
    Ignored,
    /// API accepted the new status; optimistic state kept
    Committed,
    /// API rejected it; store restored to the pre-move snapshot
    Reverted,
}

pub struct BoardController {
    store: SharedStore,
    service: Arc<dyn BaseJobService>,
    prompter: Arc<dyn BasePrompter>,
}

impl BoardController {
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

    pub async fn handle_move(&self, event: &MoveEvent) -> MoveOutcome {
        let destination = match event.destination {
            Some(dest) if dest != event.source => dest,
            _ => {
                debug!(job_id = %event.job_id, "Move dropped in place; ignoring");
                return MoveOutcome::Ignored;
            }
        };

        let new_status = destination.column;
        let prior = self
            .store
            .update(|current| current.with_status(&event.job_id, new_status));

        match self
            .service
            .update_job(&event.job_id, &JobPatch::status(new_status))
            .await
        {
            Ok(_) => {
                info!(job_id = %event.job_id, status = %new_status, "Job moved");
                MoveOutcome::Committed
            }
            Err(e) => {
                error!(error = %e, job_id = %event.job_id, "Error updating job status");
                self.store.replace(prior);
                self.prompter.notify(MOVE_FAILED_MESSAGE);
                MoveOutcome::Reverted
            }
        }
    }

    /// Move event for dropping job `id` at the end of `column`, as a drag would
    /// report it. `None` if the job is not on the board.
    pub fn move_to_end(&self, id: &JobId, column: JobStatus) -> Option<MoveEvent> {
        let snapshot = self.store.snapshot();
        let job = snapshot.get(id)?;
        let source_column = snapshot.column(job.status);
        let source = DragLocation::new(job.status, source_column.position(id)?);

        let destination_len = snapshot.column(column).len();
        let index = if column == job.status {
            destination_len.saturating_sub(1)
        } else {
            destination_len
        };

        Some(MoveEvent {
            job_id: id.clone(),
            source,
            destination: Some(DragLocation::new(column, index)),
        })
    }
}
