//! In-memory job collection and the shared handle controllers write through.
//!
//! Column membership is derived from each job's status; there is no per-column
//! array to keep in sync and no persisted rank within a column.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::warn;

use super::models::{Job, JobId, JobStatus};

/// Ordered-by-insertion collection of jobs, unique by id.
///
/// Every operation returns a new store; a snapshot never changes after it is taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    /// Build a store from a server listing. Later duplicates of an id are dropped.
    pub fn new(jobs: Vec<Job>) -> Self {
        let mut store = Self {
            jobs: Vec::with_capacity(jobs.len()),
        };
        for job in jobs {
            if store.contains(&job.id) {
                warn!(job_id = %job.id, "Dropping duplicate job id from listing");
                continue;
            }
            store.jobs.push(job);
        }
        store
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, id: &JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| &j.id == id)
    }

    pub fn contains(&self, id: &JobId) -> bool {
        self.get(id).is_some()
    }

    /// Store with `job` added at the end. An existing entry with the same id is
    /// replaced in place instead, so ids stay unique.
    pub fn with_appended(&self, job: Job) -> Self {
        if self.contains(&job.id) {
            warn!(job_id = %job.id, "Created job id already present; replacing entry");
            let id = job.id.clone();
            return self.with_replaced(&id, job);
        }
        let mut jobs = self.jobs.clone();
        jobs.push(job);
        Self { jobs }
    }

    /// Store with the entry for `id` swapped for `job` wholesale.
    pub fn with_replaced(&self, id: &JobId, job: Job) -> Self {
        let jobs = self
            .jobs
            .iter()
            .map(|j| if &j.id == id { job.clone() } else { j.clone() })
            .collect();
        Self { jobs }
    }

    /// Store with only the status of `id` changed.
    pub fn with_status(&self, id: &JobId, status: JobStatus) -> Self {
        let jobs = self
            .jobs
            .iter()
            .map(|j| if &j.id == id { j.with_status(status) } else { j.clone() })
            .collect();
        Self { jobs }
    }

    pub fn without(&self, id: &JobId) -> Self {
        let jobs = self.jobs.iter().filter(|j| &j.id != id).cloned().collect();
        Self { jobs }
    }

    /// Jobs in one column, in store order.
    pub fn column(&self, status: JobStatus) -> Column<'_> {
        Column {
            status,
            jobs: self.jobs.iter().filter(|j| j.status == status).collect(),
        }
    }

    /// Every column in board order. Each job lands in exactly one column.
    pub fn columns(&self) -> Vec<Column<'_>> {
        JobStatus::ALL.into_iter().map(|s| self.column(s)).collect()
    }
}

/// One board column: a filtered view over the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    pub status: JobStatus,
    pub jobs: Vec<&'a Job>,
}

impl Column<'_> {
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Column title with its count, e.g. `Applied (3)`.
    pub fn header(&self) -> String {
        format!("{} ({})", self.status.label(), self.jobs.len())
    }

    pub fn accepts_new(&self) -> bool {
        self.status.accepts_new()
    }

    pub fn position(&self, id: &JobId) -> Option<usize> {
        self.jobs.iter().position(|j| &j.id == id)
    }
}

/// Handle to the single current [`JobStore`].
///
/// Writes replace the whole snapshot and bump the revision. Clones share the
/// same store. Writes derived from the current snapshot go through
/// [`update`](Self::update) so concurrent completions don't drop each other. Renderers can [`subscribe`](Self::subscribe) to be woken on change.
#[derive(Clone)]
pub struct SharedStore {
    tx: Arc<watch::Sender<JobStore>>,
    revision: Arc<AtomicU64>,
}

impl SharedStore {
    pub fn new(store: JobStore) -> Self {
        let (tx, _rx) = watch::channel(store);
        Self {
            tx: Arc::new(tx),
            revision: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> JobStore {
        self.tx.borrow().clone()
    }

    /// Swap in a new snapshot, returning the one it replaced.
    pub fn replace(&self, store: JobStore) -> JobStore {
        let previous = self.tx.send_replace(store);
        self.revision.fetch_add(1, Ordering::SeqCst);
        previous
    }

    /// Derive the next snapshot from the current one under the channel lock,
    /// returning the one it replaced.
    pub fn update(&self, f: impl FnOnce(&JobStore) -> JobStore) -> JobStore {
        let mut previous = JobStore::default();
        self.tx.send_modify(|current| {
            let next = f(current);
            previous = std::mem::replace(current, next);
        });
        self.revision.fetch_add(1, Ordering::SeqCst);
        previous
    }

    /// Number of snapshots written since creation.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self) -> watch::Receiver<JobStore> {
        self.tx.subscribe()
    }
}

impl Default for SharedStore {
    fn default() -> Self {
        Self::new(JobStore::default())
    }
}
