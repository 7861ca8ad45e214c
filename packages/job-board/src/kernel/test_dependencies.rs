// TestDependencies - mock implementations for testing
//
// Provides an in-memory jobs API and a scripted prompter that can be injected
// into a Board for headless tests.

use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use super::{BaseJobService, BasePrompter};
use crate::domains::board::Board;
use crate::domains::jobs::{Job, JobId, JobPatch, JobStatus, JobStore, NewJob, SharedStore};
use crate::error::{Result, ServiceError};

// =============================================================================
// Mock Jobs API
// =============================================================================

/// Which API operation a failure switch applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobOp {
    List,
    Create,
    Update,
    Delete,
}

/// A request received by the mock, with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobCall {
    List,
    Create(NewJob),
    Update(JobId, JobPatch),
    Delete(JobId),
}

/// In-memory stand-in for the jobs API.
///
/// Keeps its own records, assigns ids `mock-1`, `mock-2`, ... on create, and
/// answers 500 for any operation switched to fail.
pub struct MockJobService {
    records: Arc<Mutex<Vec<Job>>>,
    failures: Arc<Mutex<HashSet<JobOp>>>,
    failing_jobs: Arc<Mutex<HashSet<JobId>>>,
    calls: Arc<Mutex<Vec<JobCall>>>,
    update_gate: Arc<Mutex<Option<Arc<Notify>>>>,
    next_id: AtomicU64,
}

impl MockJobService {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(HashSet::new())),
            failing_jobs: Arc::new(Mutex::new(HashSet::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            update_gate: Arc::new(Mutex::new(None)),
            next_id: AtomicU64::new(1),
        }
    }

    /// Seed the server-side records
    pub fn with_jobs(self, jobs: Vec<Job>) -> Self {
        *self.records.lock().unwrap() = jobs;
        self
    }

    /// Make `op` answer with a 500 until [`succeed`](Self::succeed) is called
    pub fn failing(self, op: JobOp) -> Self {
        self.fail(op);
        self
    }

    pub fn fail(&self, op: JobOp) {
        self.failures.lock().unwrap().insert(op);
    }

    pub fn succeed(&self, op: JobOp) {
        self.failures.lock().unwrap().remove(&op);
    }

    /// Make updates and deletes of one job answer with a 500
    pub fn fail_job(&self, id: impl Into<JobId>) {
        self.failing_jobs.lock().unwrap().insert(id.into());
    }

    /// Hold every update until the returned handle is notified once per update
    pub fn gate_updates(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.update_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Get all requests received so far
    pub fn calls(&self) -> Vec<JobCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Current server-side records
    pub fn records(&self) -> Vec<Job> {
        self.records.lock().unwrap().clone()
    }

    fn record(&self, call: JobCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, op: JobOp) -> Result<()> {
        if self.failures.lock().unwrap().contains(&op) {
            return Err(ServiceError::Api {
                status: 500,
                message: format!("mock {:?} failure", op),
            });
        }
        Ok(())
    }

    fn check_job(&self, id: &JobId) -> Result<()> {
        if self.failing_jobs.lock().unwrap().contains(id) {
            return Err(ServiceError::Api {
                status: 500,
                message: format!("mock failure for job {}", id),
            });
        }
        Ok(())
    }

    fn not_found(id: &JobId) -> ServiceError {
        ServiceError::Api {
            status: 404,
            message: format!("job {} not found", id),
        }
    }
}

impl Default for MockJobService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseJobService for MockJobService {
    async fn list_jobs(&self) -> Result<Vec<Job>> {
        self.record(JobCall::List);
        self.check(JobOp::List)?;
        Ok(self.records())
    }

    async fn create_job(&self, job: &NewJob) -> Result<Job> {
        self.record(JobCall::Create(job.clone()));
        self.check(JobOp::Create)?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Job {
            id: JobId::new(format!("mock-{}", id)),
            title: job.title.clone(),
            company: job.company.clone(),
            url: job.url.clone(),
            referral_info: job.referral_info.clone(),
            hiring_manager_links: job.hiring_manager_links.clone(),
            status: job.status.unwrap_or(JobStatus::Opportunities),
        };
        self.records.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_job(&self, id: &JobId, patch: &JobPatch) -> Result<Job> {
        self.record(JobCall::Update(id.clone(), patch.clone()));

        let gate = self.update_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.check(JobOp::Update)?;
        self.check_job(id)?;

        let mut records = self.records.lock().unwrap();
        let job = records
            .iter_mut()
            .find(|j| &j.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        if let Some(title) = &patch.title {
            job.title = title.clone();
        }
        if let Some(company) = &patch.company {
            job.company = company.clone();
        }
        if let Some(url) = &patch.url {
            job.url = Some(url.clone());
        }
        if let Some(referral) = &patch.referral_info {
            job.referral_info = Some(referral.clone());
        }
        if let Some(links) = &patch.hiring_manager_links {
            job.hiring_manager_links = links.clone();
        }
        if let Some(status) = patch.status {
            job.status = status;
        }
        Ok(job.clone())
    }

    async fn delete_job(&self, id: &JobId) -> Result<()> {
        self.record(JobCall::Delete(id.clone()));
        self.check(JobOp::Delete)?;
        self.check_job(id)?;

        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|j| &j.id != id);
        if records.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}

// =============================================================================
// Recording Prompter
// =============================================================================

/// Prompter with scripted confirm answers that records everything shown
pub struct RecordingPrompter {
    answers: Mutex<VecDeque<bool>>,
    default_answer: bool,
    questions: Mutex<Vec<String>>,
    notifications: Mutex<Vec<String>>,
}

impl RecordingPrompter {
    /// Answers every confirmation with `answer`
    pub fn answering(answer: bool) -> Self {
        Self {
            answers: Mutex::new(VecDeque::new()),
            default_answer: answer,
            questions: Mutex::new(Vec::new()),
            notifications: Mutex::new(Vec::new()),
        }
    }

    /// Queue a one-off answer used before the default
    pub fn then_answer(self, answer: bool) -> Self {
        self.answers.lock().unwrap().push_back(answer);
        self
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Default for RecordingPrompter {
    fn default() -> Self {
        Self::answering(true)
    }
}

impl BasePrompter for RecordingPrompter {
    fn confirm(&self, question: &str) -> bool {
        self.questions.lock().unwrap().push(question.to_string());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(self.default_answer)
    }

    fn notify(&self, message: &str) {
        self.notifications.lock().unwrap().push(message.to_string());
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mock services bundled for building a [`Board`] in tests
pub struct TestDependencies {
    pub service: Arc<MockJobService>,
    pub prompter: Arc<RecordingPrompter>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            service: Arc::new(MockJobService::new()),
            prompter: Arc::new(RecordingPrompter::default()),
        }
    }

    pub fn with_service(mut self, service: MockJobService) -> Self {
        self.service = Arc::new(service);
        self
    }

    pub fn with_prompter(mut self, prompter: RecordingPrompter) -> Self {
        self.prompter = Arc::new(prompter);
        self
    }

    /// Board over an empty store
    pub fn board(&self) -> Board {
        self.board_with(JobStore::default())
    }

    /// Board whose store already holds `store`, skipping the initial load
    pub fn board_with(&self, store: JobStore) -> Board {
        Board::with_store(
            SharedStore::new(store),
            self.service.clone(),
            self.prompter.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
