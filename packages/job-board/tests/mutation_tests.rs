//! Create, update, delete and form submission against the mock jobs API.

mod common;

use common::*;
use job_board::domains::board::{
    CREATE_FAILED_MESSAGE, DELETE_CONFIRM_QUESTION, DELETE_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE,
};
use job_board::kernel::{JobCall, JobOp, MockJobService, RecordingPrompter, TestDependencies};
use job_board::{
    DeleteOutcome, Editor, JobDraft, JobId, JobPatch, JobStatus, JobStore, NewJob, SubmitOutcome,
};

fn new_job() -> NewJob {
    NewJob {
        title: "Platform Engineer".to_string(),
        company: "Globex".to_string(),
        url: Some("https://globex.example/jobs/7".to_string()),
        referral_info: None,
        hiring_manager_links: vec!["linkedin.com/in/hm".to_string()],
        status: Some(JobStatus::Opportunities),
    }
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn create_appends_server_record() {
    let deps = TestDependencies::new();
    let board = deps.board_with(single_job_store());

    let created = board.mutations().create(new_job()).await.unwrap();

    let snapshot = board.store().snapshot();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(created.id, JobId::new("mock-1"));
    assert_eq!(snapshot.jobs().last(), Some(&created));
    assert_eq!(created.title, "Platform Engineer");
    assert_eq!(deps.service.calls(), vec![JobCall::Create(new_job())]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_completions_keep_every_write() {
    let base: Vec<_> = (0..2000)
        .map(|n| job(&n.to_string(), JobStatus::Applied))
        .collect();
    let deps = TestDependencies::new().with_service(MockJobService::new().with_jobs(base.clone()));
    let board = deps.board_with(JobStore::new(base));

    for round in 0..10 {
        let mut tasks = Vec::new();
        for n in 0..8 {
            let creator = board.clone();
            tasks.push(tokio::spawn(async move {
                creator.mutations().create(new_job()).await.is_some()
            }));
            let board = board.clone();
            let id = JobId::new((round * 8 + n).to_string());
            tasks.push(tokio::spawn(async move {
                board.mutations().delete(&id).await == DeleteOutcome::Deleted
            }));
        }
        for task in tasks {
            assert!(task.await.unwrap());
        }

        let snapshot = board.store().snapshot();
        assert_eq!(snapshot.len(), 2000);
        for n in 0..(round + 1) * 8 {
            assert!(!snapshot.contains(&JobId::new(n.to_string())));
        }
        assert_eq!(
            snapshot.column(JobStatus::Opportunities).len(),
            (round + 1) * 8
        );
    }
    assert!(deps.prompter.notifications().is_empty());
}

#[tokio::test]
async fn create_accepts_any_initial_status() {
    let deps = TestDependencies::new();
    let board = deps.board();

    let mut job = new_job();
    job.status = Some(JobStatus::HiringManagers);
    let created = board.mutations().create(job).await.unwrap();

    assert_eq!(created.status, JobStatus::HiringManagers);
    assert_eq!(
        board.store().snapshot().column(JobStatus::HiringManagers).len(),
        1
    );
}

#[tokio::test]
async fn failed_create_leaves_store_unchanged() {
    let deps = TestDependencies::new()
        .with_service(MockJobService::new().failing(JobOp::Create));
    let board = deps.board_with(single_job_store());

    let created = board.mutations().create(new_job()).await;

    assert!(created.is_none());
    assert_eq!(board.store().snapshot(), single_job_store());
    assert_eq!(board.store().revision(), 0);
    assert_eq!(
        deps.prompter.notifications(),
        vec![CREATE_FAILED_MESSAGE.to_string()]
    );
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn update_replaces_entry_with_server_record() {
    let mut server_copy = opportunity_a();
    server_copy.referral_info = Some("From the server".to_string());
    let deps = TestDependencies::new()
        .with_service(MockJobService::new().with_jobs(vec![server_copy]));
    let board = deps.board_with(single_job_store());

    let patch = JobPatch {
        title: Some("A (Senior)".to_string()),
        ..Default::default()
    };
    let updated = board.mutations().update(&"1".into(), patch).await.unwrap();

    let stored = board.store().snapshot().get(&"1".into()).cloned().unwrap();
    assert_eq!(stored, updated);
    assert_eq!(stored.title, "A (Senior)");
    // Full replacement: fields only the server knew about come along
    assert_eq!(stored.referral_info.as_deref(), Some("From the server"));
}

#[tokio::test]
async fn failed_update_leaves_store_unchanged() {
    let deps = TestDependencies::new().with_service(
        MockJobService::new()
            .with_jobs(vec![opportunity_a()])
            .failing(JobOp::Update),
    );
    let board = deps.board_with(single_job_store());

    let updated = board
        .mutations()
        .update(&"1".into(), JobPatch::status(JobStatus::Archived))
        .await;

    assert!(updated.is_none());
    assert_eq!(board.store().snapshot(), single_job_store());
    assert_eq!(
        deps.prompter.notifications(),
        vec![UPDATE_FAILED_MESSAGE.to_string()]
    );
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let deps = TestDependencies::new().with_prompter(RecordingPrompter::answering(false));
    let board = deps.board_with(single_job_store());

    let outcome = board.mutations().delete(&"1".into()).await;

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(deps.service.call_count(), 0);
    assert_eq!(board.store().snapshot(), single_job_store());
    assert_eq!(
        deps.prompter.questions(),
        vec![DELETE_CONFIRM_QUESTION.to_string()]
    );
}

#[tokio::test]
async fn confirmed_delete_removes_job() {
    let deps = TestDependencies::new()
        .with_service(MockJobService::new().with_jobs(vec![opportunity_a()]));
    let board = deps.board_with(single_job_store());

    let outcome = board.mutations().delete(&"1".into()).await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert!(!board.store().snapshot().contains(&"1".into()));
    assert_eq!(deps.service.calls(), vec![JobCall::Delete("1".into())]);
    assert!(deps.service.records().is_empty());
}

#[tokio::test]
async fn failed_delete_leaves_store_unchanged() {
    let deps = TestDependencies::new().with_service(
        MockJobService::new()
            .with_jobs(vec![opportunity_a()])
            .failing(JobOp::Delete),
    );
    let board = deps.board_with(single_job_store());

    let outcome = board.mutations().delete(&"1".into()).await;

    assert_eq!(outcome, DeleteOutcome::Failed);
    assert_eq!(board.store().snapshot(), single_job_store());
    assert_eq!(
        deps.prompter.notifications(),
        vec![DELETE_FAILED_MESSAGE.to_string()]
    );
}

#[tokio::test]
async fn each_delete_asks_again() {
    let deps = TestDependencies::new()
        .with_service(MockJobService::new().with_jobs(mixed_store().jobs().to_vec()))
        .with_prompter(RecordingPrompter::answering(true).then_answer(false));
    let board = deps.board_with(mixed_store());

    assert_eq!(
        board.mutations().delete(&"2".into()).await,
        DeleteOutcome::Declined
    );
    assert_eq!(
        board.mutations().delete(&"2".into()).await,
        DeleteOutcome::Deleted
    );
    assert_eq!(deps.prompter.questions().len(), 2);
    assert_eq!(board.store().snapshot().len(), 3);
}

// =============================================================================
// Form submission
// =============================================================================

#[tokio::test]
async fn submit_while_adding_creates_in_that_column_and_closes() {
    let deps = TestDependencies::new();
    let board = deps.board();
    let mut editor = Editor::default();
    editor.open_add(JobStatus::Opportunities);

    let mut draft = editor.draft();
    draft.title = "Data Engineer".to_string();
    draft.company = "Initech".to_string();
    draft.set_link(0, "  ");
    draft.add_link();
    draft.set_link(1, "linkedin.com/in/lumbergh");

    let outcome = board.mutations().submit(&mut editor, &draft).await;

    let SubmitOutcome::Created(job) = outcome.clone() else {
        panic!("expected a created job, got {:?}", outcome);
    };
    assert_eq!(job.status, JobStatus::Opportunities);
    assert_eq!(job.hiring_manager_links, vec!["linkedin.com/in/lumbergh"]);
    assert_eq!(job.url, None);
    assert_eq!(editor, Editor::Closed);
    assert_eq!(board.store().snapshot().len(), 1);
}

#[tokio::test]
async fn submit_while_editing_updates_and_closes() {
    let deps = TestDependencies::new()
        .with_service(MockJobService::new().with_jobs(vec![opportunity_a()]));
    let board = deps.board_with(single_job_store());
    let mut editor = Editor::default();
    editor.open_edit(opportunity_a());

    let mut draft = editor.draft();
    draft.company = "B Corp".to_string();

    let outcome = board.mutations().submit(&mut editor, &draft).await;

    assert!(matches!(outcome, SubmitOutcome::Updated(ref j) if j.company == "B Corp"));
    assert_eq!(editor, Editor::Closed);
    assert_eq!(
        board.store().snapshot().get(&"1".into()).unwrap().company,
        "B Corp"
    );
    assert!(matches!(
        deps.service.calls().as_slice(),
        [JobCall::Update(id, patch)] if id.as_str() == "1" && patch.status.is_none()
    ));
}

#[tokio::test]
async fn failed_submit_still_closes_editor() {
    let deps = TestDependencies::new()
        .with_service(MockJobService::new().failing(JobOp::Create));
    let board = deps.board();
    let mut editor = Editor::default();
    editor.open_add(JobStatus::Opportunities);

    let draft = JobDraft {
        title: "QA".to_string(),
        company: "Hooli".to_string(),
        ..JobDraft::blank()
    };
    let outcome = board.mutations().submit(&mut editor, &draft).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert!(!editor.is_open());
    assert_eq!(board.store().snapshot(), JobStore::default());
    assert_eq!(
        deps.prompter.notifications(),
        vec![CREATE_FAILED_MESSAGE.to_string()]
    );
}

#[tokio::test]
async fn submit_with_closed_editor_sends_nothing() {
    let deps = TestDependencies::new();
    let board = deps.board();
    let mut editor = Editor::Closed;

    let outcome = board
        .mutations()
        .submit(&mut editor, &JobDraft::blank())
        .await;

    assert_eq!(outcome, SubmitOutcome::NotOpen);
    assert_eq!(deps.service.call_count(), 0);
}
