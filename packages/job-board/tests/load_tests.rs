//! Initial board load.

mod common;

use common::*;
use job_board::domains::board::LOAD_FAILED_MESSAGE;
use job_board::kernel::{JobCall, JobOp, MockJobService, TestDependencies};
use job_board::{JobStatus, JobStore, LoadState};

#[tokio::test]
async fn load_fills_store_and_becomes_ready() {
    let deps = TestDependencies::new()
        .with_service(MockJobService::new().with_jobs(mixed_store().jobs().to_vec()));
    let board = deps.board();
    assert_eq!(board.loader().state(), LoadState::Loading);

    let state = board.loader().start().await;

    assert_eq!(state, LoadState::Ready);
    assert_eq!(board.loader().state(), LoadState::Ready);
    assert_eq!(board.store().snapshot(), mixed_store());
    assert_eq!(
        board
            .store()
            .snapshot()
            .column(JobStatus::Opportunities)
            .header(),
        "Opportunities (2)"
    );
}

#[tokio::test]
async fn failed_load_reports_error_and_leaves_store_empty() {
    let deps = TestDependencies::new().with_service(
        MockJobService::new()
            .with_jobs(mixed_store().jobs().to_vec())
            .failing(JobOp::List),
    );
    let board = deps.board();

    let state = board.loader().start().await;

    assert_eq!(state, LoadState::Error(LOAD_FAILED_MESSAGE.to_string()));
    assert_eq!(board.store().snapshot(), JobStore::default());
    // Load failures are shown in place of the board, not as a dialog
    assert!(deps.prompter.notifications().is_empty());
}

#[tokio::test]
async fn failed_load_clears_prefilled_store() {
    let deps = TestDependencies::new().with_service(MockJobService::new().failing(JobOp::List));
    let board = deps.board_with(mixed_store());

    let state = board.loader().start().await;

    assert!(matches!(state, LoadState::Error(_)));
    assert!(board.store().snapshot().is_empty());
    assert_eq!(board.store().snapshot().column(JobStatus::Applied).header(), "Applied (0)");
}

#[tokio::test]
async fn load_runs_only_once() {
    let deps = TestDependencies::new()
        .with_service(MockJobService::new().failing(JobOp::List));
    let board = deps.board();

    let first = board.loader().start().await;
    deps.service.succeed(JobOp::List);
    let second = board.loader().start().await;

    assert_eq!(first, second);
    assert!(matches!(second, LoadState::Error(_)));
    assert_eq!(deps.service.calls(), vec![JobCall::List]);
}

#[tokio::test]
async fn subscribers_see_final_state() {
    let deps = TestDependencies::new();
    let board = deps.board();
    let mut state_rx = board.loader().subscribe();
    let mut store_rx = board.store().subscribe();

    board.loader().start().await;

    assert!(state_rx.has_changed().unwrap());
    assert_eq!(*state_rx.borrow_and_update(), LoadState::Ready);
    assert!(store_rx.has_changed().unwrap());
    assert!(store_rx.borrow_and_update().is_empty());
}
