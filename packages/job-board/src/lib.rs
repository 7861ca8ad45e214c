//! Job board state synchronization
//!
//! Keeps an in-memory view of job application records consistent with the
//! remote jobs API. The presentation layer renders whatever the shared
//! [`JobStore`] currently holds, partitioned into status columns.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use job_board::{Board, Config, HttpJobService};
//!
//! let config = Config::from_env()?;
//! let service = Arc::new(HttpJobService::from_config(&config)?);
//! let board = Board::new(service, Arc::new(my_prompter));
//!
//! board.loader().start().await;
//! for column in board.store().snapshot().columns() {
//!     println!("{}", column.header());
//! }
//! ```

pub mod config;
pub mod domains;
pub mod error;
pub mod kernel;

pub use config::Config;
pub use domains::board::{
    Board, BoardController, DeleteOutcome, Editor, LoadController, LoadState, MoveOutcome,
    MutationController, SubmitOutcome,
};
pub use domains::jobs::{
    Column, DragLocation, DraftError, Job, JobDraft, JobId, JobPatch, JobStatus, JobStore,
    MoveEvent, NewJob, SharedStore,
};
pub use error::{Result, ServiceError};
pub use kernel::{BaseJobService, BasePrompter, HttpJobService};
