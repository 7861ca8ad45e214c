//! Job records, the in-memory store, and form payloads.

pub mod draft;
pub mod models;
pub mod store;

pub use draft::{DraftError, JobDraft};
pub use models::{DragLocation, Job, JobId, JobPatch, JobStatus, MoveEvent, NewJob};
pub use store::{Column, JobStore, SharedStore};
