use crate::domains::jobs::{Job, JobDraft, JobStatus};

/// State of the add/edit surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Editor {
    #[default]
    Closed,
    /// Adding a new job to the given column
    Adding(JobStatus),
    Editing(Job),
}

impl Editor {
    pub fn open_add(&mut self, column: JobStatus) {
        *self = Editor::Adding(column);
    }

    pub fn open_edit(&mut self, job: Job) {
        *self = Editor::Editing(job);
    }

    pub fn close(&mut self) {
        *self = Editor::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Editor::Closed)
    }

    pub fn editing(&self) -> Option<&Job> {
        match self {
            Editor::Editing(job) => Some(job),
            _ => None,
        }
    }

    /// Form contents to start from.
    pub fn draft(&self) -> JobDraft {
        match self {
            Editor::Editing(job) => JobDraft::from_job(job),
            _ => JobDraft::blank(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Editor::Editing(_) => "Edit Job",
            _ => "Add New Job",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Editor::Editing(_) => "Save Changes",
            _ => "Add Job",
        }
    }
}
