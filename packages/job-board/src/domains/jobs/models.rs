use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned job identifier. Never generated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Board column a job sits in. Declaration order is column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Opportunities,
    Applied,
    #[serde(rename = "Applied with Referral")]
    AppliedWithReferral,
    #[serde(rename = "Hiring Managers")]
    HiringManagers,
    Archived,
}

impl JobStatus {
    /// Every column, in board order.
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Opportunities,
        JobStatus::Applied,
        JobStatus::AppliedWithReferral,
        JobStatus::HiringManagers,
        JobStatus::Archived,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Opportunities => "Opportunities",
            JobStatus::Applied => "Applied",
            JobStatus::AppliedWithReferral => "Applied with Referral",
            JobStatus::HiringManagers => "Hiring Managers",
            JobStatus::Archived => "Archived",
        }
    }

    /// Only the first column offers "add new". Creates with any status are still accepted.
    pub fn accepts_new(&self) -> bool {
        matches!(self, JobStatus::Opportunities)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A job application record as returned by the jobs API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(alias = "_id")]
    pub id: JobId,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_info: Option<String>,
    #[serde(default)]
    pub hiring_manager_links: Vec<String>,
    pub status: JobStatus,
}

impl Job {
    /// Copy of this job sitting in another column.
    pub fn with_status(&self, status: JobStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn posting_url(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }

    pub fn referral(&self) -> Option<&str> {
        non_blank(self.referral_info.as_deref())
    }

    /// Hiring manager links as clickable hrefs, skipping empty entries.
    pub fn hiring_manager_hrefs(&self) -> Vec<String> {
        self.hiring_manager_links
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| Self::link_href(l))
            .collect()
    }

    /// Bare hosts like `linkedin.com/in/x` get an https scheme.
    pub fn link_href(link: &str) -> String {
        let link = link.trim();
        if link.starts_with("http") {
            link.to_string()
        } else {
            format!("https://{}", link)
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Create request body: every job field except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_info: Option<String>,
    pub hiring_manager_links: Vec<String>,
    /// Left to the server's default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

/// Update request body. Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiring_manager_links: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
}

impl JobPatch {
    /// Status-only patch sent for a drag move.
    pub fn status(status: JobStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// A position on the board: column plus index within the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragLocation {
    pub column: JobStatus,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column: JobStatus, index: usize) -> Self {
        Self { column, index }
    }
}

/// Result of a drag gesture. `destination` is `None` when the drop was cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEvent {
    pub job_id: JobId,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl MoveEvent {
    /// True when the drop lands nowhere or exactly where it started.
    pub fn is_noop(&self) -> bool {
        match self.destination {
            None => true,
            Some(dest) => dest == self.source,
        }
    }
}
