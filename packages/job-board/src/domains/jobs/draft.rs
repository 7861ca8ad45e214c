//! Form data for the add/edit surface and payload construction.

use thiserror::Error;

use super::models::{Job, JobPatch, JobStatus, NewJob};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Job title is required")]
    MissingTitle,
    #[error("Company is required")]
    MissingCompany,
}

/// Editable job fields. Link inputs may be blank while editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub url: String,
    pub referral_info: String,
    pub hiring_manager_links: Vec<String>,
}

impl JobDraft {
    /// Empty form with a single link input.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            url: String::new(),
            referral_info: String::new(),
            hiring_manager_links: vec![String::new()],
        }
    }

    /// Form prefilled from an existing job.
    pub fn from_job(job: &Job) -> Self {
        let mut links = job.hiring_manager_links.clone();
        if links.is_empty() {
            links.push(String::new());
        }
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            url: job.url.clone().unwrap_or_default(),
            referral_info: job.referral_info.clone().unwrap_or_default(),
            hiring_manager_links: links,
        }
    }

    /// Set link input `index`. Out-of-range indexes are ignored.
    pub fn set_link(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.hiring_manager_links.get_mut(index) {
            *slot = value.into();
        }
    }

    pub fn add_link(&mut self) {
        self.hiring_manager_links.push(String::new());
    }

    pub fn remove_link(&mut self, index: usize) {
        if index < self.hiring_manager_links.len() {
            self.hiring_manager_links.remove(index);
        }
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if self.company.trim().is_empty() {
            return Err(DraftError::MissingCompany);
        }
        Ok(())
    }

    /// Link inputs with blank entries dropped, order kept.
    pub fn normalized_links(&self) -> Vec<String> {
        self.hiring_manager_links
            .iter()
            .filter(|l| !l.trim().is_empty())
            .cloned()
            .collect()
    }

    /// Create body. Blank optional fields are left out.
    pub fn to_new_job(&self, status: Option<JobStatus>) -> NewJob {
        NewJob {
            title: self.title.clone(),
            company: self.company.clone(),
            url: optional(&self.url),
            referral_info: optional(&self.referral_info),
            hiring_manager_links: self.normalized_links(),
            status,
        }
    }

    /// Update body carrying every form field. Blank optionals are sent so the
    /// server clears them.
    pub fn to_patch(&self) -> JobPatch {
        JobPatch {
            title: Some(self.title.clone()),
            company: Some(self.company.clone()),
            url: Some(self.url.clone()),
            referral_info: Some(self.referral_info.clone()),
            hiring_manager_links: Some(self.normalized_links()),
            status: None,
        }
    }
}

impl Default for JobDraft {
    fn default() -> Self {
        Self::blank()
    }
}

fn optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
