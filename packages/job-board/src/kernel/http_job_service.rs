//! Jobs REST API client.
//!
//! Talks to `{api_url}/api/jobs` with JSON bodies. Non-2xx responses become
//! [`ServiceError::Api`] carrying the status and response body.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::domains::jobs::{Job, JobId, JobPatch, NewJob};
use crate::error::{Result, ServiceError};
use crate::kernel::BaseJobService;

#[derive(Clone)]
pub struct HttpJobService {
    client: Client,
    base_url: String,
}

impl HttpJobService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build from configuration, applying the request timeout if one is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ServiceError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn jobs_url(&self) -> String {
        format!("{}/api/jobs", self.base_url)
    }

    /// Ids are opaque, so they go in as a single percent-encoded path segment.
    fn job_url(&self, id: &JobId) -> Result<Url> {
        let mut url = Url::parse(&self.jobs_url())
            .map_err(|e| ServiceError::Config(format!("Invalid API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                ServiceError::Config(format!("API URL cannot be a base: {}", self.base_url))
            })?
            .push(id.as_str());
        Ok(url)
    }

    async fn check(resp: Response) -> Result<Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(resp)
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let resp = Self::check(resp).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::Parse(format!("Failed to deserialize response: {}", e)))
    }
}

#[async_trait]
impl BaseJobService for HttpJobService {
    async fn list_jobs(&self) -> Result<Vec<Job>> {
        let url = self.jobs_url();
        debug!(%url, "Listing jobs");
        let resp = self.client.get(&url).send().await?;
        Self::parse(resp).await
    }

    async fn create_job(&self, job: &NewJob) -> Result<Job> {
        let url = self.jobs_url();
        debug!(%url, title = %job.title, "Creating job");
        let resp = self.client.post(&url).json(job).send().await?;
        Self::parse(resp).await
    }

    async fn update_job(&self, id: &JobId, patch: &JobPatch) -> Result<Job> {
        let url = self.job_url(id)?;
        debug!(%url, job_id = %id, "Updating job");
        let resp = self.client.put(url).json(patch).send().await?;
        Self::parse(resp).await
    }

    async fn delete_job(&self, id: &JobId) -> Result<()> {
        let url = self.job_url(id)?;
        debug!(%url, job_id = %id, "Deleting job");
        let resp = self.client.delete(url).send().await?;
        Self::check(resp).await?;
        Ok(())
    }
}
