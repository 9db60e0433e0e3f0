//! Thin BigQuery REST client
//!
//! Covers exactly the two calls the loader needs: insert a job and fetch
//! its status. Single-shot requests, no retries (failures surface to the
//! pipeline boundary).

use super::types::Job;
use crate::config::WarehouseConfig;
use crate::error::{Error, Result};
use reqwest::{Client, RequestBuilder, Response};
use url::Url;

/// Client for the BigQuery v2 jobs API
#[derive(Debug, Clone)]
pub struct BigQueryClient {
    http: Client,
    base_url: Url,
    project_id: String,
    auth_token: Option<String>,
}

impl BigQueryClient {
    /// Create a client for a project.
    ///
    /// The base URL defaults to the production endpoint and is
    /// configurable for tests.
    pub fn new(config: &WarehouseConfig, project_id: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let http = Client::builder().build()?;

        Ok(Self {
            http,
            base_url,
            project_id: project_id.into(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// Submit a job; returns the job resource with its server-assigned
    /// reference and initial status.
    pub async fn insert_job(&self, job: &Job) -> Result<Job> {
        let url = self.jobs_url(None)?;
        let response = self.authorize(self.http.post(url).json(job)).send().await?;
        Self::parse_job(response).await
    }

    /// Fetch the current state of a job.
    pub async fn get_job(&self, job_id: &str) -> Result<Job> {
        let url = self.jobs_url(Some(job_id))?;
        let response = self.authorize(self.http.get(url)).send().await?;
        Self::parse_job(response).await
    }

    fn jobs_url(&self, job_id: Option<&str>) -> Result<Url> {
        let mut path = format!("bigquery/v2/projects/{}/jobs", self.project_id);
        if let Some(id) = job_id {
            path.push('/');
            path.push_str(id);
        }
        Ok(self.base_url.join(&path)?)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn parse_job(response: Response) -> Result<Job> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }
        Ok(response.json().await?)
    }
}
