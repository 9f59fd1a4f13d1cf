use std::time::Duration;

use matchdash_core::SearchFilter;

use crate::types::{ParseResumeResponse, SearchJobsResponse};

/// Fallback when `MATCHDASH_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            // Parse-resume runs PDF extraction and matching server-side;
            // give it more room than a plain fetch.
            request_timeout: Duration::from_secs(120),
        }
    }
}

impl ApiSettings {
    /// Reads the base URL from `MATCHDASH_API_URL`, falling back to the
    /// default. The sole piece of configuration the client takes.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(url) = std::env::var("MATCHDASH_API_URL") {
            let trimmed = url.trim().trim_end_matches('/');
            if !trimmed.is_empty() {
                settings.base_url = trimmed.to_string();
            }
        }
        settings
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid api url: {0}")]
    InvalidUrl(String),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// The matcher service boundary. A trait so the engine loop and tests can
/// substitute the transport.
#[async_trait::async_trait]
pub trait MatcherApi: Send + Sync {
    /// `GET /health`; the response body is unused.
    async fn health(&self) -> Result<(), ApiError>;

    /// `POST /parse-resume` with multipart fields `resume` and `job_limit`.
    async fn parse_resume(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        job_limit: u32,
    ) -> Result<ParseResumeResponse, ApiError>;

    /// `POST /search-jobs` with the filter as the JSON body.
    async fn search_jobs(&self, filter: &SearchFilter) -> Result<SearchJobsResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    settings: ApiSettings,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self { settings, http })
    }

    fn endpoint(&self, path: &str) -> Result<url::Url, ApiError> {
        url::Url::parse(&self.settings.base_url)
            .and_then(|base| base.join(path))
            .map_err(|err| ApiError::InvalidUrl(err.to_string()))
    }
}

#[async_trait::async_trait]
impl MatcherApi for ApiClient {
    async fn health(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .get(self.endpoint("/health")?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)
    }

    async fn parse_resume(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        job_limit: u32,
    ) -> Result<ParseResumeResponse, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("resume", part)
            .text("job_limit", job_limit.to_string());

        let response = self
            .http
            .post(self.endpoint("/parse-resume")?)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        response
            .json::<ParseResumeResponse>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn search_jobs(&self, filter: &SearchFilter) -> Result<SearchJobsResponse, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/search-jobs")?)
            .json(filter)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        check_status(&response)?;
        response
            .json::<SearchJobsResponse>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

fn check_status(response: &reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}
