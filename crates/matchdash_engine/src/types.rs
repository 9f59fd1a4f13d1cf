use matchdash_core::{Job, ResumeProfile};
use serde::Deserialize;

/// Response body of `POST /parse-resume`. Every field is optional on the
/// wire; missing collections decode as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseResumeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub resume_info: Option<ResumeProfile>,
    #[serde(default)]
    pub jobs_found: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body of `POST /search-jobs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchJobsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub jobs: Vec<Job>,
}
