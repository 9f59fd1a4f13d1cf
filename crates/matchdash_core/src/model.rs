use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Deserializer, Serialize};

/// Default bound on requested results, matching the backend's form default.
pub const DEFAULT_JOB_LIMIT: u32 = 20;

/// One matched opportunity returned by the external matching service.
///
/// Immutable once received; the list it belongs to is replaced wholesale on
/// every successful fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    /// Free text; currency and period are unspecified upstream.
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub apply_url: String,
    /// Date string as sent by the service; parsed only for sorting.
    #[serde(default)]
    pub date_posted: String,
    /// May contain markup and encoded entities; sanitized for display.
    #[serde(default)]
    pub description: String,
    /// Normalized relevance in [0, 1].
    #[serde(default)]
    pub relevance_score: f64,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
}

impl Job {
    /// Stable UI identity derived from immutable fields, so per-row state
    /// (expanded/collapsed) survives resorting and refiltering of the same
    /// list. Jobs carry no server-side id.
    pub fn ui_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.apply_url.hash(&mut hasher);
        self.position.hash(&mut hasher);
        self.company.hash(&mut hasher);
        hasher.finish()
    }
}

/// Structured attributes the service extracted from an uploaded resume.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResumeProfile {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub job_titles: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default, deserialize_with = "lenient_years")]
    pub years_of_experience: u32,
    #[serde(default)]
    pub preferred_roles: Vec<String>,
}

/// The backend reports years of experience as either a number or free text
/// such as "Not determined". Anything non-numeric decodes as 0.
fn lenient_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => n,
        Raw::Text(text) => text.trim().parse().unwrap_or(0),
    })
}

/// User-specified criteria sent verbatim to the external matcher.
///
/// Each sequence is ordered and duplicate-free; see [`crate::CriteriaField`]
/// for the incremental add/remove operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub skills: Vec<String>,
    pub technologies: Vec<String>,
    pub job_titles: Vec<String>,
    pub industries: Vec<String>,
    pub limit: u32,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            technologies: Vec::new(),
            job_titles: Vec::new(),
            industries: Vec::new(),
            limit: DEFAULT_JOB_LIMIT,
        }
    }
}

impl SearchFilter {
    /// True when every criteria sequence is empty; such a filter is rejected
    /// locally instead of being sent to the service.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.technologies.is_empty()
            && self.job_titles.is_empty()
            && self.industries.is_empty()
    }
}

/// A user-selected file handed to the upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    /// Declared media type; must be exactly `application/pdf`.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// Decoded payload of a successful parse-resume call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseOutcome {
    pub jobs: Vec<Job>,
    pub resume_info: Option<ResumeProfile>,
}

/// Request failure as reported by the shell, already collapsed to the two
/// categories the state machine distinguishes. Full error detail is logged
/// at the effect layer before it is reduced to this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// Transport-level failure (connect, DNS, timeout).
    Connectivity(String),
    /// Non-success HTTP status from the service.
    Status(u16),
}
