use crate::{
    Notice, ResolvedTheme, ResumeProfile, SearchFilter, SortKey, ThemePreference,
};

/// Everything a front-end needs to render one frame. Derived from
/// [`crate::AppState::view`]; owning copies keep the render layer decoupled
/// from state internals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashViewModel {
    pub theme_preference: ThemePreference,
    /// Exactly one of dark/light; never the raw `System` preference.
    pub resolved_theme: ResolvedTheme,
    pub notices: Vec<Notice>,
    /// True while a parse-resume request is outstanding; the upload control
    /// is disabled while set.
    pub upload_pending: bool,
    /// Visual progress in [0, 100].
    pub upload_progress: f32,
    pub search_pending: bool,
    pub criteria: SearchFilter,
    pub sort_key: SortKey,
    pub filter_tags: Vec<String>,
    pub profile: Option<ResumeProfile>,
    /// Pipeline output: sorted, then filtered.
    pub jobs: Vec<JobRowView>,
    /// Size of the full, unfiltered list (the export source).
    pub total_jobs: usize,
    pub can_export: bool,
    pub dirty: bool,
}

/// One row of the results view.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRowView {
    /// Stable identity key; survives resorting and refiltering.
    pub key: u64,
    pub position: String,
    pub company: String,
    pub salary: String,
    pub location: String,
    pub date_posted: String,
    /// Relevance rendered as a rounded percentage.
    pub relevance_percent: u8,
    pub tags: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub apply_url: String,
    /// Plain-text description (markup stripped, entities decoded).
    pub description: String,
    pub expanded: bool,
}
