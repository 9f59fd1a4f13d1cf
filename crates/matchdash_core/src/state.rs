use std::collections::HashSet;

use crate::view_model::{DashViewModel, JobRowView};
use crate::{
    rank_and_filter, sanitize_description, Job, ResolvedTheme, ResumeProfile, SearchFilter,
    SortKey, ThemePreference,
};

/// Upload size cap; larger files are rejected before any network call.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// The only media type the upload form accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Ticks between the 100% snap and the reset to 0, roughly 1.2 s at the
/// shell's default tick interval.
pub const UPLOAD_RESET_TICKS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Inline notification. Independently dismissible; never auto-expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub severity: Severity,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) theme_preference: ThemePreference,
    /// Last observed ambient light/dark signal.
    pub(crate) ambient: ResolvedTheme,
    pub(crate) resolved_theme: ResolvedTheme,
    pub(crate) jobs: Vec<Job>,
    pub(crate) profile: Option<ResumeProfile>,
    pub(crate) criteria: SearchFilter,
    pub(crate) sort_key: SortKey,
    pub(crate) filter_tags: Vec<String>,
    /// Stable keys of expanded rows; cleared when the job list is replaced.
    pub(crate) expanded: HashSet<u64>,
    pub(crate) notices: Vec<Notice>,
    pub(crate) next_notice_id: u64,
    pub(crate) upload_pending: bool,
    /// Latest issued upload sequence number; stale completions are dropped.
    pub(crate) upload_seq: u64,
    /// Visual progress in [0, 100]; an approximation, not tied to bytes.
    pub(crate) upload_progress: f32,
    pub(crate) upload_reset_ticks: Option<u8>,
    pub(crate) search_pending: bool,
    pub(crate) search_seq: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the rendered view: pipeline output, notices, theme, and the
    /// pending flags the front-end uses to disable controls.
    pub fn view(&self) -> DashViewModel {
        let ranked = rank_and_filter(&self.jobs, self.sort_key, &self.filter_tags);
        let jobs = ranked
            .iter()
            .map(|job| self.job_row(job))
            .collect::<Vec<_>>();
        DashViewModel {
            theme_preference: self.theme_preference,
            resolved_theme: self.resolved_theme,
            notices: self.notices.clone(),
            upload_pending: self.upload_pending,
            upload_progress: self.upload_progress,
            search_pending: self.search_pending,
            criteria: self.criteria.clone(),
            sort_key: self.sort_key,
            filter_tags: self.filter_tags.clone(),
            profile: self.profile.clone(),
            jobs,
            total_jobs: self.jobs.len(),
            can_export: !self.jobs.is_empty(),
            dirty: self.dirty,
        }
    }

    fn job_row(&self, job: &Job) -> JobRowView {
        let key = job.ui_key();
        JobRowView {
            key,
            position: job.position.clone(),
            company: job.company.clone(),
            salary: job.salary.clone(),
            location: job.location.clone(),
            date_posted: job.date_posted.clone(),
            relevance_percent: relevance_percent(job.relevance_score),
            tags: job.tags.clone(),
            matched_keywords: job.matched_keywords.clone(),
            apply_url: job.apply_url.clone(),
            description: sanitize_description(&job.description),
            expanded: self.expanded.contains(&key),
        }
    }

    /// Recomputes the resolved theme from the preference and the cached
    /// ambient signal. Invariant: the result is never `System`.
    pub(crate) fn resolve_theme(&mut self) {
        self.resolved_theme = self.theme_preference.resolve(self.ambient);
    }

    /// Replaces the job list wholesale. Row identity is invalidated, so the
    /// expanded set is cleared with it.
    pub(crate) fn replace_jobs(&mut self, jobs: Vec<Job>) {
        self.jobs = jobs;
        self.expanded.clear();
    }

    pub(crate) fn notify(&mut self, severity: Severity, text: impl Into<String>) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        self.notices.push(Notice {
            id,
            severity,
            text: text.into(),
        });
        self.mark_dirty();
        id
    }

    pub(crate) fn dismiss_notice(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

fn relevance_percent(score: f64) -> u8 {
    (score.clamp(0.0, 1.0) * 100.0).round() as u8
}
