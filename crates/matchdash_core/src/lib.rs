//! Matchdash core: pure state machine, ranking pipeline, and view-model helpers.
mod criteria;
mod effect;
mod model;
mod msg;
mod pipeline;
mod sanitize;
mod state;
mod theme;
mod update;
mod view_model;

pub use criteria::CriteriaField;
pub use effect::Effect;
pub use model::{
    ApiFailure, FileUpload, Job, ParseOutcome, ResumeProfile, SearchFilter, DEFAULT_JOB_LIMIT,
};
pub use msg::Msg;
pub use pipeline::{rank_and_filter, SortKey};
pub use sanitize::sanitize_description;
pub use state::{
    AppState, Notice, Severity, MAX_UPLOAD_BYTES, PDF_MEDIA_TYPE, UPLOAD_RESET_TICKS,
};
pub use theme::{ResolvedTheme, ThemeContext, ThemePreference, ThemeSnapshot};
pub use update::update;
pub use view_model::{DashViewModel, JobRowView};
