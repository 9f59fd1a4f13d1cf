use crate::{
    ApiFailure, CriteriaField, FileUpload, Job, ParseOutcome, ResolvedTheme, SortKey,
    ThemePreference,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Shell finished booting; kicks off the health probe and ambient query.
    AppStarted,
    /// Repeating timer tick; drives the upload progress animation and its
    /// post-completion reset countdown.
    Tick,
    /// Preference loaded from persisted storage at startup (`None` when
    /// nothing valid was stored).
    ThemeRestored(Option<ThemePreference>),
    /// User picked a display preference.
    ThemeSelected(ThemePreference),
    /// The environment's ambient light/dark signal was read or changed.
    AmbientChanged(ResolvedTheme),
    /// User submitted the upload form with the selected file, if any.
    UploadSubmitted {
        file: Option<FileUpload>,
        job_limit: u32,
    },
    /// Parse-resume request settled.
    UploadFinished {
        seq: u64,
        result: Result<ParseOutcome, ApiFailure>,
    },
    /// User submitted the manual search form; criteria come from state.
    SearchSubmitted,
    /// Search-jobs request settled.
    SearchFinished {
        seq: u64,
        result: Result<Vec<Job>, ApiFailure>,
    },
    /// User added a value to one of the four criteria sequences.
    CriterionAdded {
        field: CriteriaField,
        value: String,
    },
    /// User removed a value from one of the four criteria sequences.
    CriterionRemoved {
        field: CriteriaField,
        value: String,
    },
    /// User chose a sort key for the results view.
    SortKeySelected(SortKey),
    /// Free-text filter box changed; comma/whitespace separated tags.
    FilterTagsEdited(String),
    /// User expanded or collapsed a job row, identified by its stable key.
    JobRowToggled { key: u64 },
    /// User asked for the CSV export of the full job list.
    ExportRequested,
    /// Export side effect settled; `Ok` carries the written path for the
    /// success notice.
    ExportFinished { result: Result<String, String> },
    /// Liveness probe settled.
    HealthChecked { healthy: bool },
    /// User dismissed an inline notice.
    NoticeDismissed(u64),
    /// Fallback for placeholder wiring.
    NoOp,
}
