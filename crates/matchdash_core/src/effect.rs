use crate::{FileUpload, Job, ResolvedTheme, SearchFilter, ThemePreference};

/// Side effects requested by [`crate::update`]; executed by the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Write the raw (unresolved) preference to persisted storage.
    PersistTheme(ThemePreference),
    /// Apply the resolved value as the single active visual attribute.
    ApplyTheme(ResolvedTheme),
    /// Read the environment's ambient light/dark signal; answered with
    /// `Msg::AmbientChanged`.
    QueryAmbient,
    /// Probe `GET /health`; answered with `Msg::HealthChecked`.
    CheckHealth,
    /// Issue the multipart parse-resume request.
    SubmitResume {
        seq: u64,
        file: FileUpload,
        job_limit: u32,
    },
    /// Issue the search-jobs request.
    SubmitSearch { seq: u64, filter: SearchFilter },
    /// Write `jobs.csv` from the full, unfiltered job list.
    ExportJobs { jobs: Vec<Job> },
}
