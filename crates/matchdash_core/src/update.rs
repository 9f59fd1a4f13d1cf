use crate::state::{MAX_UPLOAD_BYTES, PDF_MEDIA_TYPE, UPLOAD_RESET_TICKS};
use crate::{ApiFailure, AppState, Effect, Msg, Severity, ThemePreference};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AppStarted => vec![Effect::QueryAmbient, Effect::CheckHealth],
        Msg::Tick => {
            advance_upload_progress(&mut state);
            Vec::new()
        }
        Msg::ThemeRestored(stored) => {
            // A persisted preference overrides the configured default; the
            // initialization load counts as a change, so it re-persists and
            // re-applies like any other.
            if let Some(preference) = stored {
                state.theme_preference = preference;
            }
            state.mark_dirty();
            theme_change_effects(&mut state)
        }
        Msg::ThemeSelected(preference) => {
            state.theme_preference = preference;
            state.mark_dirty();
            theme_change_effects(&mut state)
        }
        Msg::AmbientChanged(ambient) => {
            state.ambient = ambient;
            let before = state.resolved_theme;
            state.resolve_theme();
            if state.resolved_theme != before {
                state.mark_dirty();
                vec![Effect::ApplyTheme(state.resolved_theme)]
            } else {
                Vec::new()
            }
        }
        Msg::UploadSubmitted { file, job_limit } => {
            // The control is disabled while pending; drop re-entrant submits.
            if state.upload_pending {
                return (state, Vec::new());
            }
            let file = match file {
                Some(file) => file,
                None => {
                    state.notify(Severity::Error, "Select a PDF resume before uploading.");
                    return (state, Vec::new());
                }
            };
            if file.media_type != PDF_MEDIA_TYPE {
                state.notify(Severity::Error, "Only PDF files are supported.");
                return (state, Vec::new());
            }
            if file.bytes.len() > MAX_UPLOAD_BYTES {
                state.notify(
                    Severity::Error,
                    "Resume file is larger than the 10 MiB limit.",
                );
                return (state, Vec::new());
            }
            state.upload_pending = true;
            state.upload_progress = 0.0;
            state.upload_reset_ticks = None;
            state.upload_seq += 1;
            state.mark_dirty();
            vec![Effect::SubmitResume {
                seq: state.upload_seq,
                file,
                job_limit,
            }]
        }
        Msg::UploadFinished { seq, result } => {
            if seq != state.upload_seq {
                // A newer upload superseded this one; only the freshest
                // result may touch state.
                return (state, Vec::new());
            }
            state.upload_pending = false;
            state.upload_progress = 100.0;
            state.upload_reset_ticks = Some(UPLOAD_RESET_TICKS);
            match result {
                Ok(outcome) => {
                    let found = outcome.jobs.len();
                    state.replace_jobs(outcome.jobs);
                    state.profile = outcome.resume_info;
                    state.notify(
                        Severity::Success,
                        format!("Found {found} matching jobs."),
                    );
                }
                Err(failure) => {
                    state.notify(
                        Severity::Error,
                        failure_text("process the resume", &failure),
                    );
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchSubmitted => {
            if state.search_pending {
                return (state, Vec::new());
            }
            if state.criteria.is_empty() {
                state.notify(
                    Severity::Error,
                    "Add at least one search criterion before searching.",
                );
                return (state, Vec::new());
            }
            state.search_pending = true;
            state.search_seq += 1;
            state.mark_dirty();
            vec![Effect::SubmitSearch {
                seq: state.search_seq,
                filter: state.criteria.clone(),
            }]
        }
        Msg::SearchFinished { seq, result } => {
            if seq != state.search_seq {
                return (state, Vec::new());
            }
            state.search_pending = false;
            match result {
                Ok(jobs) => {
                    let found = jobs.len();
                    // Manual search never touches the resume profile.
                    state.replace_jobs(jobs);
                    state.notify(
                        Severity::Success,
                        format!("Found {found} matching jobs."),
                    );
                }
                Err(failure) => {
                    state.notify(
                        Severity::Error,
                        failure_text("search for jobs", &failure),
                    );
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::CriterionAdded { field, value } => {
            if state.criteria.add_criterion(field, &value) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CriterionRemoved { field, value } => {
            if state.criteria.remove_criterion(field, &value) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SortKeySelected(key) => {
            if state.sort_key != key {
                state.sort_key = key;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FilterTagsEdited(raw) => {
            let tags = parse_filter_tags(&raw);
            if state.filter_tags != tags {
                state.filter_tags = tags;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::JobRowToggled { key } => {
            if !state.expanded.remove(&key) {
                state.expanded.insert(key);
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::ExportRequested => {
            if state.jobs.is_empty() {
                // Nothing to export; a silent no-op by contract.
                Vec::new()
            } else {
                vec![Effect::ExportJobs {
                    jobs: state.jobs.clone(),
                }]
            }
        }
        Msg::ExportFinished { result } => {
            match result {
                Ok(path) => {
                    state.notify(Severity::Success, format!("Exported jobs to {path}."));
                }
                Err(_) => {
                    state.notify(Severity::Error, "Failed to export jobs.");
                }
            }
            Vec::new()
        }
        Msg::HealthChecked { healthy } => {
            if !healthy {
                state.notify(
                    Severity::Warning,
                    "Cannot reach the matching service; check that it is running.",
                );
            }
            Vec::new()
        }
        Msg::NoticeDismissed(id) => {
            if state.dismiss_notice(id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Effects of a preference change: at most one ambient query, exactly one
/// visual-attribute application, exactly one persisted write.
fn theme_change_effects(state: &mut AppState) -> Vec<Effect> {
    state.resolve_theme();
    let mut effects = Vec::new();
    if state.theme_preference == ThemePreference::System {
        effects.push(Effect::QueryAmbient);
    }
    effects.push(Effect::ApplyTheme(state.resolved_theme));
    effects.push(Effect::PersistTheme(state.theme_preference));
    effects
}

/// Upload progress creeps toward 90% while the request is outstanding (a
/// visual approximation, not tied to real upload bytes) and counts down to
/// the reset after completion snapped it to 100%.
fn advance_upload_progress(state: &mut AppState) {
    if state.upload_pending {
        state.upload_progress += (90.0 - state.upload_progress) * 0.1;
        state.mark_dirty();
    } else if let Some(ticks) = state.upload_reset_ticks {
        if ticks <= 1 {
            state.upload_reset_ticks = None;
            state.upload_progress = 0.0;
            state.mark_dirty();
        } else {
            state.upload_reset_ticks = Some(ticks - 1);
        }
    }
}

fn parse_filter_tags(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn failure_text(action: &str, failure: &ApiFailure) -> String {
    match failure {
        ApiFailure::Connectivity(_) => {
            "Cannot reach the matching service; check that it is running.".to_string()
        }
        // Status and body detail stay in the logs, not the notice.
        ApiFailure::Status(_) => format!("Failed to {action}. Please try again."),
    }
}
