use std::path::PathBuf;
use std::sync::mpsc;

use dash_logging::{dash_info, dash_warn};
use matchdash_core::{ApiFailure, Effect, Msg, ParseOutcome};
use matchdash_engine::{
    write_jobs_export, ApiError, ApiSettings, EngineCommand, EngineEvent, EngineHandle,
    ParseResumeResponse, SearchJobsResponse,
};

use super::ambient::AmbientSource;
use super::persistence;

/// Executes the effects the update loop requests and feeds completions back
/// as messages. Owns the engine handle; the run loop calls [`pump`] each
/// iteration to drain settled requests.
///
/// [`pump`]: EffectRunner::pump
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    state_dir: PathBuf,
    ambient: Box<dyn AmbientSource>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub(crate) fn new(
        settings: ApiSettings,
        state_dir: PathBuf,
        ambient: Box<dyn AmbientSource>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, ApiError> {
        let engine = EngineHandle::new(settings)?;
        Ok(Self {
            engine,
            state_dir,
            ambient,
            msg_tx,
        })
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistTheme(preference) => {
                    persistence::save_theme_preference(&self.state_dir, preference);
                }
                Effect::ApplyTheme(resolved) => {
                    // The headless shell has no chrome to restyle; the
                    // resolved value reaches renders via the view model.
                    dash_info!("Theme applied: {:?}", resolved);
                }
                Effect::QueryAmbient => {
                    let _ = self.msg_tx.send(Msg::AmbientChanged(self.ambient.current()));
                }
                Effect::CheckHealth => {
                    self.engine.submit(EngineCommand::CheckHealth);
                }
                Effect::SubmitResume {
                    seq,
                    file,
                    job_limit,
                } => {
                    dash_info!(
                        "Submitting resume seq={} name={} bytes={}",
                        seq,
                        file.name,
                        file.bytes.len()
                    );
                    self.engine.submit(EngineCommand::SubmitResume {
                        seq,
                        file_name: file.name,
                        bytes: file.bytes,
                        job_limit,
                    });
                }
                Effect::SubmitSearch { seq, filter } => {
                    dash_info!("Submitting search seq={}", seq);
                    self.engine.submit(EngineCommand::SubmitSearch { seq, filter });
                }
                Effect::ExportJobs { jobs } => {
                    match write_jobs_export(&self.state_dir, &jobs) {
                        Ok(Some(path)) => {
                            let _ = self.msg_tx.send(Msg::ExportFinished {
                                result: Ok(path.display().to_string()),
                            });
                        }
                        Ok(None) => {}
                        Err(err) => {
                            dash_warn!("Export failed: {}", err);
                            let _ = self.msg_tx.send(Msg::ExportFinished {
                                result: Err(err.to_string()),
                            });
                        }
                    }
                }
            }
        }
    }

    /// Drains settled engine requests into messages. Full error detail is
    /// logged here; the state machine only sees the collapsed failure.
    pub(crate) fn pump(&self) {
        while let Some(event) = self.engine.try_recv() {
            let msg = match event {
                EngineEvent::UploadSettled { seq, result } => Msg::UploadFinished {
                    seq,
                    result: map_parse(result),
                },
                EngineEvent::SearchSettled { seq, result } => Msg::SearchFinished {
                    seq,
                    result: map_search(result),
                },
                EngineEvent::HealthChecked { result } => {
                    if let Err(err) = &result {
                        dash_warn!("Health probe failed: {}", err);
                    }
                    Msg::HealthChecked {
                        healthy: result.is_ok(),
                    }
                }
            };
            let _ = self.msg_tx.send(msg);
        }
    }
}

fn map_parse(result: Result<ParseResumeResponse, ApiError>) -> Result<ParseOutcome, ApiFailure> {
    let response = result.map_err(collapse)?;
    if !response.success {
        // A body-level failure flag on a 2xx response; the state machine
        // treats it like any other failed request.
        dash_warn!("Parse-resume reported failure: {:?}", response.message);
        return Err(ApiFailure::Status(200));
    }
    Ok(ParseOutcome {
        jobs: response.jobs,
        resume_info: response.resume_info,
    })
}

fn map_search(
    result: Result<SearchJobsResponse, ApiError>,
) -> Result<Vec<matchdash_core::Job>, ApiFailure> {
    let response = result.map_err(collapse)?;
    if !response.success {
        dash_warn!("Search-jobs reported failure");
        return Err(ApiFailure::Status(200));
    }
    Ok(response.jobs)
}

fn collapse(err: ApiError) -> ApiFailure {
    dash_warn!("Request failed: {}", err);
    match err {
        ApiError::Status(code) => ApiFailure::Status(code),
        other => ApiFailure::Connectivity(other.to_string()),
    }
}
