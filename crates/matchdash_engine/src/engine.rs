use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use matchdash_core::SearchFilter;

use crate::client::{ApiClient, ApiError, ApiSettings, MatcherApi};
use crate::types::{ParseResumeResponse, SearchJobsResponse};

/// Work the shell hands to the engine. Sequence numbers travel with the
/// command and come back unchanged on the matching event, so the shell can
/// discard results from superseded submissions.
#[derive(Debug)]
pub enum EngineCommand {
    SubmitResume {
        seq: u64,
        file_name: String,
        bytes: Vec<u8>,
        job_limit: u32,
    },
    SubmitSearch {
        seq: u64,
        filter: SearchFilter,
    },
    CheckHealth,
}

/// Completion events emitted by the engine, polled by the shell.
#[derive(Debug)]
pub enum EngineEvent {
    UploadSettled {
        seq: u64,
        result: Result<ParseResumeResponse, ApiError>,
    },
    SearchSettled {
        seq: u64,
        result: Result<SearchJobsResponse, ApiError>,
    },
    HealthChecked {
        result: Result<(), ApiError>,
    },
}

/// Handle to the engine worker. Commands go in over a channel; the worker
/// owns a tokio runtime and spawns one task per command so a slow upload
/// never blocks a health probe. Events come back over a second channel
/// drained with [`EngineHandle::try_recv`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = ApiClient::new(settings)?;
        Ok(Self::with_api(Arc::new(client)))
    }

    /// Spins up the worker thread over an arbitrary transport. Used directly
    /// by tests that substitute the API.
    pub fn with_api(api: Arc<dyn MatcherApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // Exits when the handle drops and the command channel closes.
            while let Ok(command) = cmd_rx.recv() {
                let event_tx = event_tx.clone();
                let api = Arc::clone(&api);
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), command).await;
                    // The receiver may be gone during shutdown; nothing to do.
                    let _ = event_tx.send(event);
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, command: EngineCommand) {
        // A send failure means the worker thread is gone, which only happens
        // on shutdown; the shell stops polling at that point anyway.
        let _ = self.cmd_tx.send(command);
    }

    /// Non-blocking poll for the next completed command.
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(api: &dyn MatcherApi, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::SubmitResume {
            seq,
            file_name,
            bytes,
            job_limit,
        } => {
            let result = api.parse_resume(&file_name, bytes, job_limit).await;
            EngineEvent::UploadSettled { seq, result }
        }
        EngineCommand::SubmitSearch { seq, filter } => {
            let result = api.search_jobs(&filter).await;
            EngineEvent::SearchSettled { seq, result }
        }
        EngineCommand::CheckHealth => {
            let result = api.health().await;
            EngineEvent::HealthChecked { result }
        }
    }
}
