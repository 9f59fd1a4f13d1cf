use std::sync::Arc;
use std::time::{Duration, Instant};

use matchdash_core::SearchFilter;
use matchdash_engine::{
    ApiError, EngineCommand, EngineEvent, EngineHandle, MatcherApi, ParseResumeResponse,
    SearchJobsResponse,
};

struct FakeApi {
    healthy: bool,
}

#[async_trait::async_trait]
impl MatcherApi for FakeApi {
    async fn health(&self) -> Result<(), ApiError> {
        if self.healthy {
            Ok(())
        } else {
            Err(ApiError::Network("connection refused".to_string()))
        }
    }

    async fn parse_resume(
        &self,
        file_name: &str,
        _bytes: Vec<u8>,
        _job_limit: u32,
    ) -> Result<ParseResumeResponse, ApiError> {
        let mut job = matchdash_core::Job::default();
        job.position = file_name.to_string();
        Ok(ParseResumeResponse {
            success: true,
            jobs: vec![job],
            ..ParseResumeResponse::default()
        })
    }

    async fn search_jobs(&self, filter: &SearchFilter) -> Result<SearchJobsResponse, ApiError> {
        let mut jobs = Vec::new();
        for skill in &filter.skills {
            let mut job = matchdash_core::Job::default();
            job.position = skill.clone();
            jobs.push(job);
        }
        Ok(SearchJobsResponse {
            success: true,
            jobs,
        })
    }
}

fn wait_for_event(handle: &EngineHandle) -> EngineEvent {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "no event within deadline");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn upload_command_settles_with_its_sequence_number() {
    let handle = EngineHandle::with_api(Arc::new(FakeApi { healthy: true }));
    handle.submit(EngineCommand::SubmitResume {
        seq: 7,
        file_name: "resume.pdf".to_string(),
        bytes: vec![1, 2, 3],
        job_limit: 20,
    });

    match wait_for_event(&handle) {
        EngineEvent::UploadSettled { seq, result } => {
            assert_eq!(seq, 7);
            let response = result.expect("upload ok");
            assert_eq!(response.jobs[0].position, "resume.pdf");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn search_command_carries_the_filter_through() {
    let handle = EngineHandle::with_api(Arc::new(FakeApi { healthy: true }));
    let mut filter = SearchFilter::default();
    filter.skills.push("rust".to_string());

    handle.submit(EngineCommand::SubmitSearch { seq: 3, filter });

    match wait_for_event(&handle) {
        EngineEvent::SearchSettled { seq, result } => {
            assert_eq!(seq, 3);
            assert_eq!(result.expect("search ok").jobs[0].position, "rust");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn health_failure_comes_back_as_an_event() {
    let handle = EngineHandle::with_api(Arc::new(FakeApi { healthy: false }));
    handle.submit(EngineCommand::CheckHealth);

    match wait_for_event(&handle) {
        EngineEvent::HealthChecked { result } => {
            assert!(matches!(result, Err(ApiError::Network(_))));
        }
        other => panic!("unexpected event {other:?}"),
    }
}
