use matchdash_core::{update, AppState, Effect, Job, Msg, SortKey};

fn init_logging() {
    dash_logging::initialize_for_tests();
}

fn job(position: &str, score: f64) -> Job {
    Job {
        position: position.to_string(),
        company: "Acme".to_string(),
        apply_url: format!("https://example.com/{position}"),
        relevance_score: score,
        ..Job::default()
    }
}

fn with_jobs(jobs: Vec<Job>) -> AppState {
    let upload = matchdash_core::FileUpload {
        name: "resume.pdf".to_string(),
        media_type: "application/pdf".to_string(),
        bytes: vec![0u8; 16],
    };
    let (state, _) = update(AppState::new(), Msg::UploadSubmitted {
        file: Some(upload),
        job_limit: 20,
    });
    let (state, _) = update(state, Msg::UploadFinished {
        seq: 1,
        result: Ok(matchdash_core::ParseOutcome {
            jobs,
            resume_info: None,
        }),
    });
    state
}

#[test]
fn expanded_rows_survive_resorting() {
    init_logging();
    let state = with_jobs(vec![job("alpha", 0.2), job("beta", 0.9)]);

    let key = state
        .view()
        .jobs
        .iter()
        .find(|row| row.position == "alpha")
        .unwrap()
        .key;
    let (state, _) = update(state, Msg::JobRowToggled { key });
    assert!(state.view().jobs.iter().any(|r| r.expanded));

    // Resorting moves the row but keeps its identity, and with it the
    // expanded flag.
    let (state, _) = update(state, Msg::SortKeySelected(SortKey::Relevance));
    let alpha = state
        .view()
        .jobs
        .iter()
        .find(|row| row.position == "alpha")
        .unwrap()
        .clone();
    assert!(alpha.expanded);
}

#[test]
fn replacing_the_list_clears_expanded_rows() {
    init_logging();
    let state = with_jobs(vec![job("alpha", 0.2)]);
    let key = state.view().jobs[0].key;
    let (state, _) = update(state, Msg::JobRowToggled { key });

    let (state, _) = update(state, Msg::SearchFinished {
        seq: 0,
        result: Ok(vec![job("alpha", 0.2)]),
    });

    assert!(state.view().jobs.iter().all(|row| !row.expanded));
}

#[test]
fn rows_render_sanitized_description_and_percent() {
    init_logging();
    let mut seeded = job("alpha", 0.875);
    seeded.description = "<p>Build &amp; ship</p>".to_string();
    seeded.tags = vec!["rust".to_string()];
    let state = with_jobs(vec![seeded]);

    let row = state.view().jobs[0].clone();
    assert_eq!(row.description, "Build & ship");
    assert_eq!(row.relevance_percent, 88);
}

#[test]
fn filter_box_text_parses_into_tags() {
    init_logging();
    let state = with_jobs(vec![job("alpha", 0.2)]);

    let (state, _) = update(
        state,
        Msg::FilterTagsEdited("  rust, remote  senior ".to_string()),
    );

    assert_eq!(state.view().filter_tags, vec!["rust", "remote", "senior"]);
}

#[test]
fn export_is_a_noop_on_an_empty_list() {
    init_logging();
    let (_, effects) = update(AppState::new(), Msg::ExportRequested);
    assert!(effects.is_empty());
}

#[test]
fn export_uses_the_full_unfiltered_list() {
    init_logging();
    let mut visible = job("alpha", 0.2);
    visible.tags = vec!["rust".to_string()];
    let hidden = job("beta", 0.9);
    let state = with_jobs(vec![visible, hidden]);

    // Narrow the view; the export must still carry both jobs.
    let (state, _) = update(state, Msg::FilterTagsEdited("rust".to_string()));
    assert_eq!(state.view().jobs.len(), 1);

    let (_, effects) = update(state, Msg::ExportRequested);
    match &effects[..] {
        [Effect::ExportJobs { jobs }] => assert_eq!(jobs.len(), 2),
        other => panic!("unexpected effects {other:?}"),
    }
}
