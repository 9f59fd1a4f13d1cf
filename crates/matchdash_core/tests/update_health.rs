use matchdash_core::{update, AppState, Effect, Msg, Severity};

fn init_logging() {
    dash_logging::initialize_for_tests();
}

#[test]
fn startup_queries_ambient_and_probes_health() {
    init_logging();
    let (_, effects) = update(AppState::new(), Msg::AppStarted);
    assert_eq!(effects, vec![Effect::QueryAmbient, Effect::CheckHealth]);
}

#[test]
fn failed_probe_raises_a_connectivity_warning() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::HealthChecked { healthy: false });

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.notices.len(), 1);
    assert_eq!(view.notices[0].severity, Severity::Warning);
    assert!(view.notices[0]
        .text
        .contains("Cannot reach the matching service"));
}

#[test]
fn healthy_probe_stays_silent() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::HealthChecked { healthy: true });

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert!(state.view().notices.is_empty());
}
