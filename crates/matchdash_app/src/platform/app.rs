use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use dash_logging::dash_info;
use matchdash_core::{update, AppState, DashViewModel, Msg, ThemeContext};
use matchdash_engine::ApiSettings;

use super::ambient::EnvAmbientSource;
use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence;

/// Drives the upload progress animation and its reset countdown.
const TICK_INTERVAL: Duration = Duration::from_millis(150);

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::Both);

    let state_dir = state_dir_from_env();
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();

    let runner = EffectRunner::new(
        ApiSettings::from_env(),
        state_dir.clone(),
        Box::new(EnvAmbientSource),
        msg_tx.clone(),
    )
    .context("failed to start engine")?;

    // Background tick to drive progress animation and render throttling.
    {
        let msg_tx = msg_tx.clone();
        thread::spawn(move || {
            while msg_tx.send(Msg::Tick).is_ok() {
                thread::sleep(TICK_INTERVAL);
            }
        });
    }

    let _ = msg_tx.send(Msg::ThemeRestored(persistence::load_theme_preference(
        &state_dir,
    )));
    let _ = msg_tx.send(Msg::AppStarted);

    let mut state = AppState::new();
    let mut theme_ctx = ThemeContext::default();

    loop {
        match msg_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(msg) => {
                let (next, effects) = update(std::mem::take(&mut state), msg);
                state = next;
                runner.run(effects);
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }

        runner.pump();

        if state.consume_dirty() {
            let view = state.view();
            theme_ctx.provision(view.theme_preference, view.resolved_theme);
            render_status(&view, &theme_ctx);
        }
    }

    Ok(())
}

fn state_dir_from_env() -> PathBuf {
    match std::env::var("MATCHDASH_STATE_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("./state"),
    }
}

/// Render pass of the headless shell: one status line per dirty frame.
fn render_status(view: &DashViewModel, theme_ctx: &ThemeContext) {
    let snapshot = theme_ctx.current();
    dash_info!(
        "theme={:?} jobs={} shown={} upload={} search={} notices={}",
        snapshot.resolved,
        view.total_jobs,
        view.jobs.len(),
        if view.upload_pending {
            format!("{:.0}%", view.upload_progress)
        } else {
            "idle".to_string()
        },
        if view.search_pending { "pending" } else { "idle" },
        view.notices.len()
    );
}
