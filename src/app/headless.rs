//! Runs the whole budget without a terminal, as fast as the engine goes.

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::app::state::{App, RunSelection, RunSummary};
use isoptera_core::config::AppConfig;
use isoptera_core::EngineSnapshot;

/// Returns the summary and the last snapshot.
pub fn run_headless(
    config: &AppConfig,
    selection: RunSelection,
    shutdown: &AtomicBool,
) -> Result<(RunSummary, EngineSnapshot)> {
    let mut app = App::new(config, selection)?;
    while !app.is_complete() {
        if shutdown.load(Ordering::SeqCst) {
            tracing::warn!(steps = app.engine.steps(), "Interrupted, finishing early");
            break;
        }
        app.advance_frame()?;
    }
    let snapshot = app.snapshot.clone();
    Ok((app.finish()?, snapshot))
}
