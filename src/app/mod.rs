pub mod headless;
pub mod input;
pub mod recorder;
pub mod render;
pub mod selector;
pub mod state;

pub use headless::run_headless;
pub use selector::Selector;
pub use state::{App, RunSelection, RunSource, RunSummary};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use isoptera_tui::Tui;

impl App {
    /// Draws and advances at the plan's frame rate. Simulation speed is
    /// controlled only through iterations per frame.
    pub async fn run(&mut self, tui: &mut Tui, shutdown: Arc<AtomicBool>) -> Result<()> {
        let mut last_frame = Instant::now();

        while self.running && !shutdown.load(Ordering::SeqCst) {
            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            let interval = self.plan.frame_interval();
            let timeout = interval.saturating_sub(last_frame.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_frame.elapsed() >= interval {
                if !self.paused {
                    self.advance_frame()?;
                }
                last_frame = Instant::now();
            }
        }
        Ok(())
    }
}
