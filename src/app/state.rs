use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::app::recorder::Recorder;
use isoptera_core::config::AppConfig;
use isoptera_core::{
    Engine, EngineSnapshot, Pattern, RunLength, RunMetrics, RunPlan, TransitionTable,
};
use isoptera_data::{Symbol, TableSpec};

/// Step budget for tables loaded from disk when none is given.
pub const DEFAULT_CUSTOM_STEPS: u64 = 10_000;

/// What to simulate: a catalog pattern or a table file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSource {
    pub name: String,
    pub slug: String,
    pub spec: TableSpec,
    pub iterations: u64,
}

impl RunSource {
    pub fn from_pattern(pattern: Pattern) -> Self {
        Self {
            name: pattern.name().to_string(),
            slug: pattern.slug().to_string(),
            spec: pattern.spec(),
            iterations: pattern.iterations(),
        }
    }

    pub fn from_table_file(path: &Path, iterations: Option<u64>) -> Result<Self> {
        let spec = isoptera_io::read_table_spec(path)?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("custom")
            .to_string();
        Ok(Self {
            name: spec.name.clone().unwrap_or_else(|| stem.clone()),
            slug: stem,
            spec,
            iterations: iterations.unwrap_or(DEFAULT_CUSTOM_STEPS),
        })
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: Option<u64>) -> Self {
        if let Some(n) = iterations {
            self.iterations = n;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSelection {
    pub source: RunSource,
    pub length: RunLength,
    pub export: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u64,
    pub frames: u64,
    pub halted: bool,
    pub marked_cells: usize,
    pub video: Option<PathBuf>,
}

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub engine: Engine,
    pub snapshot: EngineSnapshot,
    pub plan: RunPlan,
    pub source: RunSource,
    pub metrics: RunMetrics,
    pub recorder: Option<Recorder>,
    pub video: Option<PathBuf>,
    pub complete: bool,
}

impl App {
    pub fn new(config: &AppConfig, selection: RunSelection) -> Result<Self> {
        config.validate()?;
        let RunSelection {
            source,
            length,
            export,
        } = selection;

        let blank = Symbol::try_from(config.grid.blank).map_err(anyhow::Error::msg)?;
        let table = TransitionTable::from_spec(&source.spec)
            .with_context(|| format!("building table for {}", source.name))?;
        let engine = Engine::with_blank(
            config.grid.width,
            config.grid.height,
            table,
            source.spec.start,
            blank,
        )?
        .with_final_states(source.spec.final_states.iter().copied())?;

        let mut plan = RunPlan::new(source.iterations, length, config.display.target_fps);
        if let Some(ipf) = config.display.iterations_per_frame {
            plan = plan.with_iterations_per_frame(ipf);
        }

        let recorder = if export {
            Some(Recorder::create(config, &source.slug, &engine)?)
        } else {
            None
        };

        tracing::info!(
            pattern = %source.name,
            steps = plan.total_steps,
            ipf = plan.iterations_per_frame,
            frames = plan.frame_count(),
            width = engine.width(),
            height = engine.height(),
            table = %engine.table().fingerprint(),
            config = %config.fingerprint(),
            "Starting run"
        );

        let mut app = Self {
            running: true,
            paused: false,
            snapshot: engine.snapshot(),
            engine,
            plan,
            source,
            metrics: RunMetrics::new(),
            recorder,
            video: None,
            complete: false,
        };
        if let Some(recorder) = app.recorder.as_mut() {
            recorder.record(&app.snapshot)?;
        }
        Ok(app)
    }

    /// Runs one frame's worth of steps and refreshes the snapshot.
    pub fn advance_frame(&mut self) -> Result<()> {
        if self.complete {
            return Ok(());
        }

        let budget = self.plan.steps_for_frame(self.engine.steps());
        let report = self.engine.run(budget);
        self.snapshot = self.engine.snapshot();
        self.metrics.record_frame(report.steps);
        tracing::debug!(steps = self.snapshot.steps, "Frame");

        if let Some(recorder) = self.recorder.as_mut() {
            recorder.record(&self.snapshot)?;
        }

        if report.halted && self.engine.steps() < self.plan.total_steps {
            self.metrics.record_halt();
        }
        if report.halted || self.engine.steps() >= self.plan.total_steps {
            self.complete()?;
        }
        Ok(())
    }

    fn complete(&mut self) -> Result<()> {
        self.complete = true;
        if let Some(recorder) = self.recorder.take() {
            let (path, frames) = recorder.finish(&self.snapshot)?;
            tracing::info!(path = %path.display(), frames, "Video written");
            self.video = Some(path);
        }
        tracing::info!(
            steps = self.engine.steps(),
            marked = self.snapshot.grid.marked_count(),
            early_halts = self.metrics.halts(),
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            steps_per_sec = self.metrics.throughput() as u64,
            "Run complete"
        );
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn set_iterations_per_frame(&mut self, ipf: u64) {
        self.plan = self.plan.with_iterations_per_frame(ipf);
    }

    /// Finalizes any pending video, even when the run was cut short.
    pub fn finish(mut self) -> Result<RunSummary> {
        if !self.complete {
            self.complete()?;
        }
        Ok(RunSummary {
            steps: self.engine.steps(),
            frames: self.metrics.frames(),
            halted: self.snapshot.halted,
            marked_cells: self.snapshot.grid.marked_count(),
            video: self.video,
        })
    }
}
