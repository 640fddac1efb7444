//! Run counters and logging setup.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const LOG_EVERY_STEPS: u64 = 10_000;

/// Counters for a single run. Cheap enough to bump once per frame.
pub struct RunMetrics {
    steps: AtomicU64,
    frames: AtomicU64,
    halts: AtomicU64,
    start_time: Instant,
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RunMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: AtomicU64::new(0),
            frames: AtomicU64::new(0),
            halts: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a rendered frame covering `steps` engine steps.
    pub fn record_frame(&self, steps: u64) {
        let before = self.steps.fetch_add(steps, Ordering::Relaxed);
        let frames = self.frames.fetch_add(1, Ordering::Relaxed) + 1;
        let after = before + steps;

        if after / LOG_EVERY_STEPS > before / LOG_EVERY_STEPS {
            tracing::info!(
                steps = after,
                frames,
                elapsed_ms = self.elapsed().as_millis() as u64,
                "Simulation progress"
            );
        }
    }

    pub fn record_halt(&self) {
        self.halts.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(steps = self.steps(), "Turmite halted before its step budget");
    }

    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn halts(&self) -> u64 {
        self.halts.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Steps per second since creation.
    #[must_use]
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.steps() as f64 / secs
        } else {
            0.0
        }
    }
}

/// Installs a stderr fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` (e.g. `"info"`).
pub fn init_logging(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = RunMetrics::new();
        assert_eq!(metrics.steps(), 0);
        assert_eq!(metrics.frames(), 0);
        assert_eq!(metrics.halts(), 0);
    }

    #[test]
    fn test_record_frame() {
        let metrics = RunMetrics::new();
        metrics.record_frame(69);
        metrics.record_frame(69);
        assert_eq!(metrics.steps(), 138);
        assert_eq!(metrics.frames(), 2);
    }

    #[test]
    fn test_record_halt() {
        let metrics = RunMetrics::new();
        metrics.record_halt();
        assert_eq!(metrics.halts(), 1);
    }
}
