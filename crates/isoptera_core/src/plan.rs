//! Frame pacing for a run: how many engine steps go into each displayed frame.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunLength {
    #[default]
    Short,
    Medium,
    Long,
}

impl RunLength {
    pub const ALL: [RunLength; 3] = [RunLength::Short, RunLength::Medium, RunLength::Long];

    pub fn seconds(self) -> u64 {
        match self {
            RunLength::Short => 5,
            RunLength::Medium => 15,
            RunLength::Long => 30,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RunLength::Short => "short",
            RunLength::Medium => "medium",
            RunLength::Long => "long",
        }
    }
}

impl fmt::Display for RunLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}s)", self.name(), self.seconds())
    }
}

impl FromStr for RunLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RunLength::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown run length '{s}' (short, medium, long)"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    pub total_steps: u64,
    pub iterations_per_frame: u64,
    pub target_fps: u32,
}

impl RunPlan {
    /// Spreads `total_steps` over `length` at `target_fps`.
    pub fn new(total_steps: u64, length: RunLength, target_fps: u32) -> Self {
        let frames = (length.seconds() * u64::from(target_fps.max(1))).max(1);
        Self {
            total_steps,
            iterations_per_frame: total_steps.div_ceil(frames).max(1),
            target_fps: target_fps.max(1),
        }
    }

    #[must_use]
    pub fn with_iterations_per_frame(mut self, ipf: u64) -> Self {
        self.iterations_per_frame = ipf.max(1);
        self
    }

    /// Number of frames including a partial last one.
    pub fn frame_count(&self) -> u64 {
        self.total_steps.div_ceil(self.iterations_per_frame)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps))
    }

    /// Steps to run for the frame that starts after `done` steps.
    pub fn steps_for_frame(&self, done: u64) -> u64 {
        self.iterations_per_frame
            .min(self.total_steps.saturating_sub(done))
    }
}
