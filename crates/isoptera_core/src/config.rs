//! Configuration management for runs.
//!
//! Strongly-typed sections mapping to `isoptera.toml`. Missing sections and
//! fields fall back to the `Default` impls.
//!
//! ## Example `isoptera.toml`
//!
//! ```toml
//! [grid]
//! width = 200
//! height = 200
//!
//! [display]
//! target_fps = 30
//! frame_size = 800
//!
//! [run]
//! pattern = "spiral"
//! length = "medium"
//! export = true
//! ```

use crate::patterns::Pattern;
use crate::plan::RunLength;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MAX_GRID_SIDE: usize = 4096;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    /// Initial value of every cell, 0 or 1.
    pub blank: u8,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            blank: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub target_fps: u32,
    /// Overrides the value derived from the run length.
    pub iterations_per_frame: Option<u64>,
    /// Side of the exported video frame in pixels.
    pub frame_size: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            iterations_per_frame: None,
            frame_size: 800,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RunConfig {
    pub pattern: Option<Pattern>,
    pub length: RunLength,
    pub export: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub display: DisplayConfig,
    pub run: RunConfig,
    pub export: ExportConfig,
}

impl AppConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.grid.width > 0, "Grid width must be positive");
        anyhow::ensure!(
            self.grid.width <= MAX_GRID_SIDE,
            "Grid width too large (max {MAX_GRID_SIDE})"
        );
        anyhow::ensure!(self.grid.height > 0, "Grid height must be positive");
        anyhow::ensure!(
            self.grid.height <= MAX_GRID_SIDE,
            "Grid height too large (max {MAX_GRID_SIDE})"
        );
        anyhow::ensure!(self.grid.blank <= 1, "Blank symbol must be 0 or 1");
        anyhow::ensure!(self.display.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(
            self.display.target_fps <= 240,
            "Target FPS too high (max 240)"
        );
        anyhow::ensure!(
            self.display.iterations_per_frame != Some(0),
            "Iterations per frame must be positive"
        );
        anyhow::ensure!(
            self.display.frame_size >= self.grid.width.max(self.grid.height),
            "Frame size must be at least the grid size"
        );
        Ok(())
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, or the defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| e.context(format!("invalid config {}", path.display())))?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.grid).as_bytes());
        hasher.update(format!("{:?}", self.run).as_bytes());
        hex::encode(hasher.finalize())
    }
}
