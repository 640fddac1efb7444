//! Streams rendered frames into an animated GIF while a run progresses.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use isoptera_core::config::AppConfig;
use isoptera_core::{Engine, EngineSnapshot};
use isoptera_io::{export_file_name, Frame, GifWriter, Palette};

pub struct Recorder {
    path: PathBuf,
    writer: GifWriter<BufWriter<File>>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl Recorder {
    /// Opens `<export dir>/isoptera-<slug>-<timestamp>.gif`. Each grid cell
    /// becomes an integer block of pixels, at most `frame_size` on the long side.
    pub fn create(config: &AppConfig, slug: &str, engine: &Engine) -> Result<Self> {
        let scale = (config.display.frame_size / engine.width().max(engine.height())).max(1);
        let width = u32::try_from(engine.width() * scale).context("frame width")?;
        let height = u32::try_from(engine.height() * scale).context("frame height")?;

        std::fs::create_dir_all(&config.export.directory).with_context(|| {
            format!("creating export directory {}", config.export.directory.display())
        })?;
        let path = config
            .export
            .directory
            .join(export_file_name(slug, chrono::Local::now().naive_local()));
        let file =
            File::create(&path).with_context(|| format!("creating video {}", path.display()))?;
        let writer = GifWriter::new(
            BufWriter::new(file),
            width,
            height,
            config.display.target_fps,
        )?;

        tracing::info!(path = %path.display(), width, height, "Recording video");
        Ok(Self {
            path,
            writer,
            width,
            height,
            palette: Palette::default(),
        })
    }

    pub fn record(&mut self, snapshot: &EngineSnapshot) -> Result<()> {
        let frame = Frame::from_snapshot(snapshot, &self.palette, self.width, self.height)?;
        self.writer.write_frame(&frame)?;
        Ok(())
    }

    /// Closes the animation and saves `last` white-on-black as a `.png`
    /// still next to it.
    pub fn finish(self, last: &EngineSnapshot) -> Result<(PathBuf, u64)> {
        let frames = self.writer.finish();
        let still = self.path.with_extension("png");
        Frame::from_snapshot(last, &Palette::inverted(), self.width, self.height)?
            .save_png(&still)?;
        tracing::debug!(path = %still.display(), "Final still written");
        Ok((self.path, frames))
    }
}
