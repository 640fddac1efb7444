//! Animated GIF export.
//!
//! Frames carry three colours, so every frame fits the GIF palette exactly.

use crate::error::{IoError, Result};
use crate::raster::Frame;
use chrono::NaiveDateTime;
use image::buffer::ConvertBuffer;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, RgbaImage};
use std::io::Write;

pub struct GifWriter<W: Write> {
    encoder: GifEncoder<W>,
    width: u32,
    height: u32,
    delay: Delay,
    frames: u64,
}

impl<W: Write> GifWriter<W> {
    /// Starts a looping animation at `fps` frames per second.
    pub fn new(inner: W, width: u32, height: u32, fps: u32) -> Result<Self> {
        if width == 0 || height == 0 || fps == 0 {
            return Err(IoError::validation(format!(
                "video needs positive size and rate, got {width}x{height} @ {fps}"
            )));
        }
        let mut encoder = GifEncoder::new(inner);
        encoder.set_repeat(Repeat::Infinite)?;
        Ok(Self {
            encoder,
            width,
            height,
            delay: Delay::from_numer_denom_ms(1000, fps),
            frames: 0,
        })
    }

    pub fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        if frame.width() != self.width || frame.height() != self.height {
            return Err(IoError::validation(format!(
                "frame is {}x{} but the video is {}x{}",
                frame.width(),
                frame.height(),
                self.width,
                self.height
            )));
        }

        let rgba: RgbaImage = frame.image().convert();
        self.encoder
            .encode_frame(image::Frame::from_parts(rgba, 0, 0, self.delay))?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Writes the trailer and returns the number of frames written.
    pub fn finish(self) -> u64 {
        let frames = self.frames;
        // the encoder writes the trailer on drop
        drop(self);
        frames
    }
}

/// `isoptera-<slug>-<yyyymmdd-hhmmss>.gif`
pub fn export_file_name(slug: &str, at: NaiveDateTime) -> String {
    format!("isoptera-{slug}-{}.gif", at.format("%Y%m%d-%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Palette;
    use image::codecs::gif::GifDecoder;
    use image::AnimationDecoder;
    use isoptera_core::{Engine, Pattern};
    use std::io::Cursor;

    fn frame(size: u32) -> Frame {
        let engine = Engine::new(4, 4, Pattern::LangtonsAnt.table().unwrap(), 0).unwrap();
        Frame::from_snapshot(&engine.snapshot(), &Palette::default(), size, size).unwrap()
    }

    #[test]
    fn test_animation_layout() {
        let mut bytes = Vec::new();
        let mut writer = GifWriter::new(&mut bytes, 8, 8, 25).unwrap();
        writer.write_frame(&frame(8)).unwrap();
        writer.write_frame(&frame(8)).unwrap();
        assert_eq!(writer.finish(), 2);

        assert!(bytes.starts_with(b"GIF89a"));
        let decoder = GifDecoder::new(Cursor::new(bytes)).unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();
        assert_eq!(frames.len(), 2);
        let first = frames[0].buffer();
        assert_eq!(first.dimensions(), (8, 8));
        assert_eq!(first.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(first.get_pixel(4, 4).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_rejects_mismatched_frame() {
        let mut writer = GifWriter::new(Vec::new(), 8, 8, 30).unwrap();
        assert!(writer.write_frame(&frame(4)).is_err());
        assert_eq!(writer.frames(), 0);
    }

    #[test]
    fn test_rejects_empty_video() {
        assert!(GifWriter::new(Vec::new(), 0, 8, 30).is_err());
        assert!(GifWriter::new(Vec::new(), 8, 8, 0).is_err());
    }

    #[test]
    fn test_export_file_name() {
        let at = chrono::NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap();
        assert_eq!(
            export_file_name("spiral", at),
            "isoptera-spiral-20240309-140507.gif"
        );
    }
}
