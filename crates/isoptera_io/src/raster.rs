//! Two-colour raster frames rendered from engine snapshots.

use crate::error::{IoError, Result};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};
use isoptera_core::EngineSnapshot;
use std::path::Path;

pub type Rgb = [u8; 3];

/// Colours for blank cells, marked cells and the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub blank: Rgb,
    pub marked: Rgb,
    pub cursor: Rgb,
}

impl Default for Palette {
    /// Black ink on white paper, red cursor.
    fn default() -> Self {
        Self {
            blank: [255, 255, 255],
            marked: [0, 0, 0],
            cursor: [255, 0, 0],
        }
    }
}

impl Palette {
    /// White on black, used for the final still.
    pub fn inverted() -> Self {
        let base = Self::default();
        Self {
            blank: base.marked,
            marked: base.blank,
            cursor: base.cursor,
        }
    }
}

fn dimension(value: usize, what: &str) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| IoError::validation(format!("{what} {value} is too large for an image")))
}

/// RGB8 image of one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    /// Paints one pixel per cell, then nearest-neighbour scales to
    /// `width` x `height`.
    pub fn from_snapshot(
        snapshot: &EngineSnapshot,
        palette: &Palette,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(IoError::validation(format!(
                "frame needs a positive size, got {width}x{height}"
            )));
        }
        let gw = dimension(snapshot.width(), "grid width")?;
        let gh = dimension(snapshot.height(), "grid height")?;

        let cells = RgbImage::from_fn(gw, gh, |x, y| {
            let (x, y) = (x as usize, y as usize);
            let colour = if snapshot.is_cursor(x, y) {
                palette.cursor
            } else if snapshot.symbol_at(x, y).is_marked() {
                palette.marked
            } else {
                palette.blank
            };
            image::Rgb(colour)
        });

        let image = if (gw, gh) == (width, height) {
            cells
        } else {
            imageops::resize(&cells, width, height, FilterType::Nearest)
        };
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.image.get_pixel(x, y).0
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| IoError::from(e).with_context(format!("writing {}", path.display())))
    }
}
