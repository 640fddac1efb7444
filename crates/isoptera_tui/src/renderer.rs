use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

use isoptera_core::EngineSnapshot;

const HALF_BLOCK: &str = "▀";

/// Draws a snapshot with two grid rows per terminal row: the upper half
/// block carries the top row in its foreground, the background shows the
/// row below.
pub struct GridWidget<'a> {
    snapshot: &'a EngineSnapshot,
    title: Option<String>,
    inverted: bool,
}

impl<'a> GridWidget<'a> {
    pub fn new(snapshot: &'a EngineSnapshot) -> Self {
        Self {
            snapshot,
            title: None,
            inverted: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// White ink on black paper.
    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn paper(&self) -> Color {
        if self.inverted {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn ink(&self) -> Color {
        if self.inverted {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn cursor_color() -> Color {
        Color::Rgb(255, 0, 0)
    }

    pub fn inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    fn color_at(&self, gx: usize, gy: usize) -> Color {
        if self.snapshot.symbol_at(gx, gy).is_marked() {
            self.ink()
        } else {
            self.paper()
        }
    }

    /// Screen cell and half (false = upper) showing grid cell `(gx, gy)`.
    pub fn grid_to_screen(inner: Rect, gw: usize, gh: usize, gx: usize, gy: usize) -> (u16, u16, bool) {
        let sx = gx * inner.width as usize / gw;
        let half_row = gy * (inner.height as usize * 2) / gh;
        (
            inner.x + sx as u16,
            inner.y + (half_row / 2) as u16,
            half_row % 2 == 1,
        )
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default().borders(Borders::ALL);
        if let Some(title) = &self.title {
            block = block.title(title.as_str());
        }
        block.render(area, buf);

        let inner = Self::inner_area(area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (gw, gh) = (self.snapshot.width(), self.snapshot.height());
        let (w, h2) = (inner.width as usize, inner.height as usize * 2);

        for sy in 0..inner.height {
            let top = (sy as usize * 2) * gh / h2;
            let bottom = (sy as usize * 2 + 1) * gh / h2;
            for sx in 0..inner.width {
                let gx = sx as usize * gw / w;
                buf[(inner.x + sx, inner.y + sy)]
                    .set_symbol(HALF_BLOCK)
                    .set_fg(self.color_at(gx, top))
                    .set_bg(self.color_at(gx, bottom));
            }
        }

        // downsampling may skip the cursor's cell; always show it
        let cursor = self.snapshot.cursor;
        let (x, y, lower) = Self::grid_to_screen(inner, gw, gh, cursor.x, cursor.y);
        let cell = &mut buf[(x, y)];
        if lower {
            cell.set_bg(Self::cursor_color());
        } else {
            cell.set_fg(Self::cursor_color());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isoptera_core::{Engine, Pattern, StepOutcome};

    fn engine(w: usize, h: usize) -> Engine {
        Engine::new(w, h, Pattern::LangtonsAnt.table().unwrap(), 0).unwrap()
    }

    #[test]
    fn test_one_to_one_rendering() {
        // 4x4 grid in a 6x4 area: inner 4x2, two grid rows per line
        let mut engine = engine(4, 4);
        assert_eq!(engine.step(), StepOutcome::Advanced);
        let snapshot = engine.snapshot();

        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&snapshot).render(area, &mut buf);

        // marked cell (2, 2) is the upper half of inner row 1
        let marked = &buf[(3, 2)];
        assert_eq!(marked.symbol(), HALF_BLOCK);
        assert_eq!(marked.fg, Color::Black);
        assert_eq!(marked.bg, Color::White);

        // cursor moved east to (3, 2)
        assert_eq!(buf[(4, 2)].fg, GridWidget::cursor_color());
        assert_eq!(buf[(1, 1)].fg, Color::White);
    }

    #[test]
    fn test_cursor_survives_downsampling() {
        let snapshot = engine(200, 200).snapshot();
        let area = Rect::new(0, 0, 12, 7);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&snapshot).inverted(true).render(area, &mut buf);

        let inner = GridWidget::inner_area(area);
        let (x, y, lower) = GridWidget::grid_to_screen(inner, 200, 200, 100, 100);
        let cell = &buf[(x, y)];
        let shown = if lower { cell.bg } else { cell.fg };
        assert_eq!(shown, GridWidget::cursor_color());
        assert_eq!(buf[(inner.x, inner.y)].fg, Color::Black);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let snapshot = engine(10, 10).snapshot();
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);
        GridWidget::new(&snapshot).title("x").render(area, &mut buf);
    }
}
