use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use isoptera_core::EngineSnapshot;

/// One-line footer: progress, cursor, heading, state and key hints.
pub struct StatusWidget<'a> {
    pub snapshot: &'a EngineSnapshot,
    pub total_steps: u64,
    pub iterations_per_frame: u64,
    pub paused: bool,
    pub recording: bool,
}

impl StatusWidget<'_> {
    pub fn text(&self) -> String {
        let s = self.snapshot;
        let mut text = format!(
            "step {}/{}  {}  {}  q{}  ipf {}",
            s.steps, self.total_steps, s.cursor, s.heading, s.state, self.iterations_per_frame
        );
        if s.halted {
            text.push_str("  HALTED");
        } else if self.paused {
            text.push_str("  PAUSED");
        }
        if self.recording {
            text.push_str("  REC");
        }
        text
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.text(), Style::default().fg(Color::Cyan)),
            Span::styled(
                "  [space] pause  [+/-] speed  [q] quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
