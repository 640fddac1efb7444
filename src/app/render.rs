use crate::app::state::App;
use isoptera_tui::{GridWidget, StatusWidget};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

impl App {
    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(f.area());

        let title = if self.is_complete() {
            format!(" {} | done, press q ", self.source.name)
        } else {
            format!(" {} ", self.source.name)
        };
        // the finished pattern is shown white on black
        f.render_widget(
            GridWidget::new(&self.snapshot)
                .title(title)
                .inverted(self.is_complete()),
            chunks[0],
        );
        f.render_widget(
            StatusWidget {
                snapshot: &self.snapshot,
                total_steps: self.plan.total_steps,
                iterations_per_frame: self.plan.iterations_per_frame,
                paused: self.paused,
                recording: self.recorder.is_some(),
            },
            chunks[1],
        );
    }
}
