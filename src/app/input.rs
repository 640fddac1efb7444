use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let ipf = self.plan.iterations_per_frame.saturating_mul(2);
                self.set_iterations_per_frame(ipf);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let ipf = self.plan.iterations_per_frame / 2;
                self.set_iterations_per_frame(ipf);
            }
            _ => {}
        }
    }
}
