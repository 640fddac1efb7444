//! Start-up menus: pattern, run length, then whether to export video.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::state::{RunSelection, RunSource};
use isoptera_core::{Pattern, RunLength};
use isoptera_tui::{MenuState, MenuWidget, Tui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Pattern,
    Length,
    Export,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    Pending,
    Selected(RunSelection),
    Cancelled,
}

pub struct Selector {
    stage: Stage,
    menu: MenuState,
    pattern: Pattern,
    length: RunLength,
    default_length: RunLength,
}

impl Selector {
    pub fn new(default_length: RunLength) -> Self {
        Self {
            stage: Stage::Pattern,
            menu: MenuState::new(Pattern::ALL.len()),
            pattern: Pattern::ALL[0],
            length: default_length,
            default_length,
        }
    }

    fn title(&self) -> &'static str {
        match self.stage {
            Stage::Pattern => "isoptera",
            Stage::Length => "length",
            Stage::Export => "export video?",
        }
    }

    fn items(&self) -> Vec<String> {
        match self.stage {
            Stage::Pattern => Pattern::ALL
                .iter()
                .map(|p| format!("{:<18} {}", p.name(), p.description()))
                .collect(),
            Stage::Length => RunLength::ALL.iter().map(|l| l.to_string()).collect(),
            Stage::Export => vec!["no".to_string(), "yes".to_string()],
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SelectorEvent {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return SelectorEvent::Cancelled,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return SelectorEvent::Cancelled
            }
            KeyCode::Up | KeyCode::Char('k') => self.menu.previous(),
            KeyCode::Down | KeyCode::Char('j') => self.menu.next(),
            KeyCode::Enter => return self.confirm(),
            _ => {}
        }
        SelectorEvent::Pending
    }

    fn confirm(&mut self) -> SelectorEvent {
        let choice = self.menu.selected();
        match self.stage {
            Stage::Pattern => {
                self.pattern = Pattern::ALL[choice];
                self.stage = Stage::Length;
                let preset = RunLength::ALL
                    .iter()
                    .position(|&l| l == self.default_length)
                    .unwrap_or(0);
                self.menu = MenuState::new(RunLength::ALL.len()).with_selected(preset);
                SelectorEvent::Pending
            }
            Stage::Length => {
                self.length = RunLength::ALL[choice];
                self.stage = Stage::Export;
                self.menu = MenuState::new(2);
                SelectorEvent::Pending
            }
            Stage::Export => SelectorEvent::Selected(RunSelection {
                source: RunSource::from_pattern(self.pattern),
                length: self.length,
                export: choice == 1,
            }),
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let items = self.items();
        let area = centered(f.area(), 72, items.len() as u16 + 2);
        f.render_widget(
            MenuWidget {
                title: self.title(),
                items: &items,
                state: &self.menu,
            },
            area,
        );
    }

    /// Shows the menus until the user picks or cancels.
    pub fn run(mut self, tui: &mut Tui) -> Result<Option<RunSelection>> {
        loop {
            tui.terminal.draw(|f| self.draw(f))?;
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match self.handle_key(key) {
                    SelectorEvent::Pending => {}
                    SelectorEvent::Selected(selection) => return Ok(Some(selection)),
                    SelectorEvent::Cancelled => return Ok(None),
                }
            }
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height.min(area.height)),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}
