use crate::grid::Grid;
use isoptera_data::{Heading, Position, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Read-only view of the engine between two steps.
///
/// The grid is shared with the engine until its next write, which detaches
/// the engine's copy, so a snapshot never observes later steps.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub steps: u64,
    pub grid: Arc<Grid>,
    pub cursor: Position,
    pub heading: Heading,
    pub state: usize,
    pub halted: bool,
}

impl EngineSnapshot {
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn symbol_at(&self, x: usize, y: usize) -> Symbol {
        self.grid.get(Position::new(x, y))
    }

    pub fn is_cursor(&self, x: usize, y: usize) -> bool {
        self.cursor.x == x && self.cursor.y == y
    }
}

/// Text dump of the tape: `#` for marked cells, `X` for the cursor.
impl fmt::Display for EngineSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.grid.rows().enumerate() {
            let line: String = row
                .iter()
                .enumerate()
                .map(|(x, cell)| {
                    if self.is_cursor(x, y) {
                        'X'
                    } else if cell.is_marked() {
                        '#'
                    } else {
                        ' '
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
