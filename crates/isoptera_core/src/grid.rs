//! Fixed-size two-symbol tape laid out row-major.

use isoptera_data::{Position, Symbol};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Symbol>,
}

impl Grid {
    /// Callers guarantee `width > 0 && height > 0` and that `width * height`
    /// does not overflow.
    pub fn new(width: usize, height: usize, blank: Symbol) -> Self {
        Self {
            width,
            height,
            cells: vec![blank; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.x < self.width && pos.y < self.height);
        pos.y * self.width + pos.x
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Symbol {
        self.cells[self.index(pos)]
    }

    #[inline]
    pub fn set(&mut self, pos: Position, symbol: Symbol) {
        let idx = self.index(pos);
        self.cells[idx] = symbol;
    }

    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Symbol]> {
        self.cells.chunks(self.width)
    }

    /// False for grids deserialized from inconsistent data.
    pub fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.width.checked_mul(self.height) == Some(self.cells.len())
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_marked()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = Grid::new(4, 3, Symbol::Zero);
        assert_eq!(grid.cells().len(), 12);
        assert_eq!(grid.marked_count(), 0);
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn test_set_uses_x_as_column() {
        let mut grid = Grid::new(4, 3, Symbol::Zero);
        grid.set(Position::new(3, 1), Symbol::One);
        let rows: Vec<&[Symbol]> = grid.rows().collect();
        assert_eq!(rows[1][3], Symbol::One);
        assert_eq!(rows[0][3], Symbol::Zero);
        assert_eq!(grid.get(Position::new(3, 1)), Symbol::One);
    }

    #[test]
    fn test_well_formed() {
        assert!(Grid::new(3, 2, Symbol::Zero).is_well_formed());
        let broken: Grid =
            serde_json::from_str(r#"{"width": 3, "height": 2, "cells": [0, 1]}"#).unwrap();
        assert!(!broken.is_well_formed());

        let huge = format!(r#"{{"width": {}, "height": 2, "cells": [0]}}"#, usize::MAX);
        let huge: Grid = serde_json::from_str(&huge).unwrap();
        assert!(!huge.is_well_formed());
    }

    #[test]
    fn test_blank_one() {
        let grid = Grid::new(2, 2, Symbol::One);
        assert_eq!(grid.marked_count(), 4);
    }
}
