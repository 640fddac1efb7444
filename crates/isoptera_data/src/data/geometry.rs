use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute facing of the turmite, in clockwise order starting at north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heading {
    #[default]
    North,
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// Rotates clockwise by the command's quarter-turn offset.
    #[inline]
    #[must_use]
    pub fn turn(self, command: TurnCommand) -> Self {
        Self::from_index(self.index() + command.offset())
    }

    /// Unit step on the grid. The vertical axis grows southwards.
    #[inline]
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Relative turn applied before each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnCommand {
    NoTurn,
    Right,
    Around,
    Left,
}

impl TurnCommand {
    pub const ALL: [TurnCommand; 4] = [
        TurnCommand::NoTurn,
        TurnCommand::Right,
        TurnCommand::Around,
        TurnCommand::Left,
    ];

    /// Clockwise quarter turns.
    #[inline]
    pub fn offset(self) -> u8 {
        match self {
            TurnCommand::NoTurn => 0,
            TurnCommand::Right => 1,
            TurnCommand::Around => 2,
            TurnCommand::Left => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            TurnCommand::NoTurn => 'N',
            TurnCommand::Right => 'R',
            TurnCommand::Around => 'U',
            TurnCommand::Left => 'L',
        }
    }
}

/// Cursor coordinates. Always reduced into the grid by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Moves one unit along `heading` on a `width` x `height` torus.
    #[must_use]
    pub fn step_toroidal(self, heading: Heading, width: usize, height: usize) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: wrap(self.x as i64 + dx, width),
            y: wrap(self.y as i64 + dy, height),
        }
    }
}

#[inline]
fn wrap(value: i64, modulus: usize) -> usize {
    value.rem_euclid(modulus as i64) as usize
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_four_times_is_identity() {
        let mut h = Heading::West;
        for _ in 0..4 {
            h = h.turn(TurnCommand::Right);
        }
        assert_eq!(h, Heading::West);
    }

    #[test]
    fn test_left_undoes_right() {
        for h in Heading::ALL {
            assert_eq!(h.turn(TurnCommand::Right).turn(TurnCommand::Left), h);
            assert_eq!(h.turn(TurnCommand::NoTurn), h);
        }
    }

    #[test]
    fn test_around_flips_delta() {
        for h in Heading::ALL {
            let (dx, dy) = h.delta();
            assert_eq!(h.turn(TurnCommand::Around).delta(), (-dx, -dy));
        }
    }

    #[test]
    fn test_step_wraps_at_origin() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step_toroidal(Heading::North, 5, 7), Position::new(0, 6));
        assert_eq!(origin.step_toroidal(Heading::West, 5, 7), Position::new(4, 0));
    }

    #[test]
    fn test_step_wraps_at_far_edge() {
        let corner = Position::new(4, 6);
        assert_eq!(corner.step_toroidal(Heading::East, 5, 7), Position::new(0, 6));
        assert_eq!(corner.step_toroidal(Heading::South, 5, 7), Position::new(4, 0));
    }

    #[test]
    fn test_step_on_single_cell_grid() {
        let p = Position::new(0, 0);
        for h in Heading::ALL {
            assert_eq!(p.step_toroidal(h, 1, 1), p);
        }
    }
}
