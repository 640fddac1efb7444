use crate::data::geometry::TurnCommand;
use crate::data::tape::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoded transition: what to write, how to turn, where to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub write: Symbol,
    pub turn: TurnCommand,
    pub next_state: usize,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.write, self.turn.symbol(), self.next_state)
    }
}

/// How the middle element of a literal triple maps onto a [`TurnCommand`].
///
/// Published turmite tables use single-bit flags; other sources count
/// quarter turns directly. A literal is only meaningful together with its
/// encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnEncoding {
    /// 1 = no turn, 2 = right, 4 = u-turn, 8 = left.
    #[default]
    BitFlag,
    /// 0 = no turn, 1 = right, 2 = u-turn, 3 = left.
    Offset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownTurnCode {
    pub code: u32,
    pub encoding: TurnEncoding,
}

impl fmt::Display for UnknownTurnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "turn code {} is not valid in {:?} encoding", self.code, self.encoding)
    }
}

impl std::error::Error for UnknownTurnCode {}

impl TurnEncoding {
    pub fn decode(self, code: u32) -> Result<TurnCommand, UnknownTurnCode> {
        let command = match (self, code) {
            (TurnEncoding::BitFlag, 1) | (TurnEncoding::Offset, 0) => TurnCommand::NoTurn,
            (TurnEncoding::BitFlag, 2) | (TurnEncoding::Offset, 1) => TurnCommand::Right,
            (TurnEncoding::BitFlag, 4) | (TurnEncoding::Offset, 2) => TurnCommand::Around,
            (TurnEncoding::BitFlag, 8) | (TurnEncoding::Offset, 3) => TurnCommand::Left,
            _ => {
                return Err(UnknownTurnCode {
                    code,
                    encoding: self,
                })
            }
        };
        Ok(command)
    }

    pub fn encode(self, command: TurnCommand) -> u32 {
        match self {
            TurnEncoding::BitFlag => 1 << command.offset(),
            TurnEncoding::Offset => u32::from(command.offset()),
        }
    }
}

/// Raw, unvalidated table literal as found in pattern catalogs and JSON files.
///
/// `states[q][s] = [write, turn, next]` for state `q` reading symbol `s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub encoding: TurnEncoding,
    pub states: Vec<[[u32; 3]; 2]>,
    #[serde(default)]
    pub start: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub final_states: Vec<usize>,
}

impl TableSpec {
    pub fn new(encoding: TurnEncoding, states: &[[[u32; 3]; 2]]) -> Self {
        Self {
            name: None,
            encoding,
            states: states.to_vec(),
            start: 0,
            final_states: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
