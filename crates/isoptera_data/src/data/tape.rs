use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell of the two-symbol tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Symbol {
    #[default]
    Zero,
    One,
}

impl Symbol {
    pub const ALL: [Symbol; 2] = [Symbol::Zero, Symbol::One];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_marked(self) -> bool {
        self == Symbol::One
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> Self {
        symbol as u8
    }
}

impl TryFrom<u8> for Symbol {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Symbol::Zero),
            1 => Ok(Symbol::One),
            other => Err(format!("symbol {other} is not in the tape alphabet {{0, 1}}")),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}
