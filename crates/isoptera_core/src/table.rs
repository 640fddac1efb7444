//! Immutable transition table.
//!
//! A table maps `(state, symbol)` to a [`Transition`]. Literals are decoded
//! through an explicit [`TurnEncoding`] at load time, so raw integers from
//! different catalogs never leak into the engine.

use crate::error::{EngineError, Result};
use isoptera_data::{Symbol, TableSpec, Transition, TurnCommand, TurnEncoding};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawTable")]
pub struct TransitionTable {
    entries: Vec<[Transition; 2]>,
}

/// Unchecked wire form; every deserialized table goes through
/// [`TransitionTable::from_transitions`].
#[derive(Deserialize)]
struct RawTable {
    entries: Vec<[Transition; 2]>,
}

impl TryFrom<RawTable> for TransitionTable {
    type Error = EngineError;

    fn try_from(raw: RawTable) -> Result<Self> {
        Self::from_transitions(raw.entries)
    }
}

impl TransitionTable {
    /// Builds a table from already-decoded transitions, checking that every
    /// `next_state` points back into the table.
    pub fn from_transitions(entries: Vec<[Transition; 2]>) -> Result<Self> {
        if entries.is_empty() {
            return Err(EngineError::invalid("transition table has no states"));
        }
        let states = entries.len();
        for (state, row) in entries.iter().enumerate() {
            for (symbol, t) in row.iter().enumerate() {
                if t.next_state >= states {
                    return Err(EngineError::invalid(format!(
                        "delta[{state}, {symbol}] goes to state {} but the table has {states} states",
                        t.next_state
                    )));
                }
            }
        }
        Ok(Self { entries })
    }

    /// Decodes a nested `[write, turn, next]` literal.
    pub fn from_literal(encoding: TurnEncoding, literal: &[[[u32; 3]; 2]]) -> Result<Self> {
        let mut entries = Vec::with_capacity(literal.len());
        for (state, row) in literal.iter().enumerate() {
            let mut decoded = [Transition {
                write: Symbol::Zero,
                turn: TurnCommand::NoTurn,
                next_state: 0,
            }; 2];
            for (symbol, &[write, turn, next]) in row.iter().enumerate() {
                let write = u8::try_from(write)
                    .ok()
                    .and_then(|w| Symbol::try_from(w).ok())
                    .ok_or_else(|| {
                        EngineError::invalid(format!(
                            "delta[{state}, {symbol}] writes {write}, expected 0 or 1"
                        ))
                    })?;
                let turn = encoding.decode(turn).map_err(|e| {
                    EngineError::invalid(format!("delta[{state}, {symbol}]: {e}"))
                })?;
                decoded[symbol] = Transition {
                    write,
                    turn,
                    next_state: next as usize,
                };
            }
            entries.push(decoded);
        }
        Self::from_transitions(entries)
    }

    /// Decodes the table part of a spec. Start and final states are applied
    /// by the engine.
    pub fn from_spec(spec: &TableSpec) -> Result<Self> {
        Self::from_literal(spec.encoding, &spec.states)
    }

    /// Re-encodes the table as a literal in the requested encoding.
    pub fn to_literal(&self, encoding: TurnEncoding) -> Vec<[[u32; 3]; 2]> {
        self.entries
            .iter()
            .map(|row| {
                row.map(|t| {
                    [
                        u32::from(u8::from(t.write)),
                        encoding.encode(t.turn),
                        t.next_state as u32,
                    ]
                })
            })
            .collect()
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn contains_state(&self, state: usize) -> bool {
        state < self.entries.len()
    }

    pub fn lookup(&self, state: usize, symbol: Symbol) -> Result<Transition> {
        self.entries
            .get(state)
            .map(|row| row[symbol.index()])
            .ok_or(EngineError::OutOfRange {
                state,
                symbol: symbol.index(),
                states: self.entries.len(),
            })
    }

    /// Lookup for callers that already hold the state invariant.
    #[inline]
    pub(crate) fn entry(&self, state: usize, symbol: Symbol) -> Transition {
        self.entries[state][symbol.index()]
    }

    /// Stable hash of the decoded table, independent of the literal encoding.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        for row in self.to_literal(TurnEncoding::Offset) {
            for triple in row {
                for value in triple {
                    hasher.update(value.to_le_bytes());
                }
            }
        }
        hex::encode(hasher.finalize())
    }
}

impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     0        1")?;
        for (state, row) in self.entries.iter().enumerate() {
            writeln!(f, "{state} {} {}", row[0], row[1])?;
        }
        Ok(())
    }
}
