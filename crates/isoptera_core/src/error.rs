//! Error types for the simulation engine.
//!
//! Halting is not an error: it is reported through
//! [`StepOutcome::Halted`](crate::engine::StepOutcome).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Bad grid dimensions, start/final state, or table literal.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Table lookup outside the declared dimensions.
    #[error("Transition lookup out of range: state {state}, symbol {symbol} (table has {states} states)")]
    OutOfRange {
        state: usize,
        symbol: usize,
        states: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    #[must_use]
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
