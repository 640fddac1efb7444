//! # Isoptera Core
//!
//! Deterministic turmite simulation.
//!
//! A turmite walks a toroidal grid of binary cells. Each step it reads the
//! cell under it, looks up `(state, symbol)` in a [`TransitionTable`],
//! turns, rewrites the cell, changes state and moves one cell forward.
//!
//! ## Example
//!
//! ```
//! use isoptera_core::{Engine, StepOutcome, TransitionTable};
//! use isoptera_data::{Symbol, TurnEncoding};
//!
//! // Langton's ant: on 0 write 1 and turn right, on 1 write 0 and turn left.
//! let table = TransitionTable::from_literal(TurnEncoding::BitFlag, &[[[1, 2, 0], [0, 8, 0]]])?;
//! let mut engine = Engine::new(3, 3, table, 0)?;
//! for _ in 0..4 {
//!     assert_eq!(engine.step(), StepOutcome::Advanced);
//! }
//! assert_eq!(engine.snapshot().symbol_at(1, 1), Symbol::One);
//! # Ok::<(), isoptera_core::EngineError>(())
//! ```

/// Configuration management for runs
pub mod config;
/// The turmite state machine
pub mod engine;
/// Engine error types
pub mod error;
/// Row-major binary tape
pub mod grid;
/// Run counters and logging setup
pub mod metrics;
/// Catalog of named turmites
pub mod patterns;
/// Frame pacing
pub mod plan;
/// Read-only engine views for renderers and exporters
pub mod snapshot;
/// Immutable transition tables
pub mod table;

pub use engine::{Engine, RunReport, StepOutcome};
pub use error::{EngineError, Result};
pub use grid::Grid;
pub use metrics::{init_logging, RunMetrics};
pub use patterns::Pattern;
pub use plan::{RunLength, RunPlan};
pub use snapshot::EngineSnapshot;
pub use table::TransitionTable;
