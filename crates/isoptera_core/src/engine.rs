//! The turmite state machine.
//!
//! One [`Engine::step`] reads the cell under the cursor, turns, writes the
//! same cell, switches state and only then moves, wrapping around the torus.

use crate::error::{EngineError, Result};
use crate::grid::Grid;
use crate::snapshot::EngineSnapshot;
use crate::table::TransitionTable;
use isoptera_data::{Heading, Position, Symbol, TableSpec};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum StepOutcome {
    Advanced,
    /// The control state was final before the step; nothing changed.
    Halted,
}

/// Result of [`Engine::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunReport {
    pub steps: u64,
    pub halted: bool,
}

#[derive(Debug, Clone)]
pub struct Engine {
    table: Arc<TransitionTable>,
    grid: Arc<Grid>,
    cursor: Position,
    heading: Heading,
    state: usize,
    final_states: BTreeSet<usize>,
    steps: u64,
}

impl Engine {
    /// Blank grid of zeros, cursor at the center, heading north.
    pub fn new(
        width: usize,
        height: usize,
        table: impl Into<Arc<TransitionTable>>,
        start: usize,
    ) -> Result<Self> {
        Self::with_blank(width, height, table, start, Symbol::Zero)
    }

    pub fn with_blank(
        width: usize,
        height: usize,
        table: impl Into<Arc<TransitionTable>>,
        start: usize,
        blank: Symbol,
    ) -> Result<Self> {
        let table = table.into();
        if width == 0 || height == 0 {
            return Err(EngineError::invalid(format!(
                "grid must be at least 1x1, got {width}x{height}"
            )));
        }
        if width.checked_mul(height).is_none() {
            return Err(EngineError::invalid(format!(
                "grid {width}x{height} has more cells than fit in memory"
            )));
        }
        if !table.contains_state(start) {
            return Err(EngineError::invalid(format!(
                "start state {start} is not one of the table's {} states",
                table.state_count()
            )));
        }

        tracing::debug!(
            width,
            height,
            start,
            states = table.state_count(),
            "Engine constructed"
        );

        Ok(Self {
            table,
            grid: Arc::new(Grid::new(width, height, blank)),
            cursor: Position::new(width / 2, height / 2),
            heading: Heading::North,
            state: start,
            final_states: BTreeSet::new(),
            steps: 0,
        })
    }

    /// Builds the table, start state and final states from one spec.
    pub fn from_spec(width: usize, height: usize, spec: &TableSpec) -> Result<Self> {
        let table = TransitionTable::from_spec(spec)?;
        Self::new(width, height, table, spec.start)?
            .with_final_states(spec.final_states.iter().copied())
    }

    /// Resumes from a saved snapshot. The halting set starts empty.
    pub fn restore(
        table: impl Into<Arc<TransitionTable>>,
        snapshot: &EngineSnapshot,
    ) -> Result<Self> {
        let table = table.into();
        let grid = &snapshot.grid;
        if !grid.is_well_formed() {
            return Err(EngineError::invalid(format!(
                "snapshot grid is inconsistent ({}x{} with {} cells)",
                grid.width(),
                grid.height(),
                grid.cells().len()
            )));
        }
        if snapshot.cursor.x >= grid.width() || snapshot.cursor.y >= grid.height() {
            return Err(EngineError::invalid(format!(
                "snapshot cursor {} is outside the {}x{} grid",
                snapshot.cursor,
                grid.width(),
                grid.height()
            )));
        }
        if !table.contains_state(snapshot.state) {
            return Err(EngineError::invalid(format!(
                "snapshot state {} is not one of the table's {} states",
                snapshot.state,
                table.state_count()
            )));
        }
        Ok(Self {
            table,
            grid: Arc::clone(&snapshot.grid),
            cursor: snapshot.cursor,
            heading: snapshot.heading,
            state: snapshot.state,
            final_states: BTreeSet::new(),
            steps: snapshot.steps,
        })
    }

    /// Replaces the halting set. Every state must exist in the table.
    pub fn with_final_states(mut self, states: impl IntoIterator<Item = usize>) -> Result<Self> {
        let states: BTreeSet<usize> = states.into_iter().collect();
        if let Some(bad) = states.iter().find(|&&q| !self.table.contains_state(q)) {
            return Err(EngineError::invalid(format!(
                "final state {bad} is not one of the table's {} states",
                self.table.state_count()
            )));
        }
        self.final_states = states;
        Ok(self)
    }

    pub fn step(&mut self) -> StepOutcome {
        if self.is_halted() {
            return StepOutcome::Halted;
        }

        let read = self.grid.get(self.cursor);
        let t = self.table.entry(self.state, read);

        self.heading = self.heading.turn(t.turn);
        Arc::make_mut(&mut self.grid).set(self.cursor, t.write);
        self.state = t.next_state;
        self.cursor = self
            .cursor
            .step_toroidal(self.heading, self.grid.width(), self.grid.height());
        self.steps += 1;

        if self.is_halted() {
            tracing::info!(state = self.state, steps = self.steps, "Turmite reached a final state");
        }
        StepOutcome::Advanced
    }

    /// Steps up to `budget` times, stopping early on halt.
    pub fn run(&mut self, budget: u64) -> RunReport {
        let mut report = RunReport::default();
        while report.steps < budget {
            if self.step() == StepOutcome::Halted {
                report.halted = true;
                break;
            }
            report.steps += 1;
        }
        if !report.halted && budget > 0 && self.is_halted() {
            report.halted = true;
        }
        report
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            steps: self.steps,
            grid: Arc::clone(&self.grid),
            cursor: self.cursor,
            heading: self.heading,
            state: self.state,
            halted: self.is_halted(),
        }
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.final_states.contains(&self.state)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn state(&self) -> usize {
        self.state
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub fn final_states(&self) -> &BTreeSet<usize> {
        &self.final_states
    }
}
