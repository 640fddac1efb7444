//! Core data structures for the Isoptera simulation.

pub mod geometry;
pub mod table;
pub mod tape;
