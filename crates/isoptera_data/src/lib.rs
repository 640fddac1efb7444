pub mod data;

pub use data::geometry::{Heading, Position, TurnCommand};
pub use data::table::{TableSpec, Transition, TurnEncoding, UnknownTurnCode};
pub use data::tape::Symbol;
