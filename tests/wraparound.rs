mod common;

use common::EngineBuilder;
use isoptera_core::{Engine, StepOutcome};
use isoptera_data::{Heading, Position, TurnEncoding};

/// Never turns, never marks.
const STRAIGHT: [[[u32; 3]; 2]; 1] = [[[0, 0, 0], [1, 0, 0]]];
/// Turns around on every cell, never marks.
const BOUNCE: [[[u32; 3]; 2]; 1] = [[[0, 2, 0], [1, 2, 0]]];

/// A 3x4 engine with the cursor moved to `(0, 0)` facing `heading`.
fn at_origin(literal: &[[[u32; 3]; 2]], heading: Heading) -> Engine {
    let engine = EngineBuilder::new()
        .with_size(3, 4)
        .with_literal(TurnEncoding::Offset, literal)
        .build();
    let mut snapshot = engine.snapshot();
    snapshot.cursor = Position::new(0, 0);
    snapshot.heading = heading;
    Engine::restore(engine.table().clone(), &snapshot).unwrap()
}

#[test]
fn test_north_from_top_row_wraps_to_bottom() {
    let mut engine = at_origin(&STRAIGHT, Heading::North);
    assert_eq!(engine.step(), StepOutcome::Advanced);
    assert_eq!(engine.cursor(), Position::new(0, 3));
    assert_eq!(engine.heading(), Heading::North);
}

#[test]
fn test_west_from_left_column_wraps_to_right() {
    let mut engine = at_origin(&STRAIGHT, Heading::West);
    engine.run(1);
    assert_eq!(engine.cursor(), Position::new(2, 0));
    assert_eq!(engine.heading(), Heading::West);
}

#[test]
fn test_two_turn_arounds_restore_heading() {
    let mut engine = at_origin(&BOUNCE, Heading::North);
    engine.run(1);
    assert_eq!(engine.heading(), Heading::South);
    assert_eq!(engine.cursor(), Position::new(0, 1));

    engine.run(1);
    assert_eq!(engine.heading(), Heading::North);
    assert_eq!(engine.cursor(), Position::new(0, 0));
    assert_eq!(engine.grid().marked_count(), 0);
}
