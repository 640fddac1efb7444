mod common;

use common::EngineBuilder;
use isoptera_core::{Engine, StepOutcome};
use isoptera_data::{Heading, Position, Symbol};

#[test]
fn test_langton_four_steps_on_3x3() {
    let mut engine = EngineBuilder::new().build();
    let center = engine.cursor();
    assert_eq!(center, Position::new(1, 1));

    let mut visited = Vec::new();
    for _ in 0..4 {
        assert_eq!(engine.step(), StepOutcome::Advanced);
        assert_eq!(engine.state(), 0, "State should never change");
        visited.push(engine.cursor());
    }

    assert_eq!(engine.grid().get(center), Symbol::One);
    assert_eq!(
        visited,
        vec![
            Position::new(2, 1),
            Position::new(2, 2),
            Position::new(1, 2),
            Position::new(1, 1),
        ]
    );
    assert_eq!(engine.heading(), Heading::North);
    assert_eq!(engine.grid().marked_count(), 4);
    assert!(!engine.is_halted());
}

#[test]
fn test_fifth_step_erases_center_and_turns_left() {
    let mut engine = EngineBuilder::new().build();
    let report = engine.run(5);
    assert_eq!(report.steps, 5);
    assert!(!report.halted);
    assert_eq!(engine.grid().get(Position::new(1, 1)), Symbol::Zero);
    assert_eq!(engine.heading(), Heading::West);
    assert_eq!(engine.cursor(), Position::new(0, 1));
}

#[test]
fn test_zero_steps_leaves_initial_state() {
    let mut engine = EngineBuilder::new().with_size(5, 4).build();
    let before = engine.snapshot();
    let report = engine.run(0);
    assert_eq!(report.steps, 0);
    assert_eq!(engine.snapshot(), before);
    assert_eq!(before.cursor, Position::new(2, 2));
    assert_eq!(before.grid.marked_count(), 0);
}

#[test]
fn test_snapshot_restore_continues_identically() {
    let mut original = EngineBuilder::new().with_size(16, 16).build();
    assert_eq!(original.run(300).steps, 300);
    let midpoint = original.snapshot();

    let mut resumed = Engine::restore(original.table().clone(), &midpoint).unwrap();
    original.run(700);
    resumed.run(700);

    assert_eq!(resumed.snapshot(), original.snapshot());
    assert_eq!(resumed.steps(), 1000);
}

#[test]
fn test_one_by_one_grid_rereads_same_cell() {
    let mut engine = EngineBuilder::new().with_size(1, 1).build();
    engine.run(3);
    assert_eq!(engine.cursor(), Position::new(0, 0));
    // 0 -> 1 -> 0 -> 1
    assert_eq!(engine.grid().get(Position::new(0, 0)), Symbol::One);
    // right, left, right
    assert_eq!(engine.heading(), Heading::East);
}
