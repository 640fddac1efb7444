mod common;

use common::EngineBuilder;
use isoptera_core::StepOutcome;
use isoptera_data::{Heading, Position, TurnCommand, TurnEncoding};
use proptest::prelude::*;

prop_compose! {
    /// Any well-formed table in offset encoding, with its size.
    fn arb_table()(states in 1usize..5)(
        entries in prop::collection::vec(
            (0u32..2, 0u32..4, 0..states as u32, 0u32..2, 0u32..4, 0..states as u32),
            states,
        )
    ) -> Vec<[[u32; 3]; 2]> {
        entries
            .into_iter()
            .map(|(w0, t0, n0, w1, t1, n1)| [[w0, t0, n0], [w1, t1, n1]])
            .collect()
    }
}

fn arb_heading() -> impl Strategy<Value = Heading> {
    (0u8..4).prop_map(Heading::from_index)
}

fn arb_turn() -> impl Strategy<Value = TurnCommand> {
    prop::sample::select(TurnCommand::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_cursor_stays_on_grid(
        literal in arb_table(),
        width in 1usize..12,
        height in 1usize..12,
        steps in 0u64..400
    ) {
        let mut engine = EngineBuilder::new()
            .with_size(width, height)
            .with_literal(TurnEncoding::Offset, &literal)
            .build();
        for _ in 0..steps {
            let _ = engine.step();
            let cursor = engine.cursor();
            prop_assert!(cursor.x < width && cursor.y < height,
                "Cursor {} escaped a {}x{} grid", cursor, width, height);
            prop_assert!(engine.state() < literal.len());
        }
        prop_assert_eq!(engine.steps(), steps);
        prop_assert_eq!(engine.grid().cells().len(), width * height);
    }

    #[test]
    fn test_each_step_writes_the_cell_it_leaves(
        literal in arb_table(),
        steps in 1u64..200
    ) {
        let mut engine = EngineBuilder::new()
            .with_size(9, 7)
            .with_literal(TurnEncoding::Offset, &literal)
            .build();
        for _ in 0..steps {
            let before = engine.snapshot();
            let read = before.grid.get(before.cursor);
            let expected = engine.table().lookup(before.state, read).unwrap();

            let _ = engine.step();

            prop_assert_eq!(engine.grid().get(before.cursor), expected.write);
            prop_assert_eq!(engine.heading(), before.heading.turn(expected.turn));
            prop_assert_eq!(engine.state(), expected.next_state);
            prop_assert_eq!(
                engine.cursor(),
                before.cursor.step_toroidal(engine.heading(), 9, 7)
            );
            // only the written cell may differ
            let changed = before
                .grid
                .cells()
                .iter()
                .zip(engine.grid().cells())
                .filter(|(a, b)| a != b)
                .count();
            prop_assert!(changed <= 1);
        }
    }

    #[test]
    fn test_turns_compose_additively(h in arb_heading(), a in arb_turn(), b in arb_turn()) {
        let expected = Heading::from_index((h.index() + a.offset() + b.offset()) % 4);
        prop_assert_eq!(h.turn(a).turn(b), expected);
    }

    #[test]
    fn test_moving_full_width_returns_home(
        x in 0usize..20,
        y in 0usize..20,
        width in 1usize..20,
        heading in arb_heading()
    ) {
        let start = Position::new(x % width, y % width);
        let mut pos = start;
        for _ in 0..width {
            pos = pos.step_toroidal(heading, width, width);
        }
        prop_assert_eq!(pos, start);
    }

    #[test]
    fn test_halted_engine_never_changes(
        literal in arb_table(),
        extra in 1u64..50
    ) {
        let last = literal.len() - 1;
        let mut engine = EngineBuilder::new()
            .with_size(8, 8)
            .with_literal(TurnEncoding::Offset, &literal)
            .with_start(last)
            .with_final_states(&[last])
            .build();
        let before = engine.snapshot();
        for _ in 0..extra {
            prop_assert_eq!(engine.step(), StepOutcome::Halted);
        }
        prop_assert_eq!(engine.snapshot(), before);
        prop_assert!(engine.run(extra).halted);
    }

    #[test]
    fn test_same_table_same_history(literal in arb_table(), steps in 0u64..300) {
        let mut a = EngineBuilder::new()
            .with_size(10, 10)
            .with_literal(TurnEncoding::Offset, &literal)
            .build();
        let mut b = EngineBuilder::new()
            .with_size(10, 10)
            .with_literal(TurnEncoding::Offset, &literal)
            .build();
        a.run(steps);
        for _ in 0..steps {
            let _ = b.step();
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }
}
