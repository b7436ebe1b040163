use proptest::prelude::*;

use mazecrawl::{Cell, Direction, GameEngine, GameMode, GameStatus, Maze, PlayerId, BONUS_POINTS};

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Drive a game with arbitrary input and check the bookkeeping: the move
    // counter tracks accepted moves only, the score only ever comes from
    // bonus pickups, and the avatar never ends up inside a wall.
    #[test]
    fn random_walks_keep_the_books_straight(
        seed in any::<i64>(),
        steps in proptest::collection::vec(any_direction(), 0..200),
    ) {
        let maze = Maze::generate(11, GameMode::Single, seed).unwrap();
        let mut engine = GameEngine::new(maze);

        let mut accepted = 0u32;
        let mut bonuses = 0u32;
        for dir in steps {
            let before = engine.player(PlayerId::One).unwrap().pos();
            let result = engine.apply_move(PlayerId::One, dir);
            let after = engine.player(PlayerId::One).unwrap();

            if result.moved {
                accepted += 1;
                if result.collected_bonus {
                    bonuses += 1;
                }
            } else {
                prop_assert_eq!(after.pos(), before);
            }
            prop_assert!(engine.grid().in_bounds(after.pos().0, after.pos().1));
            prop_assert_ne!(
                engine.grid().get(after.pos().0, after.pos().1).unwrap(),
                Cell::Wall
            );
        }

        let p1 = engine.player(PlayerId::One).unwrap();
        prop_assert_eq!(p1.moves(), accepted);
        prop_assert_eq!(p1.score(), bonuses * BONUS_POINTS);
        if engine.status() == GameStatus::Won(PlayerId::One) {
            prop_assert_eq!(p1.pos(), engine.exit());
        }
    }
}
