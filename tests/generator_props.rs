use proptest::prelude::*;

use mazecrawl::{Cell, GameMode, Maze};

fn any_size() -> impl Strategy<Value = usize> {
    prop_oneof![Just(5), Just(7), Just(11), Just(21), Just(31)]
}

fn any_mode() -> impl Strategy<Value = GameMode> {
    prop_oneof![Just(GameMode::Single), Just(GameMode::Dual)]
}

/// Open cells (anything but wall) with their orthogonal adjacencies.
fn open_graph(maze: &Maze) -> (usize, usize) {
    let n = maze.size();
    let grid = maze.grid();
    let open = |r: usize, c: usize| grid.get(r, c).unwrap() != Cell::Wall;

    let mut nodes = 0;
    let mut edges = 0;
    for r in 0..n {
        for c in 0..n {
            if !open(r, c) {
                continue;
            }
            nodes += 1;
            if r + 1 < n && open(r + 1, c) {
                edges += 1;
            }
            if c + 1 < n && open(r, c + 1) {
                edges += 1;
            }
        }
    }
    (nodes, edges)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generation_is_deterministic(size in any_size(), mode in any_mode(), seed in any::<i64>()) {
        let a = Maze::generate(size, mode, seed).unwrap();
        let b = Maze::generate(size, mode, seed).unwrap();
        prop_assert_eq!(a, b);
    }

    // A perfect maze is a spanning tree of its open cells: connected with
    // exactly nodes - 1 adjacencies, hence a unique route between any pair.
    #[test]
    fn open_cells_form_a_tree(size in any_size(), seed in any::<i64>()) {
        let maze = Maze::generate(size, GameMode::Single, seed).unwrap();
        let (nodes, edges) = open_graph(&maze);
        prop_assert!(nodes > 0);
        prop_assert_eq!(edges, nodes - 1);
        prop_assert!(maze.is_exit_reachable());
    }

    #[test]
    fn border_is_always_wall(size in any_size(), seed in any::<i64>()) {
        let maze = Maze::generate(size, GameMode::Single, seed).unwrap();
        let n = maze.size();
        for i in 0..n {
            prop_assert_eq!(maze.grid().get(0, i).unwrap(), Cell::Wall);
            prop_assert_eq!(maze.grid().get(n - 1, i).unwrap(), Cell::Wall);
            prop_assert_eq!(maze.grid().get(i, 0).unwrap(), Cell::Wall);
            prop_assert_eq!(maze.grid().get(i, n - 1).unwrap(), Cell::Wall);
        }
    }

    #[test]
    fn exit_is_unique_and_marked(size in any_size(), seed in any::<i64>()) {
        let maze = Maze::generate(size, GameMode::Single, seed).unwrap();
        let (er, ec) = maze.exit();
        prop_assert_eq!(maze.grid().count(Cell::Exit), 1);
        prop_assert_eq!(maze.grid().get(er, ec).unwrap(), Cell::Exit);
    }

    #[test]
    fn bonuses_sit_on_free_interior_cells(size in any_size(), seed in any::<i64>()) {
        let maze = Maze::generate(size, GameMode::Single, seed).unwrap();
        let n = maze.size();
        for r in 0..n {
            for c in 0..n {
                if maze.grid().get(r, c).unwrap() == Cell::Bonus {
                    prop_assert!(maze.grid().is_interior(r, c));
                    prop_assert_ne!((r, c), maze.start1());
                    prop_assert_ne!((r, c), maze.exit());
                }
            }
        }
    }

    #[test]
    fn dual_start_is_valid(size in any_size(), seed in any::<i64>()) {
        let maze = Maze::generate(size, GameMode::Dual, seed).unwrap();
        let (r, c) = maze.start2().unwrap();
        prop_assert!(maze.grid().in_bounds(r, c));
        prop_assert_ne!(maze.grid().get(r, c).unwrap(), Cell::Wall);
        prop_assert_ne!((r, c), maze.exit());
    }
}
