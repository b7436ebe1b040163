//! Procedural maze construction: randomized Prim frontier growth, then exit,
//! bonus, and start placement.
//!
//! Carving walks a 2-step lattice of interior cells and removes the single
//! wall between a frontier cell and one already-carved neighbor, so the
//! carved cells form a spanning tree: exactly one route between any two open
//! cells and no loops. All randomness flows from one seeded [`SmallRng`],
//! which makes generation fully reproducible per `(size, mode, seed)`.

use std::collections::VecDeque;

use log::warn;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::{Cell, Direction, GameMode, MazeError};
use crate::config::{MAX_SIZE, MIN_SIZE};
use crate::grid::Grid;

/// Offsets probed around the exit target before falling back to a full scan.
const EXIT_PROBES: [(i32, i32); 9] = [
    (0, 0),
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Offsets tried for the player 2 start, relative to the player 1 start.
const PLAYER2_OFFSETS: [(usize, usize); 5] = [(0, 2), (2, 0), (1, 1), (0, 1), (1, 0)];

/// Number of bonus dots placed in a maze of side `n`.
pub fn bonus_target(n: usize) -> usize {
    if n <= MIN_SIZE {
        0
    } else {
        (n / 3).max(1)
    }
}

/// A generated maze bundle: the grid plus the positions a game starts from.
/// Immutable in shape after generation; only `Bonus -> Path` pickup changes
/// a cell, and that goes through the game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    mode: GameMode,
    seed: i64,
    start1: (usize, usize),
    start2: Option<(usize, usize)>,
    exit: (usize, usize),
}

impl Maze {
    /// Build a maze of the given odd size. Identical `(size, mode, seed)`
    /// inputs always produce identical mazes and start positions.
    pub fn generate(size: usize, mode: GameMode, seed: i64) -> Result<Self, MazeError> {
        if size < MIN_SIZE || size > MAX_SIZE || size % 2 == 0 {
            return Err(MazeError::InvalidSize { size });
        }

        let mut rng = SmallRng::seed_from_u64(seed as u64);
        let mut grid = Grid::filled_with_walls(size);
        carve_passages(&mut grid, &mut rng);

        let start1 = (1, 1);
        let exit = place_exit(&mut grid);

        let mut maze = Maze {
            grid,
            mode,
            seed,
            start1,
            start2: None,
            exit,
        };
        maze.place_bonuses(&mut rng);
        if mode == GameMode::Dual {
            maze.start2 = Some(maze.pick_start2());
        }
        Ok(maze)
    }

    pub(crate) fn from_parts(
        grid: Grid,
        mode: GameMode,
        seed: i64,
        start1: (usize, usize),
        start2: Option<(usize, usize)>,
        exit: (usize, usize),
    ) -> Self {
        Maze {
            grid,
            mode,
            seed,
            start1,
            start2,
            exit,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn start1(&self) -> (usize, usize) {
        self.start1
    }

    /// Player 2 start; `None` outside dual mode.
    pub fn start2(&self) -> Option<(usize, usize)> {
        self.start2
    }

    pub fn exit(&self) -> (usize, usize) {
        self.exit
    }

    /// Breadth-first reachability of the exit from the player 1 start over
    /// non-wall cells. Side-effect-free; callers that see `false` are
    /// expected to regenerate with a different seed (see `session`).
    pub fn is_exit_reachable(&self) -> bool {
        if self.start1 == self.exit {
            return true;
        }
        if self.grid.at(self.start1.0, self.start1.1) == Cell::Wall {
            return false;
        }

        let n = self.grid.size();
        let mut visited = vec![false; n * n];
        let mut queue = VecDeque::new();
        visited[self.start1.0 * n + self.start1.1] = true;
        queue.push_back(self.start1);

        while let Some((r, c)) = queue.pop_front() {
            if (r, c) == self.exit {
                return true;
            }
            for dir in Direction::ALL {
                let (dr, dc) = dir.delta();
                let nr = r as i32 + dr;
                let nc = c as i32 + dc;
                if nr < 0 || nc < 0 || nr >= n as i32 || nc >= n as i32 {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if visited[nr * n + nc] || self.grid.at(nr, nc) == Cell::Wall {
                    continue;
                }
                visited[nr * n + nc] = true;
                queue.push_back((nr, nc));
            }
        }
        false
    }

    /// Rejection-sample interior path cells until the dot budget or the
    /// attempt budget runs out. The attempt cap keeps pathological grids
    /// from looping forever.
    fn place_bonuses(&mut self, rng: &mut SmallRng) {
        let n = self.grid.size();
        let target = bonus_target(n);
        let budget = 2 * n * n;
        let mut placed = 0;
        let mut attempts = 0;

        while placed < target && attempts < budget {
            attempts += 1;
            let r = rng.random_range(1..n - 1);
            let c = rng.random_range(1..n - 1);
            if self.grid.at(r, c) == Cell::Path && (r, c) != self.start1 && (r, c) != self.exit {
                self.grid.put(r, c, Cell::Bonus);
                placed += 1;
            }
        }
    }

    /// Pick the player 2 start: fixed offsets near player 1, then a full
    /// interior scan, then the original program's degenerate fallback that
    /// may stack player 2 on player 1. Kept for behavioral compatibility;
    /// it is a known weak spot, not a guaranteed-safe invariant.
    fn pick_start2(&self) -> (usize, usize) {
        let n = self.grid.size();
        let (pr, pc) = self.start1;

        for (dr, dc) in PLAYER2_OFFSETS {
            let r = pr + dr;
            let c = pc + dc;
            if self.grid.is_interior(r, c)
                && self.grid.at(r, c) == Cell::Path
                && (r, c) != self.exit
            {
                return (r, c);
            }
        }

        for r in 1..n - 1 {
            for c in 1..n - 1 {
                if self.grid.at(r, c) == Cell::Path
                    && (r, c) != self.start1
                    && (r, c) != self.exit
                {
                    return (r, c);
                }
            }
        }

        warn!("no free path cell for player 2; falling back near player 1");
        let fallback = if self.start1 == (1, 3) { (3, 1) } else { (1, 3) };
        if self.grid.in_bounds(fallback.0, fallback.1)
            && self.grid.at(fallback.0, fallback.1) != Cell::Wall
        {
            fallback
        } else {
            self.start1
        }
    }
}

/// Randomized Prim frontier growth from (1,1), then re-assert the border
/// ring. The 2-step walk never touches the border, but the ring is an
/// invariant worth restoring explicitly.
fn carve_passages(grid: &mut Grid, rng: &mut SmallRng) {
    let n = grid.size();
    grid.put(1, 1, Cell::Path);

    let mut frontier: Vec<(usize, usize)> = Vec::new();
    push_frontier(grid, 1, 1, &mut frontier);

    while !frontier.is_empty() {
        let idx = rng.random_range(0..frontier.len());
        let (r, c) = frontier.swap_remove(idx);

        let mut carved: Vec<(usize, usize)> = Vec::with_capacity(4);
        for (nr, nc) in two_step_neighbors(n, r, c) {
            if grid.at(nr, nc) == Cell::Path {
                carved.push((nr, nc));
            }
        }
        // Stale entry with nothing carved to connect to.
        if carved.is_empty() {
            continue;
        }

        let (nr, nc) = carved[rng.random_range(0..carved.len())];
        grid.put((r + nr) / 2, (c + nc) / 2, Cell::Path);
        grid.put(r, c, Cell::Path);
        push_frontier(grid, r, c, &mut frontier);
    }

    for i in 0..n {
        grid.put(0, i, Cell::Wall);
        grid.put(n - 1, i, Cell::Wall);
        grid.put(i, 0, Cell::Wall);
        grid.put(i, n - 1, Cell::Wall);
    }
}

/// Interior lattice neighbors two steps away on one axis.
fn two_step_neighbors(n: usize, r: usize, c: usize) -> Vec<(usize, usize)> {
    let mut out = Vec::with_capacity(4);
    for (dr, dc) in [(-2i32, 0i32), (2, 0), (0, -2), (0, 2)] {
        let nr = r as i32 + dr;
        let nc = c as i32 + dc;
        if nr > 0 && nr < n as i32 - 1 && nc > 0 && nc < n as i32 - 1 {
            out.push((nr as usize, nc as usize));
        }
    }
    out
}

/// Queue the wall cells two steps out from a freshly carved cell. Each wall
/// cell is queued at most once no matter how many carved cells reach it.
fn push_frontier(grid: &Grid, r: usize, c: usize, frontier: &mut Vec<(usize, usize)>) {
    for (nr, nc) in two_step_neighbors(grid.size(), r, c) {
        if grid.at(nr, nc) == Cell::Wall && !frontier.contains(&(nr, nc)) {
            frontier.push((nr, nc));
        }
    }
}

/// Mark the exit, targeting the bottom-right interior corner. The carve pass
/// always opens that cell on a connected maze, so the probe list, the inward
/// scan, and the hardcoded fallbacks below are defensive layers that mirror
/// the placement order of the original game.
fn place_exit(grid: &mut Grid) -> (usize, usize) {
    let n = grid.size();
    let target = (n - 2, n - 2);
    let mut exit = target;

    if grid.at(target.0, target.1) != Cell::Path {
        let mut found = false;

        for (dr, dc) in EXIT_PROBES {
            let r = target.0 as i32 + dr;
            let c = target.1 as i32 + dc;
            if r > 0
                && r < n as i32 - 1
                && c > 0
                && c < n as i32 - 1
                && grid.at(r as usize, c as usize) == Cell::Path
            {
                exit = (r as usize, c as usize);
                found = true;
                break;
            }
        }

        if !found {
            'scan: for r in (1..=n - 2).rev() {
                for c in (1..=n - 2).rev() {
                    if grid.at(r, c) == Cell::Path {
                        exit = (r, c);
                        found = true;
                        break 'scan;
                    }
                }
            }
        }

        if !found {
            warn!("no path cell found for the exit; using hardcoded fallback");
            exit = (1, 3);
            if exit.1 >= n - 1 || grid.at(exit.0, exit.1) != Cell::Path {
                exit = (3, 1);
            }
            if exit.0 >= n - 1 || grid.at(exit.0, exit.1) != Cell::Path {
                exit = (1, 1);
            }
        }
    }

    grid.put(exit.0, exit.1, Cell::Exit);
    exit
}
