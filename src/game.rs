//! Turn-based movement, collection, and win rules over a generated maze.

use log::info;

use crate::avatar::Avatar;
use crate::common::{Cell, Direction, GameMode, PlayerId};
use crate::config::BONUS_POINTS;
use crate::generator::Maze;
use crate::grid::Grid;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    /// Set by the caller on early exit; the engine never enters this state
    /// on its own.
    Aborted,
}

/// Outcome of a single [`GameEngine::apply_move`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub moved: bool,
    pub collected_bonus: bool,
    pub new_winner: Option<PlayerId>,
}

impl MoveResult {
    const REJECTED: MoveResult = MoveResult {
        moved: false,
        collected_bonus: false,
        new_winner: None,
    };
}

/// Core game logic holding the maze and avatar state. Rejected moves leave
/// every field untouched; the winner transition happens at most once.
#[derive(Debug)]
pub struct GameEngine {
    maze: Maze,
    player1: Avatar,
    player2: Option<Avatar>,
    status: GameStatus,
}

impl GameEngine {
    /// Start a game on a freshly generated maze.
    pub fn new(maze: Maze) -> Self {
        let player1 = Avatar::at(maze.start1());
        let player2 = maze.start2().map(Avatar::at);
        GameEngine {
            maze,
            player1,
            player2,
            status: GameStatus::InProgress,
        }
    }

    /// Build an engine over a hand-laid grid, for scripted scenarios.
    pub fn with_grid(
        grid: Grid,
        mode: GameMode,
        start1: (usize, usize),
        start2: Option<(usize, usize)>,
        exit: (usize, usize),
    ) -> Self {
        Self::new(Maze::from_parts(grid, mode, 0, start1, start2, exit))
    }

    /// Apply one directional move for the given player.
    ///
    /// Spurious input is not an error: a move is silently rejected
    /// (`moved == false`) when the game is over, the player is not active
    /// in the current mode, or the destination is off-grid or a wall.
    pub fn apply_move(&mut self, player: PlayerId, direction: Direction) -> MoveResult {
        if self.status != GameStatus::InProgress {
            return MoveResult::REJECTED;
        }
        let (row, col) = match self.player(player) {
            Some(avatar) => avatar.pos(),
            None => return MoveResult::REJECTED,
        };

        let (dr, dc) = direction.delta();
        let nr = row as i32 + dr;
        let nc = col as i32 + dc;
        let n = self.maze.size() as i32;
        if nr < 0 || nc < 0 || nr >= n || nc >= n {
            return MoveResult::REJECTED;
        }
        let dest = (nr as usize, nc as usize);

        let dest_cell = self.maze.grid().at(dest.0, dest.1);
        if dest_cell == Cell::Wall {
            return MoveResult::REJECTED;
        }

        if let Some(avatar) = self.player_mut(player) {
            avatar.step_to(dest);
        }

        let mut collected_bonus = false;
        if dest_cell == Cell::Bonus {
            if let Some(avatar) = self.player_mut(player) {
                avatar.award(BONUS_POINTS);
            }
            // Consumed exactly once; the cell never becomes a bonus again.
            self.maze.grid_mut().put(dest.0, dest.1, Cell::Path);
            collected_bonus = true;
        }

        let mut new_winner = None;
        if dest == self.maze.exit() {
            self.status = GameStatus::Won(player);
            new_winner = Some(player);
            info!("player {} reached the exit", player.number());
        }

        MoveResult {
            moved: true,
            collected_bonus,
            new_winner,
        }
    }

    /// Terminal early-exit transition, driven by the caller. A no-op once
    /// the game is already over.
    pub fn abort(&mut self) {
        if self.status == GameStatus::InProgress {
            self.status = GameStatus::Aborted;
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.maze.mode()
    }

    pub fn seed(&self) -> i64 {
        self.maze.seed()
    }

    pub fn size(&self) -> usize {
        self.maze.size()
    }

    pub fn exit(&self) -> (usize, usize) {
        self.maze.exit()
    }

    /// Immutable view of the grid for rendering.
    pub fn grid(&self) -> &Grid {
        self.maze.grid()
    }

    /// Detached copy of the grid, for collaborators that outlive a borrow.
    pub fn grid_snapshot(&self) -> Grid {
        self.maze.grid().clone()
    }

    /// Avatar state for the given player; `None` when player 2 is inactive.
    pub fn player(&self, player: PlayerId) -> Option<&Avatar> {
        match player {
            PlayerId::One => Some(&self.player1),
            PlayerId::Two => self.player2.as_ref(),
        }
    }

    fn player_mut(&mut self, player: PlayerId) -> Option<&mut Avatar> {
        match player {
            PlayerId::One => Some(&mut self.player1),
            PlayerId::Two => self.player2.as_mut(),
        }
    }
}
