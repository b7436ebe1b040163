//! Caller-side regeneration policy.
//!
//! The solvability gate lives outside the generator on purpose: every
//! attempt is an independent, side-effect-free `Maze::generate` call, and
//! the retry state (attempt counter, seed cursor) is explicit here instead
//! of hidden inside the core.

use core::fmt;

use log::warn;

use crate::common::{GameMode, MazeError};
use crate::config::MAX_GENERATION_ATTEMPTS;
use crate::game::GameEngine;
use crate::generator::Maze;

/// Errors surfaced while setting up a playable maze.
#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The generator rejected the construction parameters.
    Invalid(MazeError),
    /// Every attempt produced a maze whose exit was unreachable.
    Unsolvable { attempts: u32, last_seed: i64 },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Invalid(err) => write!(f, "invalid maze parameters: {}", err),
            SessionError::Unsolvable {
                attempts,
                last_seed,
            } => write!(
                f,
                "failed {} times to generate a solvable maze (last seed {})",
                attempts, last_seed
            ),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<MazeError> for SessionError {
    fn from(err: MazeError) -> Self {
        SessionError::Invalid(err)
    }
}

/// Advance the seed cursor between attempts, skipping zero.
pub fn next_seed(seed: i64) -> i64 {
    let next = seed.wrapping_add(1);
    if next == 0 {
        1
    } else {
        next
    }
}

/// Generate until the solvability gate passes, retrying with successive
/// seeds up to [`MAX_GENERATION_ATTEMPTS`]. On exhaustion the caller
/// decides: a fresh random seed or giving up.
pub fn generate_solvable(
    size: usize,
    mode: GameMode,
    seed: i64,
) -> Result<GameEngine, SessionError> {
    let mut attempts = 0;
    let mut cursor = seed;
    loop {
        let maze = Maze::generate(size, mode, cursor)?;
        if maze.is_exit_reachable() {
            return Ok(GameEngine::new(maze));
        }
        attempts += 1;
        warn!("generation attempt {attempts} with seed {cursor} failed: exit unreachable");
        if attempts >= MAX_GENERATION_ATTEMPTS {
            return Err(SessionError::Unsolvable {
                attempts,
                last_seed: cursor,
            });
        }
        cursor = next_seed(cursor);
    }
}
