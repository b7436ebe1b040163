//! Common types for the maze game: cell kinds, directions, players, errors.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Path,
    Exit,
    /// Collectible dot, consumed on first visit.
    Bonus,
}

impl Cell {
    /// Character used in the text rendering of a grid.
    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Path => ' ',
            Cell::Exit => 'E',
            Cell::Bonus => '.',
        }
    }
}

/// One of the four cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta of a single step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Number of simultaneous avatars on the grid. Dual mode is two hot-seat
/// players sharing one maze, not two network peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Single,
    Dual,
}

/// Identifies one of the two hot-seat players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Player number as persisted in score records.
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

/// Errors returned by grid and generator operations.
#[derive(Debug, PartialEq, Eq)]
pub enum MazeError {
    /// Size is even or outside `[MIN_SIZE, MAX_SIZE]`.
    InvalidSize { size: usize },
    /// Coordinate outside the grid.
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidSize { size } => {
                write!(f, "InvalidSize: {} is not an odd size within bounds", size)
            }
            MazeError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

impl std::error::Error for MazeError {}
