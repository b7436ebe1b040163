//! Per-player position and statistics.

/// State of one hot-seat player: grid position, cumulative score, and the
/// count of accepted moves. Both counters only ever increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Avatar {
    pos: (usize, usize),
    score: u32,
    moves: u32,
}

impl Avatar {
    pub(crate) fn at(pos: (usize, usize)) -> Self {
        Avatar {
            pos,
            score: 0,
            moves: 0,
        }
    }

    pub fn pos(&self) -> (usize, usize) {
        self.pos
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Accepted move: update the position and bump the move counter,
    /// regardless of what the destination cell held.
    pub(crate) fn step_to(&mut self, pos: (usize, usize)) {
        self.pos = pos;
        self.moves += 1;
    }

    pub(crate) fn award(&mut self, points: u32) {
        self.score += points;
    }
}
