use anyhow::{anyhow, Result};

use crate::heuristic::delta_score;
use crate::{Score, HEIGHT, SCORE_MAX, SCORE_MIN, WIDTH};

/// One of the two players of a game, doubling as the perspective a score is
/// reported from: the bot maximizes, the human minimizes
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Bot,
    Human,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Bot => Side::Human,
            Side::Human => Side::Bot,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Side::Bot
    }
}

/// The game board, packed as one bitfield per column per side
///
/// Bit index equals row, counted from the bottom. For every column only the
/// lowest `heights[column]` bits may be set across the two side bitfields,
/// and a bit is never set in both sides at once.
///
/// The score is the running sum of the deltas passed to [`apply`] for every
/// piece currently on the board; it is only ever adjusted incrementally.
///
/// [`apply`]: #method.apply
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    bot: [u8; WIDTH],
    human: [u8; WIDTH],
    heights: [u8; WIDTH],
    score: Score,
}

impl Board {
    pub fn new() -> Self {
        Self {
            bot: [0; WIDTH],
            human: [0; WIDTH],
            heights: [0; WIDTH],
            score: 0,
        }
    }

    /// Plays out a string of 1-based column digits, alternating sides
    /// starting with `first`
    ///
    /// Each placement's delta is computed with the heuristic scorer, so the
    /// resulting board carries the same running score the search would have
    /// accumulated reaching this position.
    pub fn from_moves<S: AsRef<str>>(moves: S, first: Side) -> Result<Self> {
        let mut board = Self::new();
        let mut side = first;

        for column_char in moves.as_ref().chars() {
            // only play available moves
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    let column = column - 1;
                    if !board.playable(column) {
                        return Err(anyhow!("Invalid move, column {} full", column + 1));
                    }
                    let delta = delta_score(&board, column, board.height(column), side);
                    // abort if the position is won at any point
                    if delta == SCORE_MAX || delta == SCORE_MIN {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    board.apply(column, side, delta);
                    side = side.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn height(&self, column: usize) -> usize {
        self.heights[column] as usize
    }

    pub fn playable(&self, column: usize) -> bool {
        self.heights[column] < HEIGHT as u8
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&height| height as usize == HEIGHT)
    }

    /// Returns the owner of the piece at the given cell, if any
    pub fn cell(&self, column: usize, row: usize) -> Option<Side> {
        let mask = 1u8 << row;
        if self.bot[column] & mask != 0 {
            Some(Side::Bot)
        } else if self.human[column] & mask != 0 {
            Some(Side::Human)
        } else {
            None
        }
    }

    /// Drops a piece into a column and adds its precomputed score delta
    ///
    /// The column must not be full; this is the caller's responsibility.
    /// The delta is taken as a parameter so the scoring work is done once
    /// per search node, not again on the matching [`undo`].
    ///
    /// [`undo`]: #method.undo
    pub fn apply(&mut self, column: usize, side: Side, delta: Score) {
        let mask = 1u8 << self.heights[column];
        match side {
            Side::Bot => self.bot[column] |= mask,
            Side::Human => self.human[column] |= mask,
        }
        self.heights[column] += 1;
        self.score += delta;
    }

    /// Removes the most recent piece of a column and subtracts its delta
    ///
    /// Must mirror the matching [`apply`] exactly: same column, same side,
    /// same delta, strictly LIFO with respect to other moves in the column.
    ///
    /// [`apply`]: #method.apply
    pub fn undo(&mut self, column: usize, side: Side, delta: Score) {
        self.heights[column] -= 1;
        let mask = 1u8 << self.heights[column];
        match side {
            Side::Bot => self.bot[column] &= !mask,
            Side::Human => self.human[column] &= !mask,
        }
        self.score -= delta;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
