//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent uses a depth-limited minimax search with alpha-beta pruning
//! over an incrementally-scored board: the heuristic value of a position is
//! updated piece by piece as moves are applied and undone, never recomputed
//! from the whole board.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_bot::board::{Board, Side};
//! use connect4_bot::search::minimax;
//! use connect4_bot::{SCORE_MAX, SCORE_MIN};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::from_moves("4455", Side::Human)?;
//! let result = minimax(&mut board, 4, Side::Bot, SCORE_MIN, SCORE_MAX);
//!
//! assert!(result.column.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod heuristic;

pub mod search;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// Heuristic score of a position, the running sum of per-placement deltas
pub type Score = i16;

/// Sentinel score of a position the minimizing player is certain to win
pub const SCORE_MIN: Score = Score::MIN;

/// Sentinel score of a position the maximizing player is certain to win
pub const SCORE_MAX: Score = Score::MAX;

// ensure that a column's rows fit in the u8 bitfields of the board
const_assert!(HEIGHT <= 8);
