//! Depth-limited minimax search with alpha-beta pruning
//!
//! The search never scans the whole board for alignments: wins and losses
//! surface as sentinel deltas from the heuristic at the ply where the
//! winning piece would be placed.

use crate::board::{Board, Side};
use crate::heuristic::delta_score;
use crate::{Score, SCORE_MAX, SCORE_MIN, WIDTH};

/// The default number of plies the bot looks ahead
pub const MAX_DEPTH: u8 = 6;

/// The move chosen by a search and its evaluated score
///
/// `column` is `None` only for leaf evaluations, where no move was selected.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: Score,
}

/// Finds the best column for the side to move, looking `depth` plies ahead
///
/// The board is mutated in place while the tree is walked and restored
/// exactly before returning; every `apply` is paired with an `undo` carrying
/// the identical delta. Columns are tried in ascending order and ties keep
/// the earlier column, so results are deterministic. Callers start with the
/// full `(SCORE_MIN, SCORE_MAX)` window.
pub fn minimax(
    board: &mut Board,
    depth: u8,
    to_move: Side,
    mut alpha: Score,
    mut beta: Score,
) -> SearchResult {
    if depth == 0 || board.is_full() {
        return SearchResult {
            column: None,
            score: board.score(),
        };
    }

    let maximizing = to_move.is_maximizing();
    let mut best = SearchResult {
        column: None,
        score: if maximizing { SCORE_MIN } else { SCORE_MAX },
    };

    for column in 0..WIDTH {
        if !board.playable(column) {
            continue;
        }
        let row = board.height(column);

        // how the running score would change if we played here
        let delta = delta_score(board, column, row, to_move);

        let result = if maximizing && delta == SCORE_MAX {
            // win in one for the bot, no need to recurse
            SearchResult {
                column: Some(column),
                score: SCORE_MAX,
            }
        } else if !maximizing && delta == SCORE_MIN {
            // win in one for the human
            SearchResult {
                column: Some(column),
                score: SCORE_MIN,
            }
        } else {
            board.apply(column, to_move, delta);
            let reply = minimax(board, depth - 1, to_move.opponent(), alpha, beta);
            board.undo(column, to_move, delta);

            SearchResult {
                column: Some(column),
                score: reply.score,
            }
        };

        // the first candidate is always adopted, so a lost-but-playable
        // position still reports a column rather than the bare initializer
        if maximizing {
            if result.score > best.score || best.column.is_none() {
                best = result;
            }
            if best.score > alpha {
                alpha = best.score;
            }
        } else {
            if result.score < best.score || best.column.is_none() {
                best = result;
            }
            if best.score < beta {
                beta = best.score;
            }
        }

        if alpha >= beta {
            break;
        }
    }

    best
}
