//! The positional heuristic: window evaluation and per-placement delta scoring

use static_assertions::const_assert;

use crate::board::{Board, Side};
use crate::{Score, HEIGHT, SCORE_MAX, SCORE_MIN, WIDTH};

/// Window value meaning 'this placement completes four in a row'
pub const WIN_WEIGHT: Score = 95;

/// Window value meaning 'this placement blocks an opponent four in a row'
pub const BLOCK_WEIGHT: Score = 5;

// at most 4 windows per direction pass through a cell, each worth at most
// BLOCK_WEIGHT, so ordinary sums over all 4 directions stay strictly below
// the win weight
const_assert!(4 * 4 * BLOCK_WEIGHT < WIN_WEIGHT);

// (dx, dy) of the four line directions: horizontal, vertical, up diagonal
// and down diagonal
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Scores the 3-cell context of a 4-cell window around a newly placed piece
///
/// `own_count` and `opp_count` are how many of those 3 cells hold the moving
/// side's own pieces and the opponent's pieces respectively. Magnitudes are
/// fixed by the heuristic: a mixed window is worthless, an empty window is a
/// tempo point, own pieces count 2/4/[`WIN_WEIGHT`] and opponent pieces
/// (a blocking move) count 1/2/[`BLOCK_WEIGHT`]. The result is positive from
/// the bot's perspective and negated from the human's.
pub fn eval_window(own_count: u8, opp_count: u8, perspective: Side) -> Score {
    // both sides present, no four in a row can complete through this window
    if own_count > 0 && opp_count > 0 {
        return 0;
    }

    let magnitude = if own_count == 0 && opp_count == 0 {
        // tempo value for claiming an otherwise empty window
        1
    } else if own_count > 0 {
        if own_count == 3 {
            WIN_WEIGHT
        } else {
            1 << own_count
        }
    } else if opp_count == 3 {
        BLOCK_WEIGHT
    } else {
        1 << (opp_count - 1)
    };

    match perspective {
        Side::Bot => magnitude,
        Side::Human => -magnitude,
    }
}

fn in_bounds(column: i32, row: i32) -> bool {
    column >= 0 && column < WIDTH as i32 && row >= 0 && row < HEIGHT as i32
}

/// Total heuristic change caused by placing one piece at `(column, row)`
///
/// `row` must be the column's current height, where the piece would land.
/// The board itself is not mutated. Every 4-cell window containing the
/// target cell is evaluated with [`eval_window`] and the contributions are
/// summed, except that a window completing four in a row short-circuits the
/// whole scan: the result is then [`SCORE_MAX`] for the bot's placement or
/// [`SCORE_MIN`] for the human's, never the raw window weight.
pub fn delta_score(board: &Board, column: usize, row: usize, perspective: Side) -> Score {
    let mut total_delta = 0;

    for &(dx, dy) in DIRECTIONS.iter() {
        let mut own_count = 0u8;
        let mut opp_count = 0u8;
        let mut cells = 0u8;

        // tally the up-to-3 cells behind the target along this direction,
        // off-board cells are skipped and do not count towards the window
        for step in (1..=3).rev() {
            let c = column as i32 - step * dx;
            let r = row as i32 - step * dy;
            if in_bounds(c, r) {
                match board.cell(c as usize, r as usize) {
                    Some(side) if side == perspective => own_count += 1,
                    Some(_) => opp_count += 1,
                    None => {}
                }
                cells += 1;
            }
        }

        if cells >= 3 {
            let delta = eval_window(own_count, opp_count, perspective);
            if delta == WIN_WEIGHT {
                return SCORE_MAX;
            }
            if delta == -WIN_WEIGHT {
                return SCORE_MIN;
            }
            total_delta += delta;
        }

        // slide the window forward one cell at a time, stopping at the edge
        for step in 1..=3 {
            let c = column as i32 + step * dx;
            let r = row as i32 + step * dy;
            if !in_bounds(c, r) {
                break;
            }
            match board.cell(c as usize, r as usize) {
                Some(side) if side == perspective => own_count += 1,
                Some(_) => opp_count += 1,
                None => {}
            }
            cells += 1;

            if cells >= 3 {
                if cells >= 4 {
                    // evict the oldest cell of the window; it is always one
                    // of the already-visited trailing cells, never off-board
                    let c_out = c - 4 * dx;
                    let r_out = r - 4 * dy;
                    match board.cell(c_out as usize, r_out as usize) {
                        Some(side) if side == perspective => own_count -= 1,
                        Some(_) => opp_count -= 1,
                        None => {}
                    }
                }

                let delta = eval_window(own_count, opp_count, perspective);
                if delta == WIN_WEIGHT {
                    return SCORE_MAX;
                }
                if delta == -WIN_WEIGHT {
                    return SCORE_MIN;
                }
                total_delta += delta;
            }
        }
    }

    total_delta
}
