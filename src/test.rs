#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::board::{Board, Side};
    use crate::heuristic::{delta_score, eval_window, BLOCK_WEIGHT, WIN_WEIGHT};
    use crate::search::{minimax, SearchResult};
    use crate::{HEIGHT, SCORE_MAX, SCORE_MIN, WIDTH};

    /// Plain minimax without pruning, walking the exact same tree as the
    /// alpha-beta search, used to cross-check its results
    fn minimax_unpruned(board: &mut Board, depth: u8, to_move: Side) -> SearchResult {
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
            let delta = delta_score(board, column, row, to_move);

            let score = if maximizing && delta == SCORE_MAX {
                SCORE_MAX
            } else if !maximizing && delta == SCORE_MIN {
                SCORE_MIN
            } else {
                board.apply(column, to_move, delta);
                let reply = minimax_unpruned(board, depth - 1, to_move.opponent());
                board.undo(column, to_move, delta);
                reply.score
            };

            if (maximizing && score > best.score)
                || (!maximizing && score < best.score)
                || best.column.is_none()
            {
                best = SearchResult {
                    column: Some(column),
                    score,
                };
            }
        }

        best
    }

    #[test]
    pub fn window_scores() {
        // empty window is a tempo point
        assert_eq!(eval_window(0, 0, Side::Bot), 1);
        assert_eq!(eval_window(0, 0, Side::Human), -1);

        // building our own line
        assert_eq!(eval_window(1, 0, Side::Bot), 2);
        assert_eq!(eval_window(2, 0, Side::Bot), 4);
        assert_eq!(eval_window(3, 0, Side::Bot), WIN_WEIGHT);
        assert_eq!(eval_window(1, 0, Side::Human), -2);
        assert_eq!(eval_window(2, 0, Side::Human), -4);
        assert_eq!(eval_window(3, 0, Side::Human), -WIN_WEIGHT);

        // contesting the opponent's line
        assert_eq!(eval_window(0, 1, Side::Bot), 1);
        assert_eq!(eval_window(0, 2, Side::Bot), 2);
        assert_eq!(eval_window(0, 3, Side::Bot), BLOCK_WEIGHT);
        assert_eq!(eval_window(0, 1, Side::Human), -1);
        assert_eq!(eval_window(0, 2, Side::Human), -2);
        assert_eq!(eval_window(0, 3, Side::Human), -BLOCK_WEIGHT);

        // mixed windows can never complete
        assert_eq!(eval_window(1, 2, Side::Bot), 0);
        assert_eq!(eval_window(2, 1, Side::Human), 0);
    }

    #[test]
    pub fn apply_undo_round_trip() -> Result<()> {
        let board = Board::from_moves("443512", Side::Human)?;

        for column in 0..WIDTH {
            if !board.playable(column) {
                continue;
            }
            for &side in [Side::Bot, Side::Human].iter() {
                let mut scratch = board.clone();
                let row = scratch.height(column);
                let delta = delta_score(&scratch, column, row, side);

                scratch.apply(column, side, delta);
                assert_ne!(scratch, board);
                scratch.undo(column, side, delta);
                assert_eq!(scratch, board);
            }
        }
        Ok(())
    }

    #[test]
    pub fn delta_negates_with_mirrored_occupancy() -> Result<()> {
        // the same move sequence with the sides swapped
        let bot_first = Board::from_moves("434", Side::Bot)?;
        let human_first = Board::from_moves("434", Side::Human)?;

        for column in 0..WIDTH {
            let row = bot_first.height(column);
            assert_eq!(
                delta_score(&bot_first, column, row, Side::Bot),
                -delta_score(&human_first, column, row, Side::Human)
            );
        }
        Ok(())
    }

    #[test]
    pub fn immediate_win_detection() {
        // three in a row on the bottom rank, columns 1-3
        let mut board = Board::new();
        for column in 0..3 {
            let delta = delta_score(&board, column, 0, Side::Bot);
            board.apply(column, Side::Bot, delta);
        }
        assert_eq!(delta_score(&board, 3, 0, Side::Bot), SCORE_MAX);

        let mut board = Board::new();
        for column in 0..3 {
            let delta = delta_score(&board, column, 0, Side::Human);
            board.apply(column, Side::Human, delta);
        }
        assert_eq!(delta_score(&board, 3, 0, Side::Human), SCORE_MIN);
    }

    #[test]
    pub fn full_board_is_terminal() {
        // fill all 42 cells without score bookkeeping, the pattern is
        // irrelevant to the terminal check
        let mut board = Board::new();
        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                let side = if (column + row) % 2 == 0 {
                    Side::Bot
                } else {
                    Side::Human
                };
                board.apply(column, side, 0);
            }
        }
        assert!(board.is_full());

        let leaf_score = board.score();
        let result = minimax(&mut board, 6, Side::Bot, SCORE_MIN, SCORE_MAX);
        assert_eq!(result.column, None);
        assert_eq!(result.score, leaf_score);
    }

    #[test]
    pub fn pruning_matches_plain_minimax() -> Result<()> {
        let positions = ["", "4", "44", "4231", "434526"];

        for moves in positions.iter() {
            for &depth in [2, 3].iter() {
                let mut pruned = Board::from_moves(moves, Side::Human)?;
                let mut plain = pruned.clone();

                assert_eq!(
                    minimax(&mut pruned, depth, Side::Bot, SCORE_MIN, SCORE_MAX),
                    minimax_unpruned(&mut plain, depth, Side::Bot),
                    "position '{}' depth {}",
                    moves,
                    depth
                );
            }
        }
        Ok(())
    }

    #[test]
    pub fn opening_search_prefers_centre() {
        let mut board = Board::new();
        let result = minimax(&mut board, 4, Side::Bot, SCORE_MIN, SCORE_MAX);

        assert!(matches!(result.column, Some(2..=4)));
        assert_ne!(result.score, SCORE_MAX);
        assert_ne!(result.score, SCORE_MIN);
        // the board is restored exactly after the search
        assert_eq!(board, Board::new());
    }

    #[test]
    pub fn search_takes_vertical_win() {
        // three bot pieces stacked in column 1
        let mut board = Board::new();
        for _ in 0..3 {
            let row = board.height(0);
            let delta = delta_score(&board, 0, row, Side::Bot);
            board.apply(0, Side::Bot, delta);
        }

        let result = minimax(&mut board, 4, Side::Bot, SCORE_MIN, SCORE_MAX);
        assert_eq!(result.column, Some(0));
        assert_eq!(result.score, SCORE_MAX);
    }

    #[test]
    pub fn lost_position_still_picks_a_move() {
        // an open-ended three on the bottom rank, columns 3-5: the human
        // wins next turn whichever end the bot blocks, so every bot move
        // scores the losing sentinel
        let mut board = Board::new();
        for column in 2..5 {
            let delta = delta_score(&board, column, 0, Side::Human);
            board.apply(column, Side::Human, delta);
        }

        let result = minimax(&mut board, 2, Side::Bot, SCORE_MIN, SCORE_MAX);
        assert_eq!(result.column, Some(0));
        assert_eq!(result.score, SCORE_MIN);

        // and the mirrored case for the minimizing side
        let mut board = Board::new();
        for column in 2..5 {
            let delta = delta_score(&board, column, 0, Side::Bot);
            board.apply(column, Side::Bot, delta);
        }

        let result = minimax(&mut board, 2, Side::Human, SCORE_MIN, SCORE_MAX);
        assert_eq!(result.column, Some(0));
        assert_eq!(result.score, SCORE_MAX);
    }

    #[test]
    pub fn from_moves_rejects_bad_input() {
        assert!(Board::from_moves("4x", Side::Human).is_err());
        assert!(Board::from_moves("8", Side::Human).is_err());
        // seven pieces in one column overfill it
        assert!(Board::from_moves("4444444", Side::Human).is_err());
        // playing on after a vertical four in a row
        assert!(Board::from_moves("45454545", Side::Human).is_err());
    }
}
