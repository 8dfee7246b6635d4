use anyhow::{anyhow, Result};
use rand::Rng;

use std::io::{stdin, stdout, Write};

use connect4_bot::board::{Board, Side};
use connect4_bot::heuristic::delta_score;
use connect4_bot::search::{minimax, MAX_DEPTH};
use connect4_bot::{SCORE_MAX, SCORE_MIN, WIDTH};

mod display;

#[derive(Copy, Clone, Debug)]
enum GameState {
    Playing,
    BotWin,
    HumanWin,
    Draw,
}

fn main() -> Result<()> {
    let mut board = Board::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose who makes the first move
    let mut to_move;
    loop {
        let mut buffer = String::new();
        print!("Would you like to make the first move? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                to_move = Side::Human;
                break;
            }
            Some(_letter @ 'n') => {
                to_move = Side::Bot;
                break;
            }
            _ => println!("Unknown answer given"),
        }
    }

    let mut bot_opening = to_move == Side::Bot;
    let mut state = GameState::Playing;

    // game loop
    loop {
        display::draw(&board).expect("Failed to draw board!");

        match state {
            GameState::Playing => {
                let next_move = match to_move {
                    Side::Bot => {
                        println!("Bot is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        let column = if bot_opening {
                            // no point searching an empty board, open with a
                            // random central column
                            rand::thread_rng().gen_range(1..WIDTH - 1)
                        } else {
                            let result =
                                minimax(&mut board, MAX_DEPTH, Side::Bot, SCORE_MIN, SCORE_MAX);
                            result.column.ok_or_else(|| anyhow!("no legal moves left"))?
                        };
                        println!("Bot plays column {}", column + 1);
                        column
                    }

                    Side::Human => {
                        print!("Move input (1-{}) > ", WIDTH);
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        let column = match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column @ 1..=WIDTH) => column - 1,
                            Ok(column) => {
                                println!("Column {} out of range", column);
                                continue;
                            }
                        };
                        if !board.playable(column) {
                            println!("Invalid move, column {} full", column + 1);
                            continue;
                        }
                        column
                    }
                };
                bot_opening = false;

                let row = board.height(next_move);
                let delta = delta_score(&board, next_move, row, to_move);

                if to_move == Side::Bot && delta == SCORE_MAX {
                    // the sentinel is not an additive score, place the
                    // winning piece without it
                    board.apply(next_move, to_move, 0);
                    state = GameState::BotWin;
                } else if to_move == Side::Human && delta == SCORE_MIN {
                    board.apply(next_move, to_move, 0);
                    state = GameState::HumanWin;
                } else {
                    board.apply(next_move, to_move, delta);
                    if board.is_full() {
                        state = GameState::Draw;
                    }
                }
                to_move = to_move.opponent();
            }

            // end states
            GameState::BotWin => {
                println!("The bot wins!");
                break;
            }
            GameState::HumanWin => {
                println!("You win!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
