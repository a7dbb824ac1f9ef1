//! Line-prompt runner.
//!
//! Plays the puzzle over plain stdin/stdout: pick a shape, rotate it any number of
//! times, type `row,col`, repeat until the board is covered. End of input quits.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use log::info;

use tui_blockfill::core::{Game, GameConfig};
use tui_blockfill::input::{parse_coordinate, parse_direction, parse_shape, parse_yes};
use tui_blockfill::term::TextStyle;

const BELL: char = '\u{7}';

fn main() -> Result<()> {
    tui_blockfill::init_logging();

    let config = GameConfig::from_env();
    let seed = config.seed.unwrap_or_else(tui_blockfill::seed_from_clock);
    info!("starting with seed {}", seed);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    run(&mut Game::with_config(config, seed), &mut lines, TextStyle::default())
}

fn run(
    game: &mut Game,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: TextStyle,
) -> Result<()> {
    loop {
        print!("{}", text.board(&game.snapshot()));

        while !game.is_won() {
            print!("{}", text.shapes(&game.snapshot()));
            println!("Next shapes in line: T, S, L, D, Z");

            let Some(line) = prompt(lines, "Enter shape (T/S/L/D/Z) to place: ")? else {
                return Ok(());
            };
            let kind = match parse_shape(&line) {
                Ok(kind) => kind,
                Err(err) => {
                    println!("{}", err.message());
                    continue;
                }
            };

            println!("Rotate the shape. Press Enter to stop rotation.");
            loop {
                let Some(line) =
                    prompt(lines, "Enter rotation direction (L/R) or press Enter to stop: ")?
                else {
                    return Ok(());
                };
                match parse_direction(&line) {
                    Ok(None) => break,
                    Ok(Some(direction)) => {
                        game.rotate(kind, direction);
                        print!("{}", text.shape(game.shape(kind)));
                    }
                    Err(err) => println!("{}", err.message()),
                }
            }

            let Some(line) = prompt(
                lines,
                "Enter coordinates (row, col) to place the shape (e.g., 0,0): ",
            )?
            else {
                return Ok(());
            };
            match parse_coordinate(&line).and_then(|anchor| game.place(kind, anchor)) {
                Ok(_) => print!("{}", text.board(&game.snapshot())),
                Err(err) => println!(
                    "Shape cannot be put there ({}). Try a different spot.",
                    err.message()
                ),
            }
        }

        println!("Game is finished, you win!{}", BELL);

        let Some(line) = prompt(lines, "Do you want to play another round? (Y/N): ")? else {
            return Ok(());
        };
        if !parse_yes(&line) {
            return Ok(());
        }
        game.new_round();
    }
}

/// Print a question and read one answer; `None` at end of input
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    question: &str,
) -> Result<Option<String>> {
    print!("{}", question);
    io::stdout().flush()?;
    Ok(lines.next().transpose()?)
}
