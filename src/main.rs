//! Aduk demo: play a small capture sequence and take it back.
//!
//! Shows the board rendering and position fingerprint before a capture,
//! after it, and after an undo restores the previous position.

use anyhow::Result;
use clap::Parser;

use aduk::{Board, Color, Position};

/// Aduk: a Go board core (demo)
#[derive(Parser)]
#[command(name = "aduk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN), at least 4 for the demo sequence
    #[arg(long, default_value_t = 9)]
    size: usize,

    /// Seed for the position fingerprint table
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut board = match cli.seed {
        Some(seed) => Board::with_seed(cli.size, seed)?,
        None => Board::new(cli.size)?,
    };

    // Two black stones on the edge, walled in by white.
    let setup = [
        (Position::new(0, 2), Color::Black),
        (Position::new(0, 1), Color::Black),
        (Position::new(0, 0), Color::White),
        (Position::new(1, 1), Color::White),
        (Position::new(1, 2), Color::White),
    ];
    for (pos, color) in setup {
        board.play(pos, color)?;
    }

    println!("before capture (hash {:#018x}):\n{board}", board.hash());

    board.play(Position::new(0, 3), Color::White)?;
    println!("white (0, 3) captures (hash {:#018x}):\n{board}", board.hash());

    board.undo(1);
    println!("after undo (hash {:#018x}):\n{board}", board.hash());

    Ok(())
}
