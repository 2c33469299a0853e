//! Aduk: a Go board core.
//!
//! This crate models a two-color stone-placement board and enforces the
//! placement rules of Go: bounds checking, group capture, suicide
//! prohibition, reversible move history, and an incremental Zobrist
//! position fingerprint.
//!
//! Scoring, ko/superko detection, and game-record parsing are out of scope;
//! the fingerprint is exposed so a caller can implement repetition checks
//! on top.
//!
//! ## Modules
//!
//! - [`types`] - Value types: colors, coordinates, recorded moves
//! - [`zobrist`] - Incremental position fingerprint
//! - [`history`] - LIFO move log backing undo
//! - [`board`] - Board state, legality checking, and capture resolution
//!
//! ## Example
//!
//! ```
//! use aduk::{Board, Color, Position};
//!
//! let mut board = Board::new(9)?;
//!
//! board.play(Position::new(2, 2), Color::Black)?;
//! board.play(Position::new(6, 6), Color::White)?;
//! println!("{board}");
//!
//! board.undo(2);
//! assert_eq!(board.hash(), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod history;
pub mod types;
pub mod zobrist;

pub use board::{Board, InvalidBoardSize, PlayError};
pub use types::{Color, Move, Position};
