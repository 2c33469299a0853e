//! Core value types: stone colors, board coordinates, and played moves.

use std::fmt;

/// Stone color. Every occupied cell holds exactly one of these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The opposing color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A board coordinate. Valid positions satisfy `x < size && y < size`
/// for the board they are used with; the board checks this on every play.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A move as recorded on the history stack.
///
/// A pass is its own variant rather than a reserved coordinate, so it can
/// never collide with a real board position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
    /// A stone placed on the board, together with every opposing stone it
    /// captured. The capture list is what makes the move reversible.
    Play {
        position: Position,
        color: Color,
        captures: Vec<Position>,
    },
    /// A pass. History-only, no grid or hash effect.
    Pass,
}
