//! Go board state and move execution.
//!
//! This module provides the placement rules of Go:
//! - Bounds and occupancy checking
//! - Group capture via a flood-fill liberty search
//! - Suicide prohibition, with capture taking precedence
//! - Reversible move history and an incremental position fingerprint
//!
//! The board owns its history and hash table exclusively; nothing is shared
//! between board instances, so independent boards never interfere.

use std::fmt;

use crate::history::MoveHistory;
use crate::types::{Color, Move, Position};
use crate::zobrist::ZobristHash;

/// Rejected board size at construction. Boards must be at least 1x1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidBoardSize(pub usize);

impl fmt::Display for InvalidBoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid board size {}: must be at least 1", self.0)
    }
}

impl std::error::Error for InvalidBoardSize {}

/// Why a placement was rejected. The board is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    /// A coordinate lies outside `[0, size)`
    OutOfBounds,
    /// The target cell already holds a stone
    Occupied,
    /// The move captures nothing and leaves its own group without liberties
    Suicide,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::OutOfBounds => write!(f, "illegal move: position off the board"),
            PlayError::Occupied => write!(f, "illegal move: position already occupied"),
            PlayError::Suicide => write!(f, "illegal move: suicide"),
        }
    }
}

impl std::error::Error for PlayError {}

/// A Go board of fixed size with legality checking, capture resolution,
/// undo history, and a Zobrist fingerprint of the current position.
#[derive(Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
    history: MoveHistory,
    zobrist: ZobristHash,
}

impl Board {
    /// Create an empty board, seeding the fingerprint table from ambient
    /// randomness. Use [`Board::with_seed`] for reproducible hashes.
    pub fn new(size: usize) -> Result<Self, InvalidBoardSize> {
        Self::with_seed(size, fastrand::u64(..))
    }

    /// Create an empty board with a deterministic fingerprint table.
    pub fn with_seed(size: usize, seed: u64) -> Result<Self, InvalidBoardSize> {
        if size < 1 {
            return Err(InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            history: MoveHistory::new(),
            zobrist: ZobristHash::new(size, seed),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, pos: Position) -> usize {
        pos.y * self.size + pos.x
    }

    /// Whether both coordinates lie in `[0, size)`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// The stone at `pos`, or `None` for an empty or out-of-bounds cell.
    pub fn get(&self, pos: Position) -> Option<Color> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[self.idx(pos)]
    }

    /// In-bounds orthogonal neighbors; 2 at a corner, 3 on an edge, 4 inside.
    fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let s = self.size;
        let mut v = Vec::new();
        if pos.x > 0 {
            v.push(Position::new(pos.x - 1, pos.y));
        }
        if pos.x + 1 < s {
            v.push(Position::new(pos.x + 1, pos.y));
        }
        if pos.y > 0 {
            v.push(Position::new(pos.x, pos.y - 1));
        }
        if pos.y + 1 < s {
            v.push(Position::new(pos.x, pos.y + 1));
        }
        v.into_iter()
    }

    /// Place a stone of `color` at `pos`.
    ///
    /// Opposing neighbor groups that lose their last liberty are captured;
    /// a capturing move is always legal. A move that captures nothing and
    /// leaves its own group without liberties fails with
    /// [`PlayError::Suicide`] and the board is rolled back exactly.
    pub fn play(&mut self, pos: Position, color: Color) -> Result<(), PlayError> {
        if !self.contains(pos) {
            return Err(PlayError::OutOfBounds);
        }
        let idx = self.idx(pos);
        if self.cells[idx].is_some() {
            return Err(PlayError::Occupied);
        }

        // Capture scan before placing: the target cell is excluded as a
        // liberty since it is about to be occupied. `seen` deduplicates
        // stones when several neighbors belong to the same group.
        let opponent = color.opponent();
        let mut captures: Vec<Position> = Vec::new();
        let mut seen = vec![false; self.size * self.size];
        for neighbor in self.neighbors(pos) {
            if self.get(neighbor) == Some(opponent) && !seen[self.idx(neighbor)] {
                for stone in self.dead_group(neighbor, Some(pos)) {
                    let i = self.idx(stone);
                    if !seen[i] {
                        seen[i] = true;
                        captures.push(stone);
                    }
                }
            }
        }

        self.cells[idx] = Some(color);
        self.zobrist.toggle(pos, color);

        if captures.is_empty() {
            // Nothing captured: the placed stone's own group must keep a
            // liberty, otherwise roll the placement back.
            if !self.dead_group(pos, None).is_empty() {
                self.cells[idx] = None;
                self.zobrist.toggle(pos, color);
                return Err(PlayError::Suicide);
            }
        } else {
            for &stone in &captures {
                let i = self.idx(stone);
                self.cells[i] = None;
                self.zobrist.toggle(stone, opponent);
            }
        }

        self.history.push(Move::Play {
            position: pos,
            color,
            captures,
        });
        Ok(())
    }

    /// Record a pass. History-only; grid and hash are untouched.
    pub fn pass(&mut self) {
        self.history.push(Move::Pass);
    }

    /// Take back up to `count` moves, restoring grid and hash exactly.
    /// Undoing past the start of the history is a no-op.
    pub fn undo(&mut self, count: usize) {
        for _ in 0..count {
            let Some(mv) = self.history.pop() else {
                return;
            };
            match mv {
                Move::Play {
                    position,
                    color,
                    captures,
                } => {
                    let idx = self.idx(position);
                    self.cells[idx] = None;
                    self.zobrist.toggle(position, color);

                    let restored = color.opponent();
                    for capture in captures {
                        let i = self.idx(capture);
                        self.cells[i] = Some(restored);
                        self.zobrist.toggle(capture, restored);
                    }
                }
                Move::Pass => {}
            }
        }
    }

    /// Empty the grid, zero the hash, and drop the history. The fingerprint
    /// table is kept, so replayed moves hash identically after a clear.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.zobrist.reset();
        self.history.clear();
    }

    /// The current 64-bit position fingerprint.
    pub fn hash(&self) -> u64 {
        self.zobrist.value()
    }

    /// Number of moves and passes applied since the last clear.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Flood-fill liberty search from `anchor`.
    ///
    /// Walks the same-colored group reachable from `anchor` through
    /// orthogonal adjacency. The first empty neighbor that is not `excluded`
    /// proves a liberty and terminates the search with an empty result;
    /// otherwise the whole group is returned as captured/dead. `excluded`
    /// stands for a cell about to be occupied and is an explicit option so
    /// that the corner (0, 0) can never be excluded by accident.
    fn dead_group(&self, anchor: Position, excluded: Option<Position>) -> Vec<Position> {
        let Some(color) = self.get(anchor) else {
            return Vec::new();
        };
        let mut stack = vec![anchor];
        let mut visited = vec![false; self.size * self.size];
        let mut group = Vec::new();

        while let Some(stone) = stack.pop() {
            let i = self.idx(stone);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            group.push(stone);

            for neighbor in self.neighbors(stone) {
                match self.get(neighbor) {
                    None if excluded != Some(neighbor) => return Vec::new(),
                    Some(c) if c == color && !visited[self.idx(neighbor)] => {
                        stack.push(neighbor);
                    }
                    _ => {}
                }
            }
        }
        group
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(Position::new(x, y)) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert_eq!(Board::new(0).unwrap_err(), InvalidBoardSize(0));
        assert!(Board::new(1).is_ok());
    }

    #[test]
    fn contains_matches_bounds() {
        let board = Board::with_seed(9, 0).unwrap();
        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(8, 8)));
        assert!(!board.contains(Position::new(9, 0)));
        assert!(!board.contains(Position::new(0, 9)));
    }

    #[test]
    fn neighbor_counts() {
        let board = Board::with_seed(9, 0).unwrap();
        assert_eq!(board.neighbors(Position::new(0, 0)).count(), 2);
        assert_eq!(board.neighbors(Position::new(4, 0)).count(), 3);
        assert_eq!(board.neighbors(Position::new(4, 4)).count(), 4);
        assert_eq!(board.neighbors(Position::new(8, 8)).count(), 2);
    }

    #[test]
    fn play_sets_the_cell() {
        let mut board = Board::with_seed(9, 0).unwrap();
        board.play(Position::new(4, 6), Color::Black).unwrap();
        assert_eq!(board.get(Position::new(4, 6)), Some(Color::Black));
        assert_eq!(board.get(Position::new(6, 4)), None);
    }

    #[test]
    fn rejects_out_of_bounds_and_occupied() {
        let mut board = Board::with_seed(9, 0).unwrap();
        assert_eq!(
            board.play(Position::new(9, 9), Color::Black),
            Err(PlayError::OutOfBounds)
        );

        board.play(Position::new(3, 4), Color::Black).unwrap();
        assert_eq!(
            board.play(Position::new(3, 4), Color::White),
            Err(PlayError::Occupied)
        );
        assert_eq!(board.get(Position::new(3, 4)), Some(Color::Black));
    }

    #[test]
    fn single_stone_group_with_liberty_is_not_dead() {
        let mut board = Board::with_seed(9, 0).unwrap();
        board.play(Position::new(4, 4), Color::Black).unwrap();
        assert!(board.dead_group(Position::new(4, 4), None).is_empty());
    }

    #[test]
    fn dead_group_respects_excluded_cell() {
        let mut board = Board::with_seed(9, 0).unwrap();
        // Lone white stone whose liberties are (0, 1) and (1, 0).
        board.play(Position::new(0, 0), Color::White).unwrap();
        board.play(Position::new(1, 0), Color::Black).unwrap();

        let anchor = Position::new(0, 0);
        assert!(board.dead_group(anchor, None).is_empty());
        assert_eq!(board.dead_group(anchor, Some(Position::new(0, 1))), vec![anchor]);
    }

    #[test]
    fn corner_liberty_at_origin_counts() {
        // A stone whose only liberty is (0, 0) must be playable; the empty
        // origin is a real liberty, not an excluded sentinel.
        let mut board = Board::with_seed(9, 0).unwrap();
        board.play(Position::new(2, 0), Color::White).unwrap();
        board.play(Position::new(1, 1), Color::White).unwrap();
        board.play(Position::new(0, 1), Color::White).unwrap();

        assert_eq!(board.play(Position::new(1, 0), Color::Black), Ok(()));
        assert_eq!(board.get(Position::new(1, 0)), Some(Color::Black));
    }

    #[test]
    fn corner_suicide_is_rejected() {
        let mut board = Board::with_seed(9, 0).unwrap();
        board.play(Position::new(1, 0), Color::Black).unwrap();
        board.play(Position::new(0, 1), Color::Black).unwrap();

        let before = board.to_string();
        assert_eq!(
            board.play(Position::new(0, 0), Color::White),
            Err(PlayError::Suicide)
        );
        assert_eq!(board.to_string(), before);
    }
}
