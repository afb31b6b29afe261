//! Board representation for Rabbit and Wolves

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

use std::fmt;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Undo};

/// Board height (8x8)
pub const ROWS: usize = 8;
/// Board width
pub const COLS: usize = 8;

/// Number of wolves on the board
pub const WOLF_COUNT: usize = 4;

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Rabbit,
    Wolves,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Rabbit => write!(f, "Rabbit"),
            Side::Wolves => write!(f, "Wolves"),
        }
    }
}

/// Position on the board. Row 0 is the wolves' home row and the rabbit's goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < ROWS && (col as usize) < COLS);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * COLS + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / COLS) as u8,
            col: (idx % COLS) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < ROWS as i32 && col >= 0 && col < COLS as i32
    }

    /// True if this position lies on the board.
    #[inline]
    pub fn in_bounds(self) -> bool {
        (self.row as usize) < ROWS && (self.col as usize) < COLS
    }

    /// Step one cell in direction `(dr, dc)`, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, (dr, dc): (i8, i8)) -> Option<Pos> {
        let r = self.row as i32 + dr as i32;
        let c = self.col as i32 + dc as i32;
        if Self::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// A single move. Wolves are always addressed by their fixed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rabbit(Pos),
    Wolf { index: usize, to: Pos },
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Rabbit(to) => write!(f, "rabbit -> {}", to),
            Move::Wolf { index, to } => write!(f, "wolf {} -> {}", index, to),
        }
    }
}
