//! Board structure: one rabbit, four wolves

use std::fmt;

use super::bitboard::Bitboard;
use super::{Move, Pos, Side, COLS, ROWS, WOLF_COUNT};
use crate::error::BoardError;
use crate::rules::{self, directions};

/// Game board.
///
/// Holds exactly one rabbit and four wolves. A wolf's index into `wolves`
/// is its identity for the whole game. All five positions are pairwise
/// distinct: `new` and `from_positions` guarantee it, and every legal move
/// targets an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rabbit: Pos,
    wolves: [Pos; WOLF_COUNT],
}

/// Record of a speculative move, consumed by `Board::unmake_move`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "pass the Undo back to Board::unmake_move"]
pub enum Undo {
    Rabbit { from: Pos },
    Wolf { index: usize, from: Pos },
}

impl Board {
    /// Standard start: rabbit bottom-center (left of center on an even
    /// width), wolves on the odd columns of row 0.
    pub fn new() -> Self {
        let mut wolves = [Pos::new(0, 0); WOLF_COUNT];
        for (i, wolf) in wolves.iter_mut().enumerate() {
            *wolf = Pos::new(0, (i * 2 + 1) as u8);
        }
        Self {
            rabbit: Pos::new((ROWS - 1) as u8, ((COLS - 1) / 2) as u8),
            wolves,
        }
    }

    /// Build an arbitrary position, rejecting off-board or overlapping pieces.
    pub fn from_positions(rabbit: Pos, wolves: [Pos; WOLF_COUNT]) -> Result<Self, BoardError> {
        let mut occupied = Bitboard::new();
        for pos in std::iter::once(rabbit).chain(wolves) {
            if !pos.in_bounds() {
                return Err(BoardError::OutOfBounds(pos));
            }
            if occupied.get(pos) {
                return Err(BoardError::Collision(pos));
            }
            occupied.set(pos);
        }
        Ok(Self { rabbit, wolves })
    }

    #[inline]
    pub fn rabbit(&self) -> Pos {
        self.rabbit
    }

    #[inline]
    pub fn wolves(&self) -> &[Pos; WOLF_COUNT] {
        &self.wolves
    }

    /// Position of wolf `index`, or `None` if there is no such wolf
    #[inline]
    pub fn wolf(&self, index: usize) -> Option<Pos> {
        self.wolves.get(index).copied()
    }

    /// Index of the wolf standing on `pos`
    pub fn wolf_at(&self, pos: Pos) -> Option<usize> {
        self.wolves.iter().position(|&w| w == pos)
    }

    /// Check if a piece stands on `pos`
    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        pos == self.rabbit || self.wolves.contains(&pos)
    }

    /// Mask of all occupied cells
    pub fn occupancy(&self) -> Bitboard {
        std::iter::once(self.rabbit).chain(self.wolves).collect()
    }

    /// Legal destinations for a piece of `side` standing on `pos`.
    ///
    /// One diagonal step per direction, in direction-declaration order,
    /// keeping only in-bounds empty cells. The order is significant: search
    /// breaks ties in favour of the earliest destination.
    pub fn legal_moves(&self, pos: Pos, side: Side) -> Vec<Pos> {
        let occupied = self.occupancy();
        directions(side)
            .iter()
            .filter_map(|&dir| pos.offset(dir))
            .filter(|&to| !occupied.get(to))
            .collect()
    }

    /// Legal destinations for the rabbit
    #[inline]
    pub fn rabbit_moves(&self) -> Vec<Pos> {
        self.legal_moves(self.rabbit, Side::Rabbit)
    }

    /// Move the rabbit. Legality is the caller's responsibility.
    #[inline]
    pub fn apply_rabbit_move(&mut self, to: Pos) {
        self.rabbit = to;
    }

    /// Move wolf `index`. Legality is the caller's responsibility.
    ///
    /// # Panics
    ///
    /// Panics if `index >= WOLF_COUNT`.
    #[inline]
    pub fn apply_wolf_move(&mut self, index: usize, to: Pos) {
        self.wolves[index] = to;
    }

    /// Apply a move and return the record needed to take it back
    pub fn make_move(&mut self, mv: Move) -> Undo {
        match mv {
            Move::Rabbit(to) => {
                let from = self.rabbit;
                self.apply_rabbit_move(to);
                Undo::Rabbit { from }
            }
            Move::Wolf { index, to } => {
                let from = self.wolves[index];
                self.apply_wolf_move(index, to);
                Undo::Wolf { index, from }
            }
        }
    }

    /// Take back a move made with `make_move`
    pub fn unmake_move(&mut self, undo: Undo) {
        match undo {
            Undo::Rabbit { from } => self.rabbit = from,
            Undo::Wolf { index, from } => self.wolves[index] = from,
        }
    }

    /// Rabbit reached row 0
    #[inline]
    pub fn rabbit_has_won(&self) -> bool {
        rules::rabbit_has_won(self)
    }

    /// Rabbit has no legal move
    #[inline]
    pub fn wolves_have_won(&self) -> bool {
        rules::wolves_have_won(self)
    }

    /// Either side has won
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.wolves_have_won() || self.rabbit_has_won()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let pos = Pos::new(row as u8, col as u8);
                let c = if pos == self.rabbit {
                    'R'
                } else if self.wolves.contains(&pos) {
                    'W'
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
