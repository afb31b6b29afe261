//! Occupancy bitboard for the 8x8 grid

use super::Pos;

/// One bit per cell; the whole 64-cell board fits in a single u64
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }
}

impl FromIterator<Pos> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        let mut board = Bitboard::new();
        for pos in iter {
            board.set(pos);
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut bb = Bitboard::new();
        assert_eq!(bb.count(), 0);

        bb.set(Pos::new(7, 3));
        assert!(bb.get(Pos::new(7, 3)));
        assert!(!bb.get(Pos::new(3, 7)));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_corner_bits() {
        let mut bb = Bitboard::new();
        bb.set(Pos::new(0, 0));
        bb.set(Pos::new(7, 7));
        assert!(bb.get(Pos::new(0, 0)));
        assert!(bb.get(Pos::new(7, 7)));
        assert!(!bb.get(Pos::new(0, 7)));
        assert!(!bb.get(Pos::new(7, 0)));
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn test_set_twice_counts_once() {
        let bb: Bitboard = [Pos::new(2, 2), Pos::new(2, 2), Pos::new(4, 4)]
            .into_iter()
            .collect();
        assert_eq!(bb.count(), 2);
    }
}
