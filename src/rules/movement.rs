//! Movement directions
//!
//! Row numbers grow downward. Wolves start on row 0 and only move toward
//! higher rows; the rabbit starts on the last row and steps along any
//! diagonal.

use crate::board::Side;

/// Rabbit directions, in the order moves are generated
pub const RABBIT_DIRECTIONS: [(i8, i8); 4] = [
    (-1, -1), // Up-left
    (-1, 1),  // Up-right
    (1, -1),  // Down-left
    (1, 1),   // Down-right
];

/// Wolf directions: forward diagonals only
pub const WOLF_DIRECTIONS: [(i8, i8); 2] = [
    (1, -1), // Down-left
    (1, 1),  // Down-right
];

/// Direction set for a mover
#[inline]
pub fn directions(side: Side) -> &'static [(i8, i8)] {
    match side {
        Side::Rabbit => &RABBIT_DIRECTIONS,
        Side::Wolves => &WOLF_DIRECTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wolves_never_retreat() {
        assert!(directions(Side::Wolves).iter().all(|&(dr, _)| dr == 1));
    }

    #[test]
    fn test_rabbit_has_all_diagonals() {
        let dirs = directions(Side::Rabbit);
        assert_eq!(dirs.len(), 4);
        assert!(dirs.iter().all(|&(dr, dc)| dr.abs() == 1 && dc.abs() == 1));
        // Upward moves come first.
        assert_eq!(dirs[0], (-1, -1));
    }
}
