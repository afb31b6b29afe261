//! Win condition checking
//!
//! Win conditions:
//! 1. Rabbit: stands on row 0
//! 2. Wolves: the rabbit has no legal move

use crate::board::{Board, Side};

/// Rabbit stands on the far edge
#[inline]
pub fn rabbit_has_won(board: &Board) -> bool {
    board.rabbit().row == 0
}

/// Rabbit is trapped: every diagonal neighbour is off the board or occupied
#[inline]
pub fn wolves_have_won(board: &Board) -> bool {
    board.rabbit_moves().is_empty()
}

/// Check for a winner
///
/// The rabbit's win is checked first, so a rabbit standing on row 0 wins
/// even if it also happens to be boxed in.
pub fn check_winner(board: &Board) -> Option<Side> {
    if rabbit_has_won(board) {
        Some(Side::Rabbit)
    } else if wolves_have_won(board) {
        Some(Side::Wolves)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn board(rabbit: (u8, u8), wolves: [(u8, u8); 4]) -> Board {
        Board::from_positions(
            Pos::new(rabbit.0, rabbit.1),
            wolves.map(|(r, c)| Pos::new(r, c)),
        )
        .unwrap()
    }

    #[test]
    fn test_no_winner_at_start() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_rabbit_wins_on_row_zero() {
        let board = board((0, 4), [(3, 1), (3, 3), (3, 5), (3, 7)]);
        assert_eq!(check_winner(&board), Some(Side::Rabbit));
    }

    #[test]
    fn test_rabbit_win_checked_before_trap() {
        // Corner of row 0 with the single neighbour blocked.
        let board = board((0, 0), [(1, 1), (3, 3), (3, 5), (3, 7)]);
        assert!(wolves_have_won(&board));
        assert_eq!(check_winner(&board), Some(Side::Rabbit));
    }

    #[test]
    fn test_wolves_win_when_rabbit_trapped() {
        let board = board((4, 4), [(3, 3), (3, 5), (5, 3), (5, 5)]);
        assert_eq!(check_winner(&board), Some(Side::Wolves));
    }

    #[test]
    fn test_edge_counts_as_wall() {
        // Left edge: two neighbours exist, both taken.
        let trapped = board((4, 0), [(3, 1), (5, 1), (0, 5), (0, 7)]);
        assert_eq!(check_winner(&trapped), Some(Side::Wolves));

        let open = board((4, 0), [(3, 1), (6, 1), (0, 5), (0, 7)]);
        assert_eq!(check_winner(&open), None);
    }
}
