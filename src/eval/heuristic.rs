//! Static evaluation function for the minimax search

use crate::board::Board;

/// Evaluate the board from the rabbit's perspective.
///
/// Returns the negated rabbit row: 0 on the goal row, `-(ROWS - 1)` on the
/// start row. Larger is better for the rabbit. Terminal positions are not
/// scored specially.
#[must_use]
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    -(board.rabbit().row as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, ROWS};

    #[test]
    fn test_start_position() {
        assert_eq!(evaluate(&Board::new()), -((ROWS - 1) as i32));
    }

    #[test]
    fn test_negated_row() {
        let mut board = Board::new();
        for row in 0..ROWS as u8 {
            board.apply_rabbit_move(Pos::new(row, 3));
            assert_eq!(evaluate(&board), -(row as i32));
        }
    }

    #[test]
    fn test_ignores_trap() {
        let board = Board::from_positions(
            Pos::new(4, 4),
            [Pos::new(3, 3), Pos::new(3, 5), Pos::new(5, 3), Pos::new(5, 5)],
        )
        .unwrap();
        assert!(board.wolves_have_won());
        assert_eq!(evaluate(&board), -4);
    }
}
