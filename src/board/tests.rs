use super::*;
use crate::error::BoardError;

fn board(rabbit: (u8, u8), wolves: [(u8, u8); WOLF_COUNT]) -> Board {
    Board::from_positions(
        Pos::new(rabbit.0, rabbit.1),
        wolves.map(|(r, c)| Pos::new(r, c)),
    )
    .unwrap()
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 3);
    assert_eq!(pos.to_index(), 59);
    assert_eq!(Pos::from_index(59), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 8));
    assert!(!Pos { row: 8, col: 0 }.in_bounds());
}

#[test]
fn test_pos_offset_edges() {
    assert_eq!(Pos::new(0, 0).offset((-1, -1)), None);
    assert_eq!(Pos::new(0, 0).offset((1, 1)), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(7, 7).offset((1, -1)), None);
}

#[test]
fn test_initial_layout() {
    let board = Board::new();
    assert_eq!(board.rabbit(), Pos::new(7, 3));
    assert_eq!(
        board.wolves(),
        &[Pos::new(0, 1), Pos::new(0, 3), Pos::new(0, 5), Pos::new(0, 7)]
    );
    assert_eq!(board.occupancy().count(), 5);
}

#[test]
fn test_initial_rabbit_moves() {
    // Only the two upward diagonals stay on the board.
    let board = Board::new();
    assert_eq!(board.rabbit_moves(), vec![Pos::new(6, 2), Pos::new(6, 4)]);
}

#[test]
fn test_rabbit_moves_declaration_order() {
    let board = board((4, 4), [(0, 1), (0, 3), (0, 5), (0, 7)]);
    assert_eq!(
        board.rabbit_moves(),
        vec![Pos::new(3, 3), Pos::new(3, 5), Pos::new(5, 3), Pos::new(5, 5)]
    );
}

#[test]
fn test_wolf_moves_forward_only() {
    let board = Board::new();
    assert_eq!(
        board.legal_moves(Pos::new(0, 1), Side::Wolves),
        vec![Pos::new(1, 0), Pos::new(1, 2)]
    );
    assert_eq!(
        board.legal_moves(Pos::new(0, 7), Side::Wolves),
        vec![Pos::new(1, 6)]
    );
}

#[test]
fn test_wolf_on_last_row_cannot_move() {
    let board = board((3, 3), [(7, 0), (0, 3), (0, 5), (0, 7)]);
    assert!(board.legal_moves(Pos::new(7, 0), Side::Wolves).is_empty());
}

#[test]
fn test_moves_skip_occupied() {
    let board = board((4, 4), [(3, 3), (5, 5), (0, 5), (0, 7)]);
    assert_eq!(board.rabbit_moves(), vec![Pos::new(3, 5), Pos::new(5, 3)]);
    // Wolf at (3,3) is blocked on (4,4) by the rabbit.
    assert_eq!(
        board.legal_moves(Pos::new(3, 3), Side::Wolves),
        vec![Pos::new(4, 2)]
    );
}

#[test]
fn test_is_occupied_and_wolf_at() {
    let board = Board::new();
    assert!(board.is_occupied(Pos::new(7, 3)));
    assert!(board.is_occupied(Pos::new(0, 5)));
    assert!(!board.is_occupied(Pos::new(0, 0)));
    assert_eq!(board.wolf_at(Pos::new(0, 5)), Some(2));
    assert_eq!(board.wolf_at(Pos::new(7, 3)), None);
    assert_eq!(board.wolf(3), Some(Pos::new(0, 7)));
    assert_eq!(board.wolf(4), None);
}

#[test]
fn test_from_positions_rejects_collision() {
    let result = Board::from_positions(
        Pos::new(0, 1),
        [Pos::new(0, 1), Pos::new(0, 3), Pos::new(0, 5), Pos::new(0, 7)],
    );
    assert_eq!(result, Err(BoardError::Collision(Pos::new(0, 1))));

    let result = Board::from_positions(
        Pos::new(7, 4),
        [Pos::new(0, 1), Pos::new(0, 3), Pos::new(0, 3), Pos::new(0, 7)],
    );
    assert_eq!(result, Err(BoardError::Collision(Pos::new(0, 3))));
}

#[test]
fn test_from_positions_rejects_out_of_bounds() {
    let off = Pos { row: 8, col: 2 };
    let result = Board::from_positions(
        Pos::new(7, 4),
        [off, Pos::new(0, 3), Pos::new(0, 5), Pos::new(0, 7)],
    );
    assert_eq!(result, Err(BoardError::OutOfBounds(off)));
}

#[test]
fn test_apply_moves_overwrite() {
    let mut board = Board::new();
    board.apply_rabbit_move(Pos::new(6, 2));
    board.apply_wolf_move(1, Pos::new(1, 4));
    assert_eq!(board.rabbit(), Pos::new(6, 2));
    assert_eq!(board.wolf(1), Some(Pos::new(1, 4)));
}

#[test]
fn test_make_unmake_restores() {
    let original = Board::new();
    let mut board = original.clone();

    let undo_rabbit = board.make_move(Move::Rabbit(Pos::new(6, 4)));
    let undo_wolf = board.make_move(Move::Wolf { index: 0, to: Pos::new(1, 0) });
    assert_ne!(board, original);

    board.unmake_move(undo_wolf);
    board.unmake_move(undo_rabbit);
    assert_eq!(board, original);
}

#[test]
fn test_rabbit_has_won_on_row_zero() {
    let board = board((0, 2), [(2, 1), (2, 3), (2, 5), (2, 7)]);
    assert!(board.rabbit_has_won());
    assert!(board.is_terminal());
    assert!(!Board::new().rabbit_has_won());
}

#[test]
fn test_wolves_have_won_when_surrounded() {
    let board = board((4, 4), [(3, 3), (3, 5), (5, 3), (5, 5)]);
    assert!(board.wolves_have_won());
    assert!(board.rabbit_moves().is_empty());
}

#[test]
fn test_wolves_have_won_in_corner() {
    // Bottom corner: a single wolf covers the only diagonal.
    let board = board((7, 0), [(6, 1), (0, 3), (0, 5), (0, 7)]);
    assert!(board.wolves_have_won());
}

#[test]
fn test_display_grid() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), ROWS);
    assert_eq!(lines[0], ".W.W.W.W");
    assert_eq!(lines[7], "...R....");
}

#[test]
fn test_move_display() {
    assert_eq!(Move::Rabbit(Pos::new(6, 2)).to_string(), "rabbit -> (6, 2)");
    assert_eq!(Move::Wolf { index: 3, to: Pos::new(1, 6) }.to_string(), "wolf 3 -> (1, 6)");
}
