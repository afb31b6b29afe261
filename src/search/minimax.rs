//! Exhaustive minimax without pruning
//!
//! Same move order, tie-break and scoring as [`Searcher`](super::Searcher),
//! but every node is expanded. Exponentially slower; it exists to check
//! that pruning never changes the chosen move or its value.

use crate::board::{Board, Move, Pos, Side, WOLF_COUNT};
use crate::eval::evaluate;

use super::INF;

/// Best rabbit move and root value, searching `depth` plies.
#[must_use]
pub fn minimax(board: &Board, depth: u8) -> (Option<Pos>, i32) {
    let mut work_board = board.clone();
    if depth == 0 || work_board.is_terminal() {
        return (None, evaluate(&work_board));
    }
    rabbit_ply(&mut work_board, depth)
}

fn value(board: &mut Board, depth: u8, to_move: Side) -> i32 {
    if depth == 0 || board.is_terminal() {
        return evaluate(board);
    }
    match to_move {
        Side::Rabbit => rabbit_ply(board, depth).1,
        Side::Wolves => wolf_ply(board, depth),
    }
}

fn rabbit_ply(board: &mut Board, depth: u8) -> (Option<Pos>, i32) {
    let mut best_move = None;
    let mut best_score = -INF;
    for to in board.rabbit_moves() {
        let undo = board.make_move(Move::Rabbit(to));
        let score = value(board, depth - 1, Side::Wolves);
        board.unmake_move(undo);
        if score > best_score {
            best_score = score;
            best_move = Some(to);
        }
    }
    (best_move, best_score)
}

fn wolf_ply(board: &mut Board, depth: u8) -> i32 {
    let mut min_score = INF;
    for index in 0..WOLF_COUNT {
        let from = board.wolves()[index];
        for to in board.legal_moves(from, Side::Wolves) {
            let undo = board.make_move(Move::Wolf { index, to });
            min_score = min_score.min(value(board, depth - 1, Side::Rabbit));
            board.unmake_move(undo);
        }
    }
    min_score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        assert_eq!(minimax(&Board::new(), 1), (Some(Pos::new(6, 2)), -6));
        assert_eq!(minimax(&Board::new(), 3), (Some(Pos::new(6, 2)), -5));
    }

    #[test]
    fn test_depth_zero() {
        assert_eq!(minimax(&Board::new(), 0), (None, -7));
    }
}
