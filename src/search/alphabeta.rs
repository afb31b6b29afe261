//! Alpha-Beta search for the rabbit
//!
//! The rabbit is the maximizing player and the score is `-(rabbit row)`.
//! The wolves are folded into a single minimizing ply: every legal move of
//! every wolf is tried and the worst outcome for the rabbit is kept, so the
//! search never commits to which wolf will move next.
//!
//! # Move order and ties
//!
//! Moves are tried in direction-declaration order (wolves in index order).
//! At a rabbit ply a later move replaces the best only on a strictly higher
//! score, so ties go to the earliest move. This makes the search fully
//! deterministic.
//!
//! # Pruning
//!
//! A cutoff at a rabbit ply stops the ply. A cutoff at a wolf ply only
//! skips the remaining moves of the wolf being expanded; the other wolves
//! are still searched. The final value is unaffected, only node counts.
//!
//! # Example
//!
//! ```
//! use rabbit_wolves::board::{Board, Pos};
//! use rabbit_wolves::search::Searcher;
//!
//! let mut searcher = Searcher::new(1);
//! let result = searcher.search(&Board::new());
//! assert_eq!(result.best_move, Some(Pos::new(6, 2)));
//! assert_eq!(result.score, -6);
//! ```

use crate::board::{Board, Move, Pos, Side, WOLF_COUNT};
use crate::eval::evaluate;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = i32::MAX / 2;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cutoffs at rabbit plies (remaining rabbit moves skipped)
    pub rabbit_cutoffs: u64,
    /// Cutoffs at wolf plies (remaining moves of one wolf skipped)
    pub wolf_cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best rabbit destination, `None` when the root is already decided
    pub best_move: Option<Pos>,
    /// Minimax value of the root position
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Fixed-depth alpha-beta searcher.
pub struct Searcher {
    depth: u8,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher looking `depth` plies ahead.
    #[must_use]
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Find the rabbit's best move.
    ///
    /// The search runs on a private copy of `board`, mutating and restoring
    /// it move by move; the caller's board is never touched.
    #[must_use]
    pub fn search(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut work_board = board.clone();
        let (best_move, score) = self.search_root(&mut work_board);
        debug_assert_eq!(&work_board, board, "search must restore every move");

        SearchResult {
            best_move,
            score,
            depth: self.depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Root node: same as a rabbit ply, but the move is returned with the score.
    fn search_root(&mut self, board: &mut Board) -> (Option<Pos>, i32) {
        self.nodes += 1;
        if self.depth == 0 || board.is_terminal() {
            return (None, evaluate(board));
        }
        self.rabbit_ply(board, self.depth, -INF, INF)
    }

    fn alpha_beta(&mut self, board: &mut Board, depth: u8, alpha: i32, beta: i32, to_move: Side) -> i32 {
        self.nodes += 1;
        if depth == 0 || board.is_terminal() {
            return evaluate(board);
        }
        match to_move {
            Side::Rabbit => self.rabbit_ply(board, depth, alpha, beta).1,
            Side::Wolves => self.wolf_ply(board, depth, alpha, beta),
        }
    }

    /// Maximizing ply. Returns the first destination reaching the best score.
    fn rabbit_ply(&mut self, board: &mut Board, depth: u8, mut alpha: i32, beta: i32) -> (Option<Pos>, i32) {
        let mut best_move = None;
        let mut best_score = -INF;

        for to in board.rabbit_moves() {
            let undo = board.make_move(Move::Rabbit(to));
            let score = self.alpha_beta(board, depth - 1, alpha, beta, Side::Wolves);
            board.unmake_move(undo);

            if score > best_score {
                best_score = score;
                best_move = Some(to);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                self.stats.rabbit_cutoffs += 1;
                break;
            }
        }

        (best_move, best_score)
    }

    /// Minimizing ply over all wolves. Returns `INF` if no wolf can move.
    fn wolf_ply(&mut self, board: &mut Board, depth: u8, alpha: i32, mut beta: i32) -> i32 {
        let mut min_score = INF;

        for index in 0..WOLF_COUNT {
            let from = board.wolves()[index];
            for to in board.legal_moves(from, Side::Wolves) {
                let undo = board.make_move(Move::Wolf { index, to });
                let score = self.alpha_beta(board, depth - 1, alpha, beta, Side::Rabbit);
                board.unmake_move(undo);

                min_score = min_score.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    // Only this wolf's remaining moves are skipped.
                    self.stats.wolf_cutoffs += 1;
                    break;
                }
            }
        }

        min_score
    }
}
