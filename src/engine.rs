//! Rabbit AI engine
//!
//! Wraps the alpha-beta [`Searcher`] at the depth picked by a
//! [`Difficulty`], and reports timing and node counts for each move.
//!
//! # Example
//!
//! ```
//! use rabbit_wolves::{Board, Difficulty, RabbitEngine};
//!
//! let mut engine = RabbitEngine::new(Difficulty::Hard);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;

use crate::board::{Board, Pos};
use crate::error::GameError;
use crate::search::{SearchResult, SearchStats, Searcher};

/// Difficulty chosen at game start.
///
/// Maps 1:1 to the rabbit's search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Search depth in plies
    #[inline]
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    /// Accepts a name (any case) or the menu number `1`-`3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Rabbit destination, if the rabbit has a move
    pub best_move: Option<Pos>,
    /// Minimax value of the position
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Pruning counters
    pub stats: SearchStats,
}

impl MoveResult {
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
            stats: result.stats,
        }
    }
}

/// AI for the rabbit side. Its depth is fixed for the engine's lifetime.
pub struct RabbitEngine {
    searcher: Searcher,
    difficulty: Difficulty,
}

impl RabbitEngine {
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            searcher: Searcher::new(difficulty.depth()),
            difficulty,
        }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` when the rabbit has no move or the game is decided.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with detailed search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            "search depth={} move={:?} score={} nodes={} cutoffs={}/{} time={}ms",
            result.depth,
            result.best_move,
            result.score,
            result.nodes,
            result.stats.rabbit_cutoffs,
            result.stats.wolf_cutoffs,
            time_ms
        );

        MoveResult::from_search(result, time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.depth(), 1);
        assert_eq!(Difficulty::Medium.depth(), 2);
        assert_eq!(Difficulty::Hard.depth(), 3);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("3".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "impossible".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty("impossible".to_string()))
        );
    }

    #[test]
    fn test_difficulty_display_roundtrip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn test_engine_uses_difficulty_depth() {
        let mut easy = RabbitEngine::new(Difficulty::Easy);
        let mut hard = RabbitEngine::new(Difficulty::Hard);
        let board = Board::new();

        let easy_result = easy.get_move_with_stats(&board);
        let hard_result = hard.get_move_with_stats(&board);
        assert_eq!(easy_result.score, -6);
        assert_eq!(hard_result.score, -5);
        assert!(hard_result.nodes > easy_result.nodes);
    }

    #[test]
    fn test_get_move_is_deterministic() {
        let mut engine = RabbitEngine::new(Difficulty::Medium);
        let board = Board::new();
        let first = engine.get_move(&board);
        for _ in 0..5 {
            assert_eq!(engine.get_move(&board), first);
        }
        assert_eq!(first, Some(Pos::new(6, 2)));
    }
}
