//! Error types
//!
//! Rejected game commands are reported as values, never panics. Nothing
//! here is fatal: a rejected command leaves the game untouched.

use thiserror::Error;

use crate::board::Pos;

/// Invalid piece placement when building a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position {0} is off the board")]
    OutOfBounds(Pos),
    #[error("more than one piece on {0}")]
    Collision(Pos),
}

/// Reason a game command was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game already over")]
    GameOver,
    #[error("not the wolves' turn")]
    NotWolfTurn,
    #[error("no wolf with index {0}")]
    NoSuchWolf(usize),
    #[error("wolf {index} cannot move to {to}")]
    IllegalMove { index: usize, to: Pos },
    #[error("unknown difficulty: {0:?}")]
    UnknownDifficulty(String),
    #[error(transparent)]
    Board(#[from] BoardError),
}
