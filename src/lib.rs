//! Rabbit and Wolves game engine
//!
//! An asymmetric board game on an 8x8 grid:
//! - One rabbit starts bottom-center and moves one step along any diagonal
//! - Four wolves start on row 0 and move one step diagonally forward only
//! - The rabbit wins by reaching row 0
//! - The wolves win when the rabbit has no legal move
//!
//! The rabbit is played by a minimax search with alpha-beta pruning; the
//! wolves are played by a human.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Pieces, positions and legal move generation
//! - [`rules`]: Movement directions and win conditions
//! - [`eval`]: Static evaluation
//! - [`search`]: Alpha-beta search and an exhaustive reference minimax
//! - [`engine`]: Difficulty levels and the rabbit AI
//! - [`game`]: Turn controller
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use rabbit_wolves::{Difficulty, Game, Pos, Turn};
//!
//! let mut game = Game::new(Difficulty::Easy);
//!
//! // The rabbit moves first
//! assert_eq!(game.play_rabbit_turn(), Some(Pos::new(6, 2)));
//! assert_eq!(game.turn(), Turn::WolfTurn);
//!
//! // Then one wolf, chosen by the player
//! let wolf = game.select_wolf(Pos::new(0, 1)).unwrap();
//! assert!(game.submit_wolf_move(wolf, Pos::new(1, 2)));
//! assert_eq!(game.turn(), Turn::RabbitTurn);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Side, COLS, ROWS, WOLF_COUNT};
pub use engine::{Difficulty, MoveResult, RabbitEngine};
pub use error::{BoardError, GameError};
pub use game::{Game, Turn};
