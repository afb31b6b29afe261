//! GUI module for the Rabbit and Wolves game
//!
//! This module provides a native Rust GUI using egui/eframe. It talks to
//! the game only through [`Game`](crate::Game)'s queries and commands.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::RabbitWolvesApp;
pub use game_state::GameState;
