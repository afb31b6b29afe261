//! Game rules for Rabbit and Wolves
//!
//! This module implements the rule set:
//! - Movement (diagonal steps; wolves may not retreat)
//! - Win conditions (rabbit reaches row 0, or the rabbit is trapped)

pub mod movement;
pub mod win;

// Re-exports for convenient access
pub use movement::{directions, RABBIT_DIRECTIONS, WOLF_DIRECTIONS};
pub use win::{check_winner, rabbit_has_won, wolves_have_won};
