//! Game state management for the Rabbit and Wolves GUI
//!
//! Adds the two-click wolf interaction on top of [`Game`]: the first click
//! picks a wolf, the second submits its destination.

use log::debug;

use crate::{Difficulty, Game, Pos, Turn};

/// GUI-side state of one game
pub struct GameState {
    pub game: Game,
    /// Wolf picked by the first click
    pub selected_wolf: Option<usize>,
    /// Feedback for the last rejected click
    pub message: Option<String>,
}

impl GameState {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            game: Game::new(difficulty),
            selected_wolf: None,
            message: None,
        }
    }

    /// Check if the player may click
    pub fn is_wolf_turn(&self) -> bool {
        self.game.turn() == Turn::WolfTurn
    }

    /// Destinations of the selected wolf, for highlighting
    pub fn highlighted_moves(&self) -> Vec<Pos> {
        self.selected_wolf
            .map(|index| self.game.legal_wolf_moves(index))
            .unwrap_or_default()
    }

    /// Let the engine move if it is the rabbit's turn.
    pub fn step_rabbit(&mut self) {
        if self.game.turn() == Turn::RabbitTurn {
            self.game.play_rabbit_turn();
        }
    }

    /// Handle a click on a board cell.
    ///
    /// Clicking a wolf (re)selects it. Otherwise, with a wolf selected, the
    /// cell is submitted as its destination; a rejected move keeps the
    /// selection and leaves a message.
    pub fn handle_click(&mut self, pos: Pos) {
        if !self.is_wolf_turn() {
            return;
        }

        if let Some(index) = self.game.select_wolf(pos) {
            debug!("selected wolf {} at {}", index, pos);
            self.selected_wolf = Some(index);
            self.message = None;
            return;
        }

        let Some(index) = self.selected_wolf else {
            return;
        };

        match self.game.try_wolf_move(index, pos) {
            Ok(()) => {
                self.selected_wolf = None;
                self.message = None;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after_rabbit_move() -> GameState {
        let mut state = GameState::new(Difficulty::Easy);
        state.step_rabbit();
        assert!(state.is_wolf_turn());
        state
    }

    #[test]
    fn test_click_empty_cell_without_selection() {
        let mut state = after_rabbit_move();
        state.handle_click(Pos::new(3, 3));
        assert_eq!(state.selected_wolf, None);
        assert!(state.message.is_none());
    }

    #[test]
    fn test_select_then_move() {
        let mut state = after_rabbit_move();
        state.handle_click(Pos::new(0, 3));
        assert_eq!(state.selected_wolf, Some(1));
        assert_eq!(state.highlighted_moves(), vec![Pos::new(1, 2), Pos::new(1, 4)]);

        state.handle_click(Pos::new(1, 4));
        assert_eq!(state.selected_wolf, None);
        assert_eq!(state.game.wolves()[1], Pos::new(1, 4));
        assert_eq!(state.game.turn(), Turn::RabbitTurn);
    }

    #[test]
    fn test_reselect_other_wolf() {
        let mut state = after_rabbit_move();
        state.handle_click(Pos::new(0, 1));
        state.handle_click(Pos::new(0, 5));
        assert_eq!(state.selected_wolf, Some(2));
    }

    #[test]
    fn test_illegal_target_keeps_selection() {
        let mut state = after_rabbit_move();
        state.handle_click(Pos::new(0, 1));
        state.handle_click(Pos::new(4, 4));
        assert_eq!(state.selected_wolf, Some(0));
        assert!(state.message.is_some());
        assert!(state.is_wolf_turn());
    }

    #[test]
    fn test_clicks_ignored_on_rabbit_turn() {
        let mut state = GameState::new(Difficulty::Easy);
        state.handle_click(Pos::new(0, 1));
        assert_eq!(state.selected_wolf, None);
    }
}
