//! Turn controller
//!
//! Sequences the game: the rabbit's turn is played by the engine, the
//! wolves' turn by an externally supplied `(wolf index, destination)`
//! command. After every turn the board is checked for a winner (rabbit
//! first); once a winner exists the game is frozen and every command is
//! rejected.

use log::{debug, info, trace, warn};

use crate::board::{Board, Move, Pos, Side, WOLF_COUNT};
use crate::engine::{Difficulty, MoveResult, RabbitEngine};
use crate::error::GameError;
use crate::rules::check_winner;

/// Turn state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    RabbitTurn,
    WolfTurn,
    RabbitWon,
    WolvesWon,
}

impl Turn {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Turn::RabbitWon | Turn::WolvesWon)
    }

    /// Winning side, for terminal states
    pub fn winner(self) -> Option<Side> {
        match self {
            Turn::RabbitWon => Some(Side::Rabbit),
            Turn::WolvesWon => Some(Side::Wolves),
            Turn::RabbitTurn | Turn::WolfTurn => None,
        }
    }
}

/// One game: board, whose turn it is, and the rabbit's engine.
pub struct Game {
    board: Board,
    turn: Turn,
    engine: RabbitEngine,
    last_rabbit_move: Option<Pos>,
    last_search: Option<MoveResult>,
    move_count: usize,
}

impl Game {
    /// New game from the standard start position. The rabbit moves first.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_board(Board::new(), difficulty)
    }

    /// New game from an arbitrary position, rabbit to move.
    ///
    /// A position that is already decided starts in its terminal state.
    pub fn from_board(board: Board, difficulty: Difficulty) -> Self {
        info!("new game, difficulty {} (depth {})", difficulty, difficulty.depth());
        trace!("start position:\n{}", board);

        let mut game = Self {
            board,
            turn: Turn::RabbitTurn,
            engine: RabbitEngine::new(difficulty),
            last_rabbit_move: None,
            last_search: None,
            move_count: 0,
        };
        game.check_game_over();
        game
    }

    /// New game from piece positions, validating them first.
    pub fn from_positions(
        rabbit: Pos,
        wolves: [Pos; WOLF_COUNT],
        difficulty: Difficulty,
    ) -> Result<Self, GameError> {
        let board = Board::from_positions(rabbit, wolves)?;
        Ok(Self::from_board(board, difficulty))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rabbit(&self) -> Pos {
        self.board.rabbit()
    }

    #[inline]
    pub fn wolves(&self) -> &[Pos; WOLF_COUNT] {
        self.board.wolves()
    }

    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Winner, once the game is over
    #[inline]
    pub fn outcome(&self) -> Option<Side> {
        self.turn.winner()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.turn.is_terminal()
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.engine.difficulty()
    }

    /// Destination of the rabbit's most recent move
    #[inline]
    pub fn last_rabbit_move(&self) -> Option<Pos> {
        self.last_rabbit_move
    }

    /// Statistics of the rabbit's most recent search
    #[inline]
    pub fn last_search(&self) -> Option<&MoveResult> {
        self.last_search.as_ref()
    }

    /// Moves applied so far, both sides
    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Legal destinations for wolf `index`; empty for an unknown index
    pub fn legal_wolf_moves(&self, index: usize) -> Vec<Pos> {
        self.board
            .wolf(index)
            .map(|from| self.board.legal_moves(from, Side::Wolves))
            .unwrap_or_default()
    }

    /// Play the rabbit's turn with the engine.
    ///
    /// Outside `RabbitTurn` this does nothing and returns `None`. Otherwise
    /// the found move (if any) is applied and the turn passes to the wolves
    /// whether or not a move was found; the winner check that follows
    /// catches a trapped rabbit.
    pub fn play_rabbit_turn(&mut self) -> Option<Pos> {
        if self.turn != Turn::RabbitTurn {
            return None;
        }

        let result = self.engine.get_move_with_stats(&self.board);
        let best_move = result.best_move;
        match best_move {
            Some(to) => {
                debug!("{} from {}", Move::Rabbit(to), self.board.rabbit());
                self.board.apply_rabbit_move(to);
                self.move_count += 1;
            }
            None => warn!("rabbit has no move from {}", self.board.rabbit()),
        }
        self.last_rabbit_move = best_move;
        self.last_search = Some(result);

        self.turn = Turn::WolfTurn;
        self.check_game_over();
        best_move
    }

    /// Index of the wolf on `pos`. Pure lookup.
    #[inline]
    pub fn select_wolf(&self, pos: Pos) -> Option<usize> {
        self.board.wolf_at(pos)
    }

    /// Submit a wolf move; `false` if it was rejected.
    pub fn submit_wolf_move(&mut self, index: usize, to: Pos) -> bool {
        match self.try_wolf_move(index, to) {
            Ok(()) => true,
            Err(e) => {
                debug!("wolf move rejected: {}", e);
                false
            }
        }
    }

    /// Submit a wolf move, explaining a rejection. A rejected move changes nothing.
    pub fn try_wolf_move(&mut self, index: usize, to: Pos) -> Result<(), GameError> {
        match self.turn {
            Turn::WolfTurn => {}
            Turn::RabbitTurn => return Err(GameError::NotWolfTurn),
            Turn::RabbitWon | Turn::WolvesWon => return Err(GameError::GameOver),
        }

        let from = self.board.wolf(index).ok_or(GameError::NoSuchWolf(index))?;
        if !self.board.legal_moves(from, Side::Wolves).contains(&to) {
            return Err(GameError::IllegalMove { index, to });
        }

        debug!("{} from {}", Move::Wolf { index, to }, from);
        self.board.apply_wolf_move(index, to);
        self.move_count += 1;

        self.turn = Turn::RabbitTurn;
        self.check_game_over();
        Ok(())
    }

    /// Move to a terminal state if either side has won.
    fn check_game_over(&mut self) {
        trace!("board:\n{}", self.board);
        let Some(winner) = check_winner(&self.board) else {
            return;
        };
        self.turn = match winner {
            Side::Rabbit => Turn::RabbitWon,
            Side::Wolves => Turn::WolvesWon,
        };
        info!("game over after {} moves, winner: {}", self.move_count, winner);
    }
}
