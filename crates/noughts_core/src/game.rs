//! Game state machine for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rules::{check_winner, is_full};
use crate::{Board, Player, Position, Square, StateError};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Status of a board as seen by the turn-end check.
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = check_winner(board) {
            GameStatus::Won(winner)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Tic-tac-toe game engine.
///
/// Moves are accepted only while the status is [`GameStatus::InProgress`];
/// a won or drawn game stays terminal until [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    turn: u32,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            turn: 0,
            history: Vec::new(),
        }
    }

    /// Resumes a game from a board snapshot.
    ///
    /// X moves when both players have the same number of marks, O when X is
    /// one ahead. The history of a resumed game is empty.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnbalancedMarks`] for boards alternating turns
    /// cannot reach.
    #[instrument(fields(state = %board.state_string()))]
    pub fn from_board(board: Board) -> Result<Self, StateError> {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        let to_move = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            return Err(StateError::UnbalancedMarks { x, o });
        };

        let status = GameStatus::of(&board);
        debug!(?to_move, ?status, "Resumed game from snapshot");
        Ok(Self {
            board,
            to_move,
            status,
            turn: (x + o) as u32,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of marks placed so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Positions played since the game started or was resumed.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the mark of the player to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game is won or drawn,
    /// [`MoveError::SquareOccupied`] for a taken square.
    #[instrument(skip(self), fields(player = %self.to_move, turn = self.turn))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        self.turn += 1;
        self.advance_turn();

        Ok(self.status)
    }

    /// Resets to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Turn-end check: a completed line wins, otherwise a full board draws,
    /// otherwise the other player is on turn.
    fn advance_turn(&mut self) {
        self.status = GameStatus::of(&self.board);
        if self.status == GameStatus::InProgress {
            self.to_move = self.to_move.opponent();
        }
        debug!(status = ?self.status, to_move = %self.to_move, "Turn advanced");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
