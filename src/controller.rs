//! Turn controller. Applies moves, runs the computer opponent and reports
//! game events.

use derive_more::{Display, Error, From};
use noughts_core::{
    Board, Difficulty, Game, GameStatus, MoveError, Player, Position, Solver, StateError,
};
use tracing::{debug, info, instrument};

use crate::{AiSettings, Diagnostics};

/// Error returned when a move or a state string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum TurnError {
    /// A human tried to move while the computer is on turn.
    #[display("It's the computer's turn ({})", _0)]
    AiTurn(#[error(not(source))] Player),

    /// The game rejected the move.
    #[from]
    #[display("{}", _0)]
    Move(MoveError),

    /// The state string could not be loaded.
    #[from]
    #[display("{}", _0)]
    State(StateError),
}

/// Owns the game for the UI and decides who moves next.
///
/// Call [`TurnController::update`] once per frame; it plays the computer's
/// move when the opponent is enabled and on turn.
#[derive(Debug)]
pub struct TurnController {
    game: Game,
    solver: Solver,
    settings: AiSettings,
    diagnostics: Diagnostics,
    last_ai_turn: Option<u32>,
    reported: GameStatus,
}

impl TurnController {
    /// Creates a controller with a fresh game.
    #[instrument(skip(solver, diagnostics))]
    pub fn new(settings: AiSettings, solver: Solver, diagnostics: Diagnostics) -> Self {
        info!("Creating TurnController");
        diagnostics.info("Tic-Tac-Toe game started");
        Self {
            game: Game::new(),
            solver,
            settings,
            diagnostics,
            last_ai_turn: None,
            reported: GameStatus::InProgress,
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.game.to_move()
    }

    /// Returns the opponent settings.
    pub fn settings(&self) -> &AiSettings {
        &self.settings
    }

    /// Returns the diagnostics handle.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Returns true when the computer should make the next move.
    pub fn is_ai_turn(&self) -> bool {
        !self.status().is_over() && self.settings.controls(self.to_move())
    }

    /// Places the mark of the player to move on behalf of a human.
    ///
    /// # Errors
    ///
    /// [`TurnError::AiTurn`] while the computer is on turn, or
    /// [`TurnError::Move`] for an occupied square or a finished game.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, pos: Position) -> Result<GameStatus, TurnError> {
        if self.is_ai_turn() {
            return Err(TurnError::AiTurn(self.to_move()));
        }

        let player = self.to_move();
        self.game.make_move(pos)?;
        self.diagnostics
            .game_event(format!("Player {} placed a mark at {}", player, pos));
        Ok(self.advance_turn())
    }

    /// Plays the computer's move if it is on turn and has not moved yet.
    ///
    /// Returns the position played, if any.
    #[instrument(skip(self))]
    pub fn update(&mut self) -> Option<Position> {
        if !self.is_ai_turn() {
            return None;
        }

        let turn = self.game.turn();
        if self.last_ai_turn == Some(turn) {
            return None;
        }
        self.last_ai_turn = Some(turn);

        let player = self.to_move();
        let pos = self
            .solver
            .choose_move(self.game.board(), player, self.settings.difficulty)?;

        if let Err(e) = self.game.make_move(pos) {
            self.diagnostics
                .error(format!("AI move at {} was rejected: {}", pos, e));
            return None;
        }

        debug!(%pos, difficulty = %self.settings.difficulty, "AI moved");
        self.diagnostics.game_event("AI made a move");
        self.diagnostics
            .debug(format!("AI ({}) played {}", self.settings.difficulty.label(), pos));
        self.advance_turn();
        Some(pos)
    }

    /// End-of-turn check: reports a new winner or draw once.
    ///
    /// Returns the current status.
    pub fn advance_turn(&mut self) -> GameStatus {
        let status = self.status();
        if status != self.reported {
            match status {
                GameStatus::Won(winner) => {
                    self.diagnostics
                        .game_event(format!("Winner: Player {}", winner));
                }
                GameStatus::Draw => self.diagnostics.game_event("Game ended in a draw"),
                GameStatus::InProgress => {}
            }
            self.reported = status;
        }
        status
    }

    /// Switches the computer opponent on or off.
    #[instrument(skip(self))]
    pub fn set_ai_enabled(&mut self, enabled: bool) {
        if self.settings.enabled == enabled {
            return;
        }
        self.settings.enabled = enabled;
        self.last_ai_turn = None;
        self.diagnostics.info(self.settings.describe());
    }

    /// Chooses which mark the computer plays.
    #[instrument(skip(self))]
    pub fn set_ai_player(&mut self, player: Player) {
        if self.settings.player == player {
            return;
        }
        self.settings.player = player;
        self.last_ai_turn = None;
        self.diagnostics
            .info(format!("AI will play as {}", player));
    }

    /// Chooses between random and optimal play.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if self.settings.difficulty == difficulty {
            return;
        }
        self.settings.difficulty = difficulty;
        self.diagnostics
            .info(format!("AI difficulty set to {}", difficulty.label()));
    }

    /// Starts a new game on an empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.last_ai_turn = None;
        self.reported = GameStatus::InProgress;
        self.diagnostics.info("Game reset");
    }

    /// The board as a nine character state string.
    pub fn state_string(&self) -> String {
        self.board().state_string()
    }

    /// Replaces the game with one resumed from a state string.
    ///
    /// The current game is kept if the string is rejected.
    ///
    /// # Errors
    ///
    /// [`TurnError::State`] for malformed strings and unreachable boards.
    #[instrument(skip(self))]
    pub fn load_state(&mut self, state: &str) -> Result<(), TurnError> {
        let board = Board::parse_state(state)?;
        self.game = Game::from_board(board)?;
        self.last_ai_turn = None;
        self.reported = GameStatus::InProgress;
        self.diagnostics
            .info(format!("Loaded board state {}", state));
        self.advance_turn();
        Ok(())
    }
}
