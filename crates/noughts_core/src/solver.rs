//! The computer opponent.
//!
//! [`Difficulty::Random`] picks a uniformly random empty square.
//! [`Difficulty::Optimal`] runs a full negamax search over the remaining
//! game tree (at most nine plies), scoring wins `+10`, losses `-10` and draws
//! `0` from the point of view of the player to move.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rules::{check_winner, is_full};
use crate::{Board, GameStatus, Player, Position, Square};

/// Score of a position the player to move has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Move selection strategy of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal move.
    Random,
    /// Negamax search; never loses.
    #[default]
    Optimal,
}

impl Difficulty {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Random => "Random",
            Difficulty::Optimal => "Optimal",
        }
    }
}

/// A candidate move and its negamax score for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// The move.
    pub position: Position,
    /// `+10` forced win, `0` draw, `-10` forced loss.
    pub score: i32,
}

/// Chooses moves for the player on turn.
///
/// The solver never touches the caller's board; searches run on a private
/// copy. The only state it keeps between calls is the random generator,
/// seeded once at construction.
#[derive(Debug, Clone)]
pub struct Solver {
    rng: StdRng,
}

impl Solver {
    /// Creates a solver seeded from OS entropy.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a solver with a fixed seed, for reproducible random play.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Chooses a move for `player` under the given difficulty.
    ///
    /// Returns `None` when the board is already won or full.
    #[instrument(skip(self, board), fields(state = %board.state_string()))]
    pub fn choose_move(
        &mut self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> Option<Position> {
        if GameStatus::of(board).is_over() {
            debug!("Board is decided, no move to choose");
            return None;
        }

        let choice = match difficulty {
            Difficulty::Random => self.random_move(board),
            Difficulty::Optimal => Self::best_move(board, player).map(|r| r.position),
        };
        debug!(?choice, "Solver chose move");
        choice
    }

    /// Picks one of the empty squares uniformly at random.
    pub fn random_move(&mut self, board: &Board) -> Option<Position> {
        board.empty_positions().choose(&mut self.rng).copied()
    }

    /// Runs the negamax search and returns the best move with its score.
    ///
    /// Ties go to the first move in scan order.
    #[instrument(skip(board), fields(state = %board.state_string()))]
    pub fn best_move(board: &Board, player: Player) -> Option<SearchResult> {
        let mut best: Option<SearchResult> = None;
        for candidate in Self::evaluate_moves(board, player) {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        debug!(?best, "Search complete");
        best
    }

    /// Scores every legal move for `player`, in scan order.
    ///
    /// Empty when the board is already decided.
    pub fn evaluate_moves(board: &Board, player: Player) -> Vec<SearchResult> {
        if GameStatus::of(board).is_over() {
            return Vec::new();
        }

        let mut scratch = *board;
        let mut results = Vec::with_capacity(9);
        for position in Position::ALL {
            if !scratch.is_empty(position) {
                continue;
            }
            scratch.set(position, Square::Occupied(player));
            let score = -negamax(&mut scratch, player.opponent());
            scratch.clear(position);
            results.push(SearchResult { position, score });
        }
        results
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

/// Value of `board` for `player`, who is about to move.
///
/// Every placement is undone before returning, so `board` leaves in the
/// state it arrived in.
fn negamax(board: &mut Board, player: Player) -> i32 {
    if let Some(winner) = check_winner(board) {
        return if winner == player { WIN_SCORE } else { -WIN_SCORE };
    }
    if is_full(board) {
        return DRAW_SCORE;
    }

    let mut best = -WIN_SCORE;
    for position in Position::ALL {
        if !board.is_empty(position) {
            continue;
        }
        board.set(position, Square::Occupied(player));
        let score = -negamax(board, player.opponent());
        board.clear(position);
        best = best.max(score);
    }
    best
}
