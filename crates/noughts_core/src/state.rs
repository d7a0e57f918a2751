//! Board state strings.
//!
//! A board is serialized as nine characters, row-major, where `'0'` is an
//! empty square, `'1'` is a mark by [`Player::X`] and `'2'` a mark by
//! [`Player::O`]. This is the only persisted form of a game.

use std::str::FromStr;

use derive_more::{Display, Error};
use tracing::instrument;

use crate::{Board, Player, Position, Square};

/// State string of an empty board.
pub const INITIAL_STATE: &str = "000000000";

/// Error parsing or resuming from a board state string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum StateError {
    /// The string does not have exactly nine characters.
    #[display("State string must have 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A character other than `'0'`, `'1'` or `'2'`.
    #[display("Invalid cell {:?} at index {}", found, index)]
    InvalidCell {
        /// Index of the offending cell.
        index: usize,
        /// The character found there.
        found: char,
    },

    /// Mark counts that alternating turns cannot produce.
    #[display("Unreachable board: X has {} marks, O has {}", x, o)]
    UnbalancedMarks {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}

impl Square {
    /// Returns the state string character for this square.
    pub fn to_digit(self) -> char {
        match self {
            Square::Empty => '0',
            Square::Occupied(Player::X) => '1',
            Square::Occupied(Player::O) => '2',
        }
    }

    /// Parses a state string character.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Square::Empty),
            '1' => Some(Square::Occupied(Player::X)),
            '2' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

impl Board {
    /// Serializes the board as a nine character state string.
    pub fn state_string(&self) -> String {
        self.squares().iter().map(|s| s.to_digit()).collect()
    }

    /// Parses a nine character state string.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::WrongLength`] or [`StateError::InvalidCell`] for
    /// strings outside the `[012]{9}` format. Reachability is not checked
    /// here; see [`Game::from_board`](crate::Game::from_board).
    #[instrument]
    pub fn parse_state(s: &str) -> Result<Self, StateError> {
        let len = s.chars().count();
        if len != Position::ALL.len() {
            return Err(StateError::WrongLength(len));
        }

        let mut board = Board::new();
        for (pos, (index, c)) in Position::ALL.into_iter().zip(s.chars().enumerate()) {
            let square =
                Square::from_digit(c).ok_or(StateError::InvalidCell { index, found: c })?;
            board.set(pos, square);
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse_state(s)
    }
}
