//! Pure tic-tac-toe game logic.
//!
//! - [`Board`], [`Square`], [`Player`], [`Position`]: the 3x3 model
//! - [`rules`]: win and draw detection over the eight triples
//! - [`Game`]: the `InProgress -> Won | Draw` state machine
//! - [`Solver`]: the computer opponent, random or negamax
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, Difficulty, Player, Position, Solver};
//!
//! let board: Board = "110020000".parse().unwrap();
//! let mut solver = Solver::with_seed(7);
//! let pick = solver.choose_move(&board, Player::X, Difficulty::Optimal);
//! assert_eq!(pick, Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod solver;
mod state;
mod types;

pub use game::{Game, GameStatus, MoveError};
pub use position::Position;
pub use solver::{Difficulty, SearchResult, Solver};
pub use state::{INITIAL_STATE, StateError};
pub use types::{Board, Player, Square};
