//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), shared by the turn-end
//! logic and the solver.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
