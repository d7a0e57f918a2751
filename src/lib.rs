//! Noughts - desktop tic-tac-toe against a computer opponent.
//!
//! # Architecture
//!
//! - **Game logic**: [`noughts_core`] (board, rules, negamax solver)
//! - **Controller**: [`TurnController`] applies moves and runs the opponent
//! - **Diagnostics**: [`Diagnostics`] collects events for the log console
//! - **GUI**: [`gui`] renders everything with egui
//!
//! # Example
//!
//! ```
//! use noughts::{AiSettings, Diagnostics, TurnController};
//! use noughts_core::{GameStatus, Position, Solver};
//!
//! let diagnostics = Diagnostics::default();
//! let mut controller =
//!     TurnController::new(AiSettings::new(), Solver::with_seed(1), diagnostics.clone());
//! controller.place_mark(Position::Center).unwrap();
//! assert_eq!(controller.status(), GameStatus::InProgress);
//! assert_eq!(controller.state_string(), "000010000");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod controller;
mod diagnostics;
pub mod gui;
mod settings;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Turn control
pub use controller::{TurnController, TurnError};
pub use settings::AiSettings;

// Crate-level exports - Diagnostics
pub use diagnostics::{DEFAULT_MAX_ENTRIES, Diagnostics, DiagnosticsError, LogEntry, LogLevel};
