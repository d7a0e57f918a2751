//! Egui front end: the board, the settings panel and the log console.

mod app;
mod board_view;
mod log_console;
mod settings_panel;

pub use app::{NoughtsApp, STATE_KEY};
pub use board_view::BoardView;
pub use log_console::{LogConsole, level_color};
pub use settings_panel::SettingsPanel;
