//! Command-line interface for noughts.

use std::path::PathBuf;

use clap::Parser;
use noughts_core::{Difficulty, Player};

/// Noughts - tic-tac-toe against a negamax opponent
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "noughts")]
#[command(about = "Desktop tic-tac-toe with a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Opponent strength: random or optimal
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Start with the computer opponent enabled
    #[arg(long)]
    pub vs_ai: bool,

    /// Mark the computer plays (X or O)
    #[arg(long)]
    pub ai_player: Option<Player>,

    /// Diagnostics log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Keep diagnostics in memory only
    #[arg(long)]
    pub no_file_log: bool,

    /// Initial board as a nine character state string (0 empty, 1 X, 2 O)
    #[arg(long)]
    pub state: Option<String>,
}
