//! Opponent settings: which mark the computer plays and how well.

use noughts_core::{Difficulty, Player};
use tracing::instrument;

/// User-configurable settings for the computer opponent.
///
/// Defaults to a disabled opponent that would play O with
/// [`Difficulty::Optimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiSettings {
    /// Whether the computer plays at all.
    pub enabled: bool,
    /// The mark the computer plays.
    pub player: Player,
    /// Random or negamax move selection.
    pub difficulty: Difficulty,
}

impl AiSettings {
    /// Creates a new `AiSettings` with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the computer is enabled and plays `player`.
    pub fn controls(&self, player: Player) -> bool {
        self.enabled && self.player == player
    }

    /// Message recorded when the opponent is switched on or off.
    pub fn describe(&self) -> String {
        if self.enabled {
            format!("AI enabled (playing as {})", self.player)
        } else {
            "AI disabled".to_string()
        }
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            player: Player::O,
            difficulty: Difficulty::default(),
        }
    }
}
