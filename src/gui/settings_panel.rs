//! Settings panel: opponent options, game status and the reset button.

use egui::Ui;
use noughts_core::{Difficulty, GameStatus, Player, SearchResult, Solver};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::TurnController;

/// Side panel driving a [`TurnController`].
#[derive(Debug, Default)]
pub struct SettingsPanel {
    show_scores: bool,
    scores: Option<(String, Vec<SearchResult>)>,
}

impl SettingsPanel {
    /// Creates the panel with move scores hidden.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the panel and applies any changes to `controller`.
    pub fn show(&mut self, ui: &mut Ui, controller: &mut TurnController) {
        ui.heading("Settings");
        ui.label(format!("Current Player: {}", controller.to_move()));
        ui.label(format!("Current Board State: {}", controller.state_string()));
        ui.separator();

        let mut enabled = controller.settings().enabled;
        if ui.checkbox(&mut enabled, "Play vs AI").changed() {
            controller.set_ai_enabled(enabled);
        }

        let mut ai_player = controller.settings().player;
        ui.horizontal(|ui| {
            ui.label("AI plays");
            for player in Player::iter() {
                ui.radio_value(&mut ai_player, player, player.to_string());
            }
        });
        controller.set_ai_player(ai_player);

        let mut difficulty = controller.settings().difficulty;
        egui::ComboBox::from_label("Difficulty")
            .selected_text(difficulty.label())
            .show_ui(ui, |ui| {
                for option in Difficulty::iter() {
                    ui.selectable_value(&mut difficulty, option, option.label());
                }
            });
        controller.set_difficulty(difficulty);

        ui.separator();
        if ui.button("Reset Game").clicked() {
            controller.reset();
        }

        match controller.status() {
            GameStatus::Won(winner) => {
                ui.label("Game Over!");
                ui.label(format!("Winner: Player {}", winner));
            }
            GameStatus::Draw => {
                ui.label("Game Over!");
                ui.label("It's a Draw!");
            }
            GameStatus::InProgress => {}
        }

        ui.separator();
        ui.checkbox(&mut self.show_scores, "Show move scores");
        if self.show_scores {
            for result in self.scores(controller) {
                ui.label(format!("{}: {:+}", result.position, result.score));
            }
        }
    }

    /// Negamax scores for the player to move, cached per board.
    fn scores(&mut self, controller: &TurnController) -> &[SearchResult] {
        let key = format!("{}{}", controller.state_string(), controller.to_move());
        let stale = self.scores.as_ref().is_none_or(|(cached, _)| *cached != key);
        if stale {
            debug!(%key, "Scoring moves");
            let results = Solver::evaluate_moves(controller.board(), controller.to_move());
            self.scores = Some((key, results));
        }
        self.scores
            .as_ref()
            .map(|(_, results)| results.as_slice())
            .unwrap_or_default()
    }
}
