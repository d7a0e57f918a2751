//! The eframe application.

use eframe::CreationContext;
use tracing::{info, instrument};

use super::{BoardView, LogConsole, SettingsPanel};
use crate::TurnController;

/// Storage key of the board state string saved between runs.
pub const STATE_KEY: &str = "noughts_board_state";

/// Top-level window: settings on the left, the board in the middle, and a
/// floating log console.
pub struct NoughtsApp {
    controller: TurnController,
    board_view: BoardView,
    settings_panel: SettingsPanel,
    log_console: LogConsole,
}

impl NoughtsApp {
    /// Creates the app, resuming the saved board when `restore_state` is set.
    #[instrument(skip(cc, controller))]
    pub fn new(cc: &CreationContext<'_>, controller: TurnController, restore_state: bool) -> Self {
        let mut app = Self {
            controller,
            board_view: BoardView::default(),
            settings_panel: SettingsPanel::new(),
            log_console: LogConsole::new(),
        };

        let saved = if restore_state {
            cc.storage.and_then(|storage| storage.get_string(STATE_KEY))
        } else {
            None
        };
        if let Some(state) = saved {
            app.restore(&state);
        }
        app
    }

    /// Resumes from a saved state string, keeping the fresh game if it is
    /// rejected.
    pub fn restore(&mut self, state: &str) {
        info!(state, "Restoring saved board");
        if let Err(e) = self.controller.load_state(state) {
            self.controller
                .diagnostics()
                .warning(format!("Ignoring saved board state {:?}: {}", state, e));
        }
    }

    /// Returns the controller.
    pub fn controller(&self) -> &TurnController {
        &self.controller
    }
}

impl eframe::App for NoughtsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.update().is_some() {
            ctx.request_repaint();
        }

        egui::SidePanel::left("settings")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                self.settings_panel.show(ui, &mut self.controller);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game");
            let accepts_input =
                !self.controller.status().is_over() && !self.controller.is_ai_turn();
            let clicked = self
                .board_view
                .show(ui, self.controller.board(), accepts_input);
            if let Some(pos) = clicked {
                match self.controller.place_mark(pos) {
                    Ok(_) => ui.ctx().request_repaint(),
                    Err(e) => self
                        .controller
                        .diagnostics()
                        .warning(format!("Move rejected: {}", e)),
                }
            }
        });

        self.log_console.show(ctx, self.controller.diagnostics());
    }

    // Required by eframe 0.34; drawing happens in `update`, which eframe
    // still calls every frame before `ui`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let state = self.controller.state_string();
        info!(%state, "Saving board state");
        storage.set_string(STATE_KEY, state);
    }
}
