//! Log console window.

use egui::{Color32, Context, RichText, ScrollArea};
use tracing::instrument;

use crate::{Diagnostics, LogLevel};

/// Text colour for each diagnostics level.
pub fn level_color(level: LogLevel) -> Color32 {
    match level {
        LogLevel::Info => Color32::WHITE,
        LogLevel::Warning => Color32::YELLOW,
        LogLevel::Error => Color32::from_rgb(255, 102, 102),
        LogLevel::Debug => Color32::from_gray(153),
        LogLevel::GameEvent => Color32::from_rgb(102, 255, 102),
    }
}

/// Window listing diagnostics entries, newest at the bottom.
#[derive(Debug, Clone)]
pub struct LogConsole {
    auto_scroll: bool,
    show_debug: bool,
}

impl LogConsole {
    /// Creates a console that follows new entries.
    #[instrument]
    pub fn new() -> Self {
        Self {
            auto_scroll: true,
            show_debug: true,
        }
    }

    /// Draws the console window.
    pub fn show(&mut self, ctx: &Context, diagnostics: &Diagnostics) {
        egui::Window::new("Log Console")
            .default_size([520.0, 260.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Clear Logs").clicked() {
                        diagnostics.clear();
                    }
                    ui.checkbox(&mut self.auto_scroll, "Auto-scroll");
                    ui.checkbox(&mut self.show_debug, "Debug");
                });

                ui.separator();

                ScrollArea::both()
                    .auto_shrink([false, false])
                    .stick_to_bottom(self.auto_scroll)
                    .show(ui, |ui| {
                        for entry in diagnostics.entries() {
                            if !self.show_debug && matches!(entry.level(), LogLevel::Debug) {
                                continue;
                            }
                            let text = RichText::new(entry.to_string())
                                .monospace()
                                .color(level_color(*entry.level()));
                            ui.label(text);
                        }
                    });
            });
    }
}

impl Default for LogConsole {
    fn default() -> Self {
        Self::new()
    }
}
