//! Tic-tac-toe board rendering.

use egui::{Button, Color32, RichText, Ui, vec2};
use noughts_core::{Board, Player, Position, Square};

/// Draws the 3x3 grid as buttons and reports clicks on empty squares.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    cell_size: f32,
}

impl BoardView {
    /// Creates a board view with square cells of `cell_size` points.
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    /// Renders `board`. Returns the empty square clicked this frame, if
    /// `accepts_input` is set.
    pub fn show(&self, ui: &mut Ui, board: &Board, accepts_input: bool) -> Option<Position> {
        let mut clicked = None;
        egui::Grid::new("board_grid")
            .spacing(vec2(6.0, 6.0))
            .show(ui, |ui| {
                for pos in Position::ALL {
                    let square = board.get(pos);
                    let button = Button::new(self.symbol(square))
                        .min_size(vec2(self.cell_size, self.cell_size));
                    let enabled = accepts_input && square == Square::Empty;
                    let response = ui
                        .add_enabled(enabled, button)
                        .on_hover_text(pos.label());
                    if response.clicked() {
                        clicked = Some(pos);
                    }
                    if pos.col() == 2 {
                        ui.end_row();
                    }
                }
            });
        clicked
    }

    fn symbol(&self, square: Square) -> RichText {
        let (text, color) = match square {
            Square::Empty => (" ", Color32::GRAY),
            Square::Occupied(Player::X) => ("X", Color32::from_rgb(90, 160, 255)),
            Square::Occupied(Player::O) => ("O", Color32::from_rgb(255, 110, 110)),
        };
        RichText::new(text)
            .size(self.cell_size * 0.6)
            .strong()
            .color(color)
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new(100.0)
    }
}
