// ui.rs - Paints the board and forwards clicks to the session

use eframe::egui;
use egui::{Color32, Stroke};
use lights_out::Activate;
use tracing::warn;

use crate::LightsOut;

impl eframe::App for LightsOut {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Lights Out");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("🎲 New board").clicked() {
                    if let Err(err) = self.session.reset() {
                        warn!("Failed to deal a new board: {err}.");
                    }
                }

                ui.separator();

                ui.label("Lit:");
                ui.color_edit_button_srgba(&mut self.lit_color);
                ui.label("Unlit:");
                ui.color_edit_button_srgba(&mut self.unlit_color);

                ui.separator();

                let dims = self.session.dimensions();
                ui.label(format!("{} x {}", dims.rows, dims.cols));
            });

            ui.separator();

            ui.label("Click a cell to flip it and its neighbours.");

            ui.separator();

            self.board(ui);

            ui.separator();

            let lit = self.session.lit_count();
            let total = self.session.grid().cells().count();
            ui.horizontal(|ui| {
                ui.label(format!("Lit cells: {lit}"));
                ui.label(format!("Unlit cells: {}", total - lit));
            });
        });
    }
}

impl LightsOut {
    /// Paints the board into the space egui allocates for it and applies a click on a cell.
    pub(crate) fn board(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let dims = self.session.dimensions();
        let (response, painter) =
            ui.allocate_painter(self.layout.size(dims), egui::Sense::click());
        let origin = response.rect.min;

        // Fill background
        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        for cell in self.session.grid().cells() {
            let rect = self.layout.cell_rect(origin, cell.coord);
            let color = if cell.lit { self.lit_color } else { self.unlit_color };
            painter.rect_filled(rect, 2.0, color);
            painter.rect_stroke(rect, 2.0, Stroke::new(0.5, Color32::from_gray(60)));
        }

        // Applied after painting so the new snapshot shows next frame
        if response.clicked() {
            let hit = response
                .interact_pointer_pos()
                .and_then(|pos| self.layout.cell_at(origin, dims, pos));
            if let Some(coord) = hit {
                if let Err(err) = self.session.activate(coord) {
                    warn!("Ignoring activation: {err}.");
                }
                ui.ctx().request_repaint();
            }
        }

        response
    }
}
