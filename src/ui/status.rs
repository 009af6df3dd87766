//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Mode: {}", state.mode().label()));

            ui.separator();

            ui.label(format!(
                "Strokes: {} | Points: {}",
                state.drawing.draft.stroke_count(),
                state.drawing.draft.point_count()
            ));

            if let Some(route) = state.mode().route() {
                ui.separator();
                ui.label(format!("Route: {} pts, {:.0} m", route.len(), route.length_m()));
            }

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2} | Center: ({:.5}, {:.5})",
                state.view.camera.zoom, state.view.camera.center.lat, state.view.camera.center.lng
            ));

            ui.separator();

            ui.label(format!("🧭 {:.0}°", state.current_heading_degrees()));

            if let Some(status) = state.loading_status() {
                ui.separator();
                ui.spinner();
                ui.label(status);
            }

            if let Some(msg) = state.error_message() {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
