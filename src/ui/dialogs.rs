//! Blockierender Hinweis-Dialog.

use crate::app::{AppIntent, UiState};

/// Zeigt den aktuellen Hinweis als modales Fenster an.
pub fn show_notice_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let Some(message) = ui_state.notice.as_deref() else {
        return events;
    };

    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                events.push(AppIntent::NoticeDismissed);
            }
        });

    events
}
