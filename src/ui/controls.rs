//! Bedienleiste: Buttons je nach Modus, Halte-Button zum Stoppen, Tracking-Buttons.

use crate::app::{AppIntent, AppState};
use crate::core::Mode;
use std::time::Instant;

/// Frame-übergreifender Zustand der Bedienleiste.
#[derive(Debug, Default)]
pub struct ControlsState {
    stop_held: bool,
}

impl ControlsState {
    /// Erstellt einen neuen Zustand ohne gehaltenen Stop-Button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop-Button wird gerade gehalten.
    pub fn stop_held(&self) -> bool {
        self.stop_held
    }
}

/// Rendert die Bedienleiste und gibt erzeugte Events zurück.
pub fn render_controls(
    ctx: &egui::Context,
    state: &AppState,
    controls: &mut ControlsState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match state.mode() {
                Mode::Idle => idle_row(ui, state, &mut events),
                Mode::Drawing => drawing_row(ui, state, &mut events),
                Mode::Confirmed { running: true, .. } => {
                    running_row(ui, state, controls, &mut events)
                }
                Mode::Confirmed { running: false, .. } => paused_row(ui, &mut events),
            }

            // Haltezustand verlassen, sobald der Button nicht mehr sichtbar ist
            if controls.stop_held && !state.is_running() {
                controls.stop_held = false;
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                tracking_buttons(ui, state, &mut events);
            });
        });
    });

    events
}

fn idle_row(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    if ui.button("✏ Draw").clicked() {
        events.push(AppIntent::StartDrawingRequested);
    }
    if ui.button("⟲ Reset").clicked() {
        events.push(AppIntent::ResetRequested);
    }
    if state.has_path() && ui.button("✔ Confirm").clicked() {
        events.push(AppIntent::ConfirmRouteRequested);
    }
}

fn drawing_row(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    if state.has_path() && ui.button("🗑 Clear").clicked() {
        events.push(AppIntent::ClearDrawingRequested);
    }
    if ui.button("⏹ Stop").clicked() {
        events.push(AppIntent::StopDrawingRequested);
    }
    if ui
        .add_enabled(state.has_path(), egui::Button::new("✔ Confirm"))
        .clicked()
    {
        events.push(AppIntent::ConfirmRouteRequested);
    }
}

fn running_row(
    ui: &mut egui::Ui,
    state: &AppState,
    controls: &mut ControlsState,
    events: &mut Vec<AppIntent>,
) {
    let progress = state.long_press_progress_percent();
    let label = if state.long_press_active() {
        format!("Hold to stop… {:.0}%", progress)
    } else {
        "⏸ Hold to stop".to_string()
    };

    let response = ui.add(egui::Button::new(label).sense(egui::Sense::click_and_drag()));
    let held = response.is_pointer_button_down_on();
    let now = Instant::now();

    match (controls.stop_held, held) {
        (false, true) => events.push(AppIntent::StopPressStarted { at: now }),
        (true, true) => events.push(AppIntent::StopPressTicked { now }),
        (true, false) => events.push(AppIntent::StopPressReleased { at: now }),
        (false, false) => {}
    }
    controls.stop_held = held;

    if state.long_press_active() {
        ui.add(
            egui::ProgressBar::new(progress / 100.0)
                .desired_width(120.0)
                .show_percentage(),
        );
    }

    if ui.button("⟲ Reset").clicked() {
        events.push(AppIntent::ResetRequested);
    }
}

fn paused_row(ui: &mut egui::Ui, events: &mut Vec<AppIntent>) {
    if ui.button("▶ Run again").clicked() {
        events.push(AppIntent::RunAgainRequested);
    }
    if ui.button("✏ Edit route").clicked() {
        events.push(AppIntent::StartDrawingRequested);
    }
    if ui.button("⟲ Reset").clicked() {
        events.push(AppIntent::ResetRequested);
    }
}

fn tracking_buttons(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    if state.loading_status().is_some() || state.error_message().is_some() {
        return;
    }
    if ui.button("🧭 Compass").clicked() {
        events.push(AppIntent::CompassPermissionRequested);
    }
    if ui.button("📍 My location").clicked() {
        events.push(AppIntent::GoToCurrentLocationRequested);
    }
}
