//! Use-Cases der Modus-Übergänge und der Stop-Geste.

use crate::app::AppState;
use crate::core::{LongPressOutcome, RouteDraft, StopRelease};
use std::time::Instant;

/// Idle → Drawing, oder Paused → Drawing („Route bearbeiten").
///
/// Beim Bearbeiten werden die Strokes der bestätigten Route unverändert in
/// den Entwurf zurückgelegt. Drag-Panning wird gesperrt.
pub fn begin_drawing(state: &mut AppState) {
    match state.modes.begin_drawing() {
        Ok(restored) => {
            if let Some(route) = restored {
                state.drawing.draft = RouteDraft::from_strokes(route.into_strokes());
            }
            state.drawing.recorder.clear();
            state.view.drag_enabled = false;
            log::info!(
                "Zeichenmodus aktiv ({} Strokes im Entwurf)",
                state.drawing.draft.stroke_count()
            );
        }
        Err(e) => log::debug!("{}", e),
    }
}

/// Drawing → Idle. Ein offener Stroke wurde vorher bereits abgeschlossen.
pub fn end_drawing(state: &mut AppState) {
    match state.modes.end_drawing() {
        Ok(()) => {
            state.drawing.recorder.clear();
            state.view.drag_enabled = true;
            log::info!("Zeichenmodus beendet (has_path = {})", state.has_path());
        }
        Err(e) => log::debug!("{}", e),
    }
}

/// Beliebiger Modus → Idle: Route, Entwurf, Stroke und Geste verwerfen.
pub fn reset_all(state: &mut AppState) {
    let previous = state.modes.reset();
    state.drawing.clear();
    state.view.drag_enabled = true;
    log::info!("Zurückgesetzt (vorher: {})", previous.label());
}

/// Paused → Running.
pub fn resume_route(state: &mut AppState) {
    match state.modes.resume() {
        Ok(()) => log::info!("Route läuft wieder"),
        Err(e) => log::debug!("{}", e),
    }
}

/// Stop-Button gedrückt.
pub fn arm_stop_gesture(state: &mut AppState, at: Instant) {
    if let Err(e) = state.modes.press_stop(at) {
        log::debug!("{}", e);
    }
}

/// Frame-Tick während der Stop-Button gehalten wird.
pub fn tick_stop_gesture(state: &mut AppState, now: Instant) {
    if let Some(LongPressOutcome::Completed) = state.modes.tick_stop(now) {
        log::info!("Stop-Geste abgeschlossen: Route angehalten");
    }
}

/// Stop-Button losgelassen.
pub fn release_stop_gesture(state: &mut AppState, at: Instant) {
    match state.modes.release_stop(at) {
        StopRelease::Completed => log::info!("Stop-Geste beim Loslassen abgeschlossen: Route angehalten"),
        StopRelease::Cancelled => log::debug!("Stop-Geste zu früh losgelassen"),
        StopRelease::Inactive => {}
    }
}
