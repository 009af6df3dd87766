//! Handler für Modus-Übergänge, Routen-Bestätigung und Stop-Geste.

use crate::app::use_cases;
use crate::app::AppState;
use std::time::Instant;

/// Zeichenmodus betreten.
pub fn begin_drawing(state: &mut AppState) {
    use_cases::mode::begin_drawing(state);
}

/// Zeichenmodus verlassen.
pub fn end_drawing(state: &mut AppState) {
    use_cases::mode::end_drawing(state);
}

/// Entwurf als Route bestätigen.
pub fn confirm_route(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::route::confirm_route(state)
}

/// Alles zurücksetzen.
pub fn reset(state: &mut AppState) {
    use_cases::mode::reset_all(state);
}

/// Angehaltene Route erneut laufen lassen.
pub fn resume(state: &mut AppState) {
    use_cases::mode::resume_route(state);
}

/// Stop-Geste scharf schalten.
pub fn arm_stop(state: &mut AppState, at: Instant) {
    use_cases::mode::arm_stop_gesture(state, at);
}

/// Stop-Geste fortschreiben.
pub fn tick_stop(state: &mut AppState, now: Instant) {
    use_cases::mode::tick_stop_gesture(state, now);
}

/// Stop-Geste beenden.
pub fn release_stop(state: &mut AppState, at: Instant) {
    use_cases::mode::release_stop_gesture(state, at);
}
