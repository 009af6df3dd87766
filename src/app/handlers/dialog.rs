//! Handler für Hinweise und Anwendungssteuerung.

use crate::app::AppState;

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Schließt den aktuellen Hinweis.
pub fn dismiss_notice(state: &mut AppState) {
    state.ui.notice = None;
}
