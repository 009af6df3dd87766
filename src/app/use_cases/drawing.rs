//! Use-Cases der Stroke-Aufzeichnung. Wirken nur im Zeichenmodus.

use crate::app::AppState;
use crate::core::GeoPoint;

fn ensure_drawing(state: &AppState, action: &str) -> bool {
    let drawing = state.is_drawing_mode();
    if !drawing {
        log::debug!("{} ignoriert: Modus {}", action, state.mode().label());
    }
    drawing
}

/// Pointer-Down: neuen Stroke beginnen.
pub fn begin_stroke(state: &mut AppState, point: GeoPoint) {
    if ensure_drawing(state, "begin_stroke") {
        state.drawing.recorder.start(point);
    }
}

/// Pointer-Move: Punkt an den laufenden Stroke anhängen (mit Mindestabstand).
pub fn extend_stroke(state: &mut AppState, point: GeoPoint) {
    if ensure_drawing(state, "extend_stroke") {
        state.drawing.recorder.extend(point);
    }
}

/// Pointer-Up: laufenden Stroke in den Entwurf übernehmen.
pub fn finish_stroke(state: &mut AppState) {
    if !ensure_drawing(state, "finish_stroke") {
        return;
    }
    let drawing = &mut state.drawing;
    if drawing.recorder.end(&mut drawing.draft) {
        log::debug!(
            "Stroke übernommen ({} Strokes, {} Punkte)",
            drawing.draft.stroke_count(),
            drawing.draft.point_count()
        );
    }
}

/// „Löschen": Entwurf und laufenden Stroke verwerfen.
pub fn clear_drawing(state: &mut AppState) {
    if ensure_drawing(state, "clear_drawing") {
        state.drawing.clear();
        log::info!("Entwurf gelöscht");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawing_state() -> AppState {
        let mut state = AppState::new();
        state.modes.begin_drawing().expect("Idle → Drawing");
        state
    }

    #[test]
    fn strokes_are_ignored_outside_drawing_mode() {
        let mut state = AppState::new();

        begin_stroke(&mut state, GeoPoint::new(37.0, 127.0));
        extend_stroke(&mut state, GeoPoint::new(37.001, 127.0));
        finish_stroke(&mut state);

        assert!(!state.has_path());
        assert!(state.drawing.recorder.buffer().is_empty());
    }

    #[test]
    fn finished_stroke_sets_has_path() {
        let mut state = drawing_state();

        begin_stroke(&mut state, GeoPoint::new(37.0, 127.0));
        extend_stroke(&mut state, GeoPoint::new(37.000048, 127.0));
        finish_stroke(&mut state);

        assert!(state.has_path());
        assert_eq!(state.drawing.draft.point_count(), 2);
    }

    #[test]
    fn clear_drawing_resets_has_path() {
        let mut state = drawing_state();
        begin_stroke(&mut state, GeoPoint::new(37.0, 127.0));
        extend_stroke(&mut state, GeoPoint::new(37.001, 127.0));
        finish_stroke(&mut state);
        begin_stroke(&mut state, GeoPoint::new(37.1, 127.0));

        clear_drawing(&mut state);

        assert!(!state.has_path());
        assert!(!state.drawing.recorder.is_recording());
        assert!(state.is_drawing_mode());
    }
}
