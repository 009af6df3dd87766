//! Handler für die Stroke-Aufzeichnung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPoint;

/// Beginnt einen Stroke.
pub fn begin_stroke(state: &mut AppState, point: GeoPoint) {
    use_cases::drawing::begin_stroke(state, point);
}

/// Hängt einen Punkt an den laufenden Stroke an.
pub fn extend_stroke(state: &mut AppState, point: GeoPoint) {
    use_cases::drawing::extend_stroke(state, point);
}

/// Schließt den laufenden Stroke ab.
pub fn finish_stroke(state: &mut AppState) {
    use_cases::drawing::finish_stroke(state);
}

/// Verwirft Entwurf und laufenden Stroke.
pub fn clear(state: &mut AppState) {
    use_cases::drawing::clear_drawing(state);
}
