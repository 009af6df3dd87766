//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Karte um ein Screen-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt in Screen-Koordinaten.
pub fn zoom_towards(state: &mut AppState, delta_levels: f64, focus_screen: Option<glam::Vec2>) {
    use_cases::camera::zoom_towards(state, delta_levels, focus_screen);
}
