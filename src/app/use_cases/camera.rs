//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::GeoPoint;

/// Verschiebt die Karte um ein Screen-Delta. Im Zeichenmodus ist Drag-Panning gesperrt.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    if !state.view.drag_enabled {
        log::debug!("Drag-Panning gesperrt, Pan ignoriert");
        return;
    }
    state.view.camera.pan_pixels(delta);
}

/// Zoomt um `delta_levels` Stufen auf einen optionalen Fokuspunkt hin.
///
/// Falls `focus_screen` angegeben ist, bleibt der Kartenpunkt unter
/// der Maus nach dem Zoom an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, delta_levels: f64, focus_screen: Option<glam::Vec2>) {
    let viewport = state.view.viewport();
    state
        .view
        .camera
        .zoom_towards(delta_levels, focus_screen, viewport);
}

/// Zentriert die Kamera auf `point` mit der konfigurierten Zoomstufe.
pub fn center_on(state: &mut AppState, point: GeoPoint) {
    let zoom = state.options.tracking.locate_zoom;
    state.view.camera.look_at(point, zoom);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_is_ignored_while_drag_is_disabled() {
        let mut state = AppState::new();
        state.view.drag_enabled = false;
        let before = state.view.camera.clone();

        pan(&mut state, glam::Vec2::new(50.0, 0.0));

        assert_eq!(state.view.camera, before);
    }

    #[test]
    fn center_on_uses_locate_zoom() {
        let mut state = AppState::new();
        state.view.camera.zoom = 5.0;

        center_on(&mut state, GeoPoint::new(35.0, 129.0));

        assert_eq!(state.view.camera.center, GeoPoint::new(35.0, 129.0));
        assert_eq!(state.view.camera.zoom, 15.0);
    }
}
