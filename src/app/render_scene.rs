//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::MIN_STROKE_POINTS;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let draft_strokes = state
        .drawing
        .draft
        .restore_for_redraw()
        .iter()
        .map(|stroke| stroke.points().to_vec())
        .collect();

    // Vorschau des laufenden Strokes erst ab zwei Punkten
    let buffer = state.drawing.recorder.buffer();
    let live_stroke = if buffer.len() >= MIN_STROKE_POINTS {
        buffer.to_vec()
    } else {
        Vec::new()
    };

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size: state.view.viewport_size,
        draft_strokes,
        live_stroke,
        route: state.mode().route().cloned(),
        route_running: state.is_running(),
        overlay: state.tracking.overlay,
        drag_enabled: state.view.drag_enabled,
        style: state.options.drawing.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::{GeoPoint, Stroke};

    #[test]
    fn build_shows_live_stroke_only_from_two_points() {
        let mut state = AppState::new();
        state.drawing.recorder.start(GeoPoint::new(37.0, 127.0));

        let scene = build(&state);
        assert!(scene.live_stroke.is_empty());
        assert_eq!(scene.preview_polylines().count(), 0);

        state.drawing.recorder.extend(GeoPoint::new(37.001, 127.0));
        let scene = build(&state);
        assert_eq!(scene.live_stroke.len(), 2);
        assert_eq!(scene.preview_polylines().count(), 1);
    }

    #[test]
    fn build_shares_confirmed_route() {
        let mut state = AppState::new();
        state.drawing.draft.commit(
            Stroke::from_points(vec![GeoPoint::new(37.0, 127.0), GeoPoint::new(37.001, 127.0)])
                .expect("Stroke erwartet"),
        );
        let route = state.drawing.draft.take_route().expect("Route erwartet");
        state.modes.confirm(route).expect("Idle → Confirmed");

        let scene = build(&state);
        let route = scene.route.as_ref().expect("Route in Szene erwartet");
        let in_state = state.mode().route().expect("Route im State erwartet");
        assert!(std::sync::Arc::ptr_eq(route, in_state));
        assert!(scene.route_running);
        assert!(scene.draft_strokes.is_empty());
    }
}
