//! Bestätigung des Entwurfs als Route.

use crate::app::AppState;
use crate::core::RouteError;

/// Hinweis bei Bestätigung ohne gezeichneten Stroke.
pub const MSG_DRAW_ROUTE_FIRST: &str = "Please draw a route first.";

/// Idle/Drawing → Confirmed (running).
///
/// Verkettet alle Strokes zur Route, leert Entwurf und Stroke-Puffer, gibt
/// Drag-Panning frei und passt die Kamera mit Rand an die Route an.
/// Ein leerer Entwurf wird mit Hinweis abgelehnt; der Zustand bleibt unverändert.
pub fn confirm_route(state: &mut AppState) -> anyhow::Result<()> {
    if !state.mode().can_confirm() {
        log::debug!("Bestätigen ignoriert: Modus {}", state.mode().label());
        return Ok(());
    }

    let route = match state.drawing.draft.take_route() {
        Ok(route) => route,
        Err(RouteError::EmptyDraft) => {
            log::info!("Bestätigen abgelehnt: kein Stroke vorhanden");
            state.ui.show_notice(MSG_DRAW_ROUTE_FIRST);
            return Ok(());
        }
    };

    let bounds = route.bounds();
    log::info!(
        "Route bestätigt: {} Strokes, {} Punkte, {:.1} m",
        route.strokes().len(),
        route.len(),
        route.length_m()
    );
    state.modes.confirm(route)?;
    state.drawing.recorder.clear();
    state.view.drag_enabled = true;

    if let Some(bounds) = bounds {
        let viewport = state.view.viewport();
        let padding = state.options.tracking.fit_bounds_padding_px;
        if !state.view.camera.fit_bounds(&bounds, viewport, padding) {
            log::debug!("Viewport zu klein zum Einpassen der Route");
        }
    }

    Ok(())
}
