//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::GeoPoint;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            delta_levels,
            focus_screen,
        } => vec![AppCommand::ZoomCamera {
            delta_levels,
            focus_screen,
        }],

        AppIntent::StartDrawingRequested => vec![AppCommand::BeginDrawing],
        AppIntent::StopDrawingRequested => with_open_stroke_closed(state, AppCommand::EndDrawing),
        AppIntent::ConfirmRouteRequested => {
            with_open_stroke_closed(state, AppCommand::ConfirmRoute)
        }
        AppIntent::ClearDrawingRequested => vec![AppCommand::ClearDrawing],
        AppIntent::ResetRequested => vec![AppCommand::ResetAll],
        AppIntent::RunAgainRequested => vec![AppCommand::ResumeRoute],

        AppIntent::StrokeStarted { screen_pos } => screen_to_geo(state, screen_pos)
            .map(|point| vec![AppCommand::BeginStroke { point }])
            .unwrap_or_default(),
        AppIntent::StrokeMoved { screen_pos } => screen_to_geo(state, screen_pos)
            .map(|point| vec![AppCommand::ExtendStroke { point }])
            .unwrap_or_default(),
        AppIntent::StrokeEnded => vec![AppCommand::FinishStroke],

        AppIntent::StopPressStarted { at } => vec![AppCommand::ArmStopGesture { at }],
        AppIntent::StopPressTicked { now } => vec![AppCommand::TickStopGesture { now }],
        AppIntent::StopPressReleased { at } => vec![AppCommand::ReleaseStopGesture { at }],

        AppIntent::TrackingStartupRequested => vec![AppCommand::StartTracking],
        AppIntent::GoToCurrentLocationRequested => vec![AppCommand::CenterOnCurrentLocation],
        AppIntent::CompassPermissionRequested => vec![AppCommand::RequestCompassPermission],
        AppIntent::NoticeDismissed => vec![AppCommand::DismissNotice],

        AppIntent::LocationPermissionResolved { status, prompted } => {
            vec![AppCommand::ApplyLocationPermission { status, prompted }]
        }
        AppIntent::PositionFetched { purpose, result } => {
            vec![AppCommand::ApplyFetchedPosition { purpose, result }]
        }
        AppIntent::PositionUpdated { point } => {
            if point.is_valid() {
                vec![AppCommand::ApplyPositionUpdate { point }]
            } else {
                log::warn!("Ungültige Position verworfen: {:?}", point);
                Vec::new()
            }
        }
        AppIntent::PositionWatchFailed { error } => vec![AppCommand::RecordTrackingFailure {
            source: "position",
            error,
        }],
        AppIntent::HeadingUpdated { reading } => match reading.normalized() {
            Some(degrees) => vec![AppCommand::ApplyHeading { degrees }],
            None => {
                log::warn!("Ungültiger Kompass-Messwert verworfen: {:?}", reading);
                Vec::new()
            }
        },
        AppIntent::HeadingWatchFailed { error } => vec![AppCommand::RecordTrackingFailure {
            source: "heading",
            error,
        }],
        AppIntent::CompassPermissionResolved {
            outcome,
            user_initiated,
        } => vec![AppCommand::ApplyCompassPermission {
            outcome,
            user_initiated,
        }],
    }
}

/// Schließt einen offenen Stroke ab, bevor `command` ausgeführt wird.
fn with_open_stroke_closed(state: &AppState, command: AppCommand) -> Vec<AppCommand> {
    if state.drawing.recorder.is_recording() {
        vec![AppCommand::FinishStroke, command]
    } else {
        vec![command]
    }
}

/// Pixel → Geo über die Kamera. Schlägt die Umrechnung fehl, wird der Punkt verworfen.
fn screen_to_geo(state: &AppState, screen_pos: glam::Vec2) -> Option<GeoPoint> {
    let point = state
        .view
        .camera
        .screen_to_geo(screen_pos, state.view.viewport());
    if point.is_none() {
        log::debug!("Pixel-Umrechnung fehlgeschlagen, Punkt verworfen: {:?}", screen_pos);
    }
    point
}

#[cfg(test)]
mod tests;
