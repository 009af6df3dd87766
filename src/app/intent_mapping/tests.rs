use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{GeoPoint, HeadingReading};

use super::map_intent_to_commands;

fn state_with_viewport() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    state
}

#[test]
fn stroke_started_maps_to_geo_point_under_cursor() {
    let state = state_with_viewport();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::StrokeStarted {
            screen_pos: glam::Vec2::new(400.0, 300.0),
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::BeginStroke { point } => {
            assert!((point.lat - state.view.camera.center.lat).abs() < 1e-9);
            assert!((point.lng - state.view.camera.center.lng).abs() < 1e-9);
        }
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn stroke_moved_without_surface_is_dropped() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::StrokeMoved {
            screen_pos: glam::Vec2::new(10.0, 10.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn stop_drawing_closes_open_stroke_first() {
    let mut state = state_with_viewport();
    state.drawing.recorder.start(GeoPoint::new(37.0, 127.0));

    let commands = map_intent_to_commands(&state, AppIntent::StopDrawingRequested);

    assert_eq!(
        commands,
        vec![AppCommand::FinishStroke, AppCommand::EndDrawing]
    );
}

#[test]
fn confirm_without_open_stroke_maps_to_single_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ConfirmRouteRequested);

    assert_eq!(commands, vec![AppCommand::ConfirmRoute]);
}

#[test]
fn raw_alpha_heading_is_normalized_in_mapping() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::HeadingUpdated {
            reading: HeadingReading::RawAlpha(90.0),
        },
    );

    assert_eq!(commands, vec![AppCommand::ApplyHeading { degrees: 270.0 }]);
}

#[test]
fn invalid_device_samples_are_rejected() {
    let state = AppState::new();

    let heading = map_intent_to_commands(
        &state,
        AppIntent::HeadingUpdated {
            reading: HeadingReading::Compass(f64::NAN),
        },
    );
    let position = map_intent_to_commands(
        &state,
        AppIntent::PositionUpdated {
            point: GeoPoint::new(120.0, 0.0),
        },
    );

    assert!(heading.is_empty());
    assert!(position.is_empty());
}
