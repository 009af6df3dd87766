use route_trace::core::tracking::{CompassPermission, PermissionStatus};
use route_trace::shared::options::{
    SimulatedCompassPermission, SimulatedLocationPermission, SimulationOptions,
};
use route_trace::{AppController, AppIntent, AppState, TraceOptions, TrackingRuntime};
use std::time::{Duration, Instant};

const WAIT: Duration = Duration::from_secs(3);

fn options_with(simulation: SimulationOptions) -> TraceOptions {
    TraceOptions {
        simulation,
        ..TraceOptions::default()
    }
}

fn fast_simulation() -> SimulationOptions {
    SimulationOptions {
        position_interval_ms: 10,
        heading_interval_ms: 10,
        ..SimulationOptions::default()
    }
}

/// Pumpt Intents aus der Laufzeit in den Controller, bis `done` erfüllt ist.
fn pump_until(
    runtime: &mut TrackingRuntime,
    controller: &mut AppController,
    state: &mut AppState,
    done: impl Fn(&AppState) -> bool,
) -> bool {
    let deadline = Instant::now() + WAIT;
    runtime.process_requests(state);
    while Instant::now() < deadline {
        if done(state) {
            return true;
        }
        if let Some(intent) = runtime.wait_for(Duration::from_millis(50)) {
            controller
                .handle_intent(state, intent)
                .expect("Intent sollte ohne Fehler durchlaufen");
            runtime.process_requests(state);
        }
    }
    done(state)
}

#[test]
fn test_startup_reaches_position_and_heading() {
    let options = options_with(fast_simulation());
    let mut runtime = TrackingRuntime::simulated(&options);
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);

    controller
        .handle_intent(&mut state, AppIntent::TrackingStartupRequested)
        .expect("Start sollte durchlaufen");

    let reached = pump_until(&mut runtime, &mut controller, &mut state, |s| {
        s.tracking.last_known_position.is_some()
            && s.tracking.heading_watch_active
            && s.tracking.overlay.is_some()
    });

    assert!(reached, "Position und Kompass sollten ankommen");
    assert_eq!(state.loading_status(), None);
    assert_eq!(state.error_message(), None);
    assert!(state.tracking.position_watch_active);
    assert_eq!(runtime.active_watch_count(), 2);

    runtime.shutdown();
    assert_eq!(runtime.active_watch_count(), 0);
}

#[test]
fn test_startup_prompt_then_denied() {
    let options = options_with(SimulationOptions {
        location_permission: SimulatedLocationPermission::PromptThenDenied,
        ..fast_simulation()
    });
    let mut runtime = TrackingRuntime::simulated(&options);
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);

    controller
        .handle_intent(&mut state, AppIntent::TrackingStartupRequested)
        .expect("Start sollte durchlaufen");

    let reached = pump_until(&mut runtime, &mut controller, &mut state, |s| {
        s.error_message().is_some()
    });

    assert!(reached, "Fehlermeldung erwartet");
    assert!(state.tracking.last_known_position.is_none());
    assert!(!state.tracking.position_watch_active);
}

#[test]
fn test_failing_initial_fetch_sets_error() {
    let options = options_with(SimulationOptions {
        fail_initial_fetch: true,
        ..fast_simulation()
    });
    let mut runtime = TrackingRuntime::simulated(&options);
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);

    controller
        .handle_intent(&mut state, AppIntent::TrackingStartupRequested)
        .expect("Start sollte durchlaufen");

    let reached = pump_until(&mut runtime, &mut controller, &mut state, |s| {
        s.error_message().is_some()
    });

    assert!(reached, "Fehlermeldung erwartet");
    assert_eq!(
        state.error_message(),
        Some("Unable to get location: timed out after 10000 ms")
    );
}

#[test]
fn test_user_compass_request_reports_denied() {
    let options = options_with(SimulationOptions {
        compass_permission: SimulatedCompassPermission::Denied,
        ..fast_simulation()
    });
    let mut runtime = TrackingRuntime::simulated(&options);
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);

    controller
        .handle_intent(&mut state, AppIntent::CompassPermissionRequested)
        .expect("Anfrage sollte durchlaufen");

    let reached = pump_until(&mut runtime, &mut controller, &mut state, |s| {
        s.ui.notice.is_some()
    });

    assert!(reached, "Hinweis erwartet");
    assert_eq!(state.ui.notice.as_deref(), Some("Compass permission denied."));
    assert!(!state.tracking.heading_watch_active);
}

#[test]
fn test_oneshot_results_arrive_as_intents() {
    let options = options_with(fast_simulation());
    let mut runtime = TrackingRuntime::simulated(&options);
    let mut state = AppState::with_options(options);

    state
        .tracking
        .request(route_trace::app::TrackingRequest::CheckLocationPermission);
    state
        .tracking
        .request(route_trace::app::TrackingRequest::SetupOrientation);
    runtime.process_requests(&mut state);

    let mut permission = None;
    let mut compass = None;
    let deadline = Instant::now() + WAIT;
    while (permission.is_none() || compass.is_none()) && Instant::now() < deadline {
        match runtime.wait_for(Duration::from_millis(50)) {
            Some(AppIntent::LocationPermissionResolved { status, prompted }) => {
                permission = Some((status, prompted))
            }
            Some(AppIntent::CompassPermissionResolved {
                outcome,
                user_initiated,
            }) => compass = Some((outcome, user_initiated)),
            _ => {}
        }
    }

    assert_eq!(permission, Some((PermissionStatus::Granted, false)));
    assert_eq!(compass, Some((CompassPermission::NotRequired, false)));
}

#[test]
fn test_requests_after_shutdown_are_dropped() {
    let options = options_with(fast_simulation());
    let mut runtime = TrackingRuntime::simulated(&options);
    let mut state = AppState::with_options(options);

    runtime.shutdown();
    state
        .tracking
        .request(route_trace::app::TrackingRequest::StartPositionWatch);
    runtime.process_requests(&mut state);

    assert_eq!(runtime.active_watch_count(), 0);
    assert!(runtime.wait_for(Duration::from_millis(100)).is_none());
}
