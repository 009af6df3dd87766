//! Use-Cases für Positions- und Kompass-Tracking.
//!
//! Die Geräte-Dienste liefern ihre Ergebnisse als Intents; diese Funktionen
//! werten sie aus und reihen Folgeaufträge für die Laufzeit ein. Zeichen-
//! und Routenzustand werden hier nie berührt.

use crate::app::state::TrackingRequest;
use crate::app::use_cases::camera;
use crate::app::AppState;
use crate::core::{CompassPermission, FetchPurpose, GeoPoint, PermissionStatus, TrackingError};

/// Ladeanzeige während des ersten Abrufs.
pub const MSG_FETCHING_LOCATION: &str = "Fetching location…";
/// Fehlermeldung bei verweigerter Positions-Berechtigung.
pub const MSG_LOCATION_DENIED: &str =
    "Location permission denied. Please allow location access in the settings.";
/// Hinweis, wenn „zur aktuellen Position" keinen Wert liefert.
pub const MSG_CURRENT_LOCATION_UNAVAILABLE: &str = "Unable to get current location.";
/// Hinweis nach erteilter Kompass-Berechtigung.
pub const MSG_COMPASS_GRANTED: &str = "Compass permission granted!";
/// Hinweis nach verweigerter Kompass-Berechtigung.
pub const MSG_COMPASS_DENIED: &str = "Compass permission denied.";
/// Hinweis, wenn die Kompass-Quelle keine Berechtigung braucht.
pub const MSG_COMPASS_NOT_REQUIRED: &str = "This device does not require a compass permission.";

/// Fehlermeldung eines gescheiterten Startabrufs.
pub fn location_error_message(error: &TrackingError) -> String {
    format!("Unable to get location: {}", error)
}

/// Start-Sequenz: Ladeanzeige setzen, Berechtigung prüfen, Kompass einrichten.
pub fn start_tracking(state: &mut AppState) {
    state.ui.loading_status = Some(MSG_FETCHING_LOCATION.to_string());
    state.ui.location_error = None;
    state
        .tracking
        .request(TrackingRequest::CheckLocationPermission);
    state.tracking.request(TrackingRequest::SetupOrientation);
    log::info!("Tracking-Start angefordert");
}

/// Wertet den Status der Positions-Berechtigung aus.
///
/// `NeedsPrompt` führt genau einmal zur Nachfrage; bleibt danach die
/// Zustimmung aus, gilt die Berechtigung als verweigert.
pub fn apply_location_permission(state: &mut AppState, status: PermissionStatus, prompted: bool) {
    match status {
        PermissionStatus::Granted => {
            state.tracking.request(TrackingRequest::FetchPosition {
                purpose: FetchPurpose::Initial,
            });
        }
        PermissionStatus::NeedsPrompt if !prompted => {
            state
                .tracking
                .request(TrackingRequest::RequestLocationPermission);
        }
        PermissionStatus::NeedsPrompt | PermissionStatus::Denied => {
            log::warn!("Positions-Berechtigung verweigert");
            state.ui.loading_status = None;
            state.ui.location_error = Some(MSG_LOCATION_DENIED.to_string());
        }
    }
}

/// Übernimmt das Ergebnis eines einmaligen Abrufs.
pub fn apply_fetched_position(
    state: &mut AppState,
    purpose: FetchPurpose,
    result: Result<GeoPoint, TrackingError>,
) {
    let result = result.and_then(|point| {
        if point.is_valid() {
            Ok(point)
        } else {
            Err(TrackingError::InvalidSample(format!("{:?}", point)))
        }
    });

    match (purpose, result) {
        (FetchPurpose::Initial, Ok(point)) => {
            log::info!("Startposition: {:.6}, {:.6}", point.lat, point.lng);
            state.ui.clear_location_status();
            state.tracking.place_overlay_at(point);
            camera::center_on(state, point);
            if !state.tracking.position_watch_active {
                state.tracking.position_watch_active = true;
                state.tracking.request(TrackingRequest::StartPositionWatch);
            }
        }
        (FetchPurpose::Initial, Err(e)) => {
            log::warn!("Startposition nicht verfügbar: {}", e);
            state.ui.loading_status = None;
            state.ui.location_error = Some(location_error_message(&e));
        }
        (FetchPurpose::GoToLocation, Ok(point)) => {
            state.tracking.place_overlay_at(point);
            camera::center_on(state, point);
        }
        (FetchPurpose::GoToLocation, Err(e)) => {
            log::warn!("Aktuelle Position nicht verfügbar: {}", e);
            state.ui.show_notice(MSG_CURRENT_LOCATION_UNAVAILABLE);
        }
    }
}

/// „Zur aktuellen Position": bekannte Position nutzen, sonst einmalig abrufen.
pub fn center_on_current_location(state: &mut AppState) {
    match state.tracking.last_known_position {
        Some(point) => {
            state.tracking.place_overlay_at(point);
            camera::center_on(state, point);
        }
        None => state.tracking.request(TrackingRequest::FetchPosition {
            purpose: FetchPurpose::GoToLocation,
        }),
    }
}

/// Neuer Messwert der Positionsüberwachung.
pub fn apply_position_update(state: &mut AppState, point: GeoPoint) {
    state.tracking.apply_position(point);
}

/// Neuer, bereits normalisierter Kurs.
pub fn apply_heading(state: &mut AppState, degrees: f64) {
    state.tracking.apply_heading(degrees);
}

/// Fehler einer laufenden Überwachung: protokollieren, letzte Werte behalten.
pub fn record_failure(source: &str, error: &TrackingError) {
    log::warn!("Überwachung '{}' meldet Fehler: {}", source, error);
}

/// Kompass-Berechtigung auf Nutzerwunsch anfragen.
pub fn request_compass_permission(state: &mut AppState) {
    state
        .tracking
        .request(TrackingRequest::RequestCompassPermission);
}

/// Wertet das Ergebnis der Kompass-Berechtigung aus.
///
/// Bei Zustimmung (oder ohne nötige Berechtigung) startet die Überwachung,
/// falls sie noch nicht läuft. Nur Nutzer-Anfragen erzeugen einen Hinweis.
pub fn apply_compass_permission(
    state: &mut AppState,
    outcome: CompassPermission,
    user_initiated: bool,
) {
    match &outcome {
        CompassPermission::Granted | CompassPermission::NotRequired => {
            if user_initiated {
                let message = if outcome == CompassPermission::Granted {
                    MSG_COMPASS_GRANTED
                } else {
                    MSG_COMPASS_NOT_REQUIRED
                };
                state.ui.show_notice(message);
            }
            if !state.tracking.heading_watch_active {
                state.tracking.heading_watch_active = true;
                state.tracking.request(TrackingRequest::StartHeadingWatch);
            }
        }
        CompassPermission::Denied => {
            log::info!("Kompass-Berechtigung verweigert");
            if user_initiated {
                state.ui.show_notice(MSG_COMPASS_DENIED);
            }
        }
        CompassPermission::Failed(reason) => {
            log::warn!("Kompass-Berechtigung fehlgeschlagen: {}", reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_queues_permission_check_and_orientation() {
        let mut state = AppState::new();

        start_tracking(&mut state);

        assert_eq!(state.loading_status(), Some(MSG_FETCHING_LOCATION));
        assert_eq!(
            state.tracking.pending_requests(),
            &[
                TrackingRequest::CheckLocationPermission,
                TrackingRequest::SetupOrientation
            ]
        );
    }

    #[test]
    fn prompt_is_requested_only_once() {
        let mut state = AppState::new();
        start_tracking(&mut state);
        state.tracking.take_requests();

        apply_location_permission(&mut state, PermissionStatus::NeedsPrompt, false);
        assert_eq!(
            state.tracking.take_requests(),
            vec![TrackingRequest::RequestLocationPermission]
        );

        apply_location_permission(&mut state, PermissionStatus::NeedsPrompt, true);
        assert!(state.tracking.take_requests().is_empty());
        assert_eq!(state.error_message(), Some(MSG_LOCATION_DENIED));
        assert_eq!(state.loading_status(), None);
    }

    #[test]
    fn initial_fetch_failure_sets_error_message() {
        let mut state = AppState::new();
        start_tracking(&mut state);

        apply_fetched_position(
            &mut state,
            FetchPurpose::Initial,
            Err(TrackingError::Timeout(10_000)),
        );

        assert_eq!(state.loading_status(), None);
        assert_eq!(
            state.error_message(),
            Some("Unable to get location: timed out after 10000 ms")
        );
        assert!(!state.tracking.position_watch_active);
    }

    #[test]
    fn initial_fetch_starts_watch_once() {
        let mut state = AppState::new();
        let point = GeoPoint::new(35.0, 129.0);

        apply_fetched_position(&mut state, FetchPurpose::Initial, Ok(point));
        apply_fetched_position(&mut state, FetchPurpose::Initial, Ok(point));

        let watches = state
            .tracking
            .take_requests()
            .into_iter()
            .filter(|r| *r == TrackingRequest::StartPositionWatch)
            .count();
        assert_eq!(watches, 1);
        assert_eq!(state.view.camera.center, point);
        assert!(state.tracking.overlay.is_some());
    }

    #[test]
    fn invalid_fetched_point_is_treated_as_failure() {
        let mut state = AppState::new();

        apply_fetched_position(
            &mut state,
            FetchPurpose::GoToLocation,
            Ok(GeoPoint::new(f64::NAN, 0.0)),
        );

        assert!(state.tracking.last_known_position.is_none());
        assert_eq!(
            state.ui.notice.as_deref(),
            Some(MSG_CURRENT_LOCATION_UNAVAILABLE)
        );
    }

    #[test]
    fn user_compass_request_shows_notice_and_starts_watch_once() {
        let mut state = AppState::new();

        apply_compass_permission(&mut state, CompassPermission::NotRequired, false);
        assert!(state.ui.notice.is_none());
        apply_compass_permission(&mut state, CompassPermission::Granted, true);

        assert_eq!(state.ui.notice.as_deref(), Some(MSG_COMPASS_GRANTED));
        assert_eq!(
            state.tracking.take_requests(),
            vec![TrackingRequest::StartHeadingWatch]
        );
    }

    #[test]
    fn compass_denied_keeps_watch_stopped() {
        let mut state = AppState::new();

        apply_compass_permission(&mut state, CompassPermission::Denied, true);

        assert_eq!(state.ui.notice.as_deref(), Some(MSG_COMPASS_DENIED));
        assert!(!state.tracking.heading_watch_active);
        assert!(state.tracking.pending_requests().is_empty());
    }
}
