//! Handler für Positions- und Kompass-Tracking.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CompassPermission, FetchPurpose, GeoPoint, PermissionStatus, TrackingError};

/// Start-Sequenz einreihen.
pub fn start(state: &mut AppState) {
    use_cases::tracking::start_tracking(state);
}

/// Auf aktuelle Position zentrieren.
pub fn center_on_current_location(state: &mut AppState) {
    use_cases::tracking::center_on_current_location(state);
}

/// Kompass-Berechtigung anfragen.
pub fn request_compass_permission(state: &mut AppState) {
    use_cases::tracking::request_compass_permission(state);
}

/// Positions-Berechtigung auswerten.
pub fn apply_location_permission(state: &mut AppState, status: PermissionStatus, prompted: bool) {
    use_cases::tracking::apply_location_permission(state, status, prompted);
}

/// Abgerufene Position übernehmen.
pub fn apply_fetched_position(
    state: &mut AppState,
    purpose: FetchPurpose,
    result: Result<GeoPoint, TrackingError>,
) {
    use_cases::tracking::apply_fetched_position(state, purpose, result);
}

/// Überwachte Position übernehmen.
pub fn apply_position_update(state: &mut AppState, point: GeoPoint) {
    use_cases::tracking::apply_position_update(state, point);
}

/// Kurs übernehmen.
pub fn apply_heading(state: &mut AppState, degrees: f64) {
    use_cases::tracking::apply_heading(state, degrees);
}

/// Überwachungsfehler protokollieren.
pub fn record_failure(source: &str, error: &TrackingError) {
    use_cases::tracking::record_failure(source, error);
}

/// Kompass-Berechtigung auswerten.
pub fn apply_compass_permission(
    state: &mut AppState,
    outcome: CompassPermission,
    user_initiated: bool,
) {
    use_cases::tracking::apply_compass_permission(state, outcome, user_initiated);
}
