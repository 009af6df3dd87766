use crate::core::{DirectionOverlay, FetchPurpose, GeoPoint};

/// Auftrag an die Geräte-Laufzeit. Wird im State gesammelt und vom Host abgeholt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingRequest {
    /// Positions-Berechtigung prüfen
    CheckLocationPermission,
    /// Positions-Berechtigung anfragen
    RequestLocationPermission,
    /// Einmaliger Positionsabruf
    FetchPosition {
        /// Anlass des Abrufs
        purpose: FetchPurpose,
    },
    /// Fortlaufende Positionsüberwachung starten
    StartPositionWatch,
    /// Kompass-Quelle einrichten (ggf. mit Berechtigung)
    SetupOrientation,
    /// Kompass-Berechtigung auf Nutzerwunsch anfragen
    RequestCompassPermission,
    /// Kompass-Überwachung starten
    StartHeadingWatch,
}

/// Zuletzt bekannte Geräteposition, Kurs und Richtungsmarker.
///
/// Wird nur über Nachrichten der Geräte-Dienste beschrieben, nie von
/// Zeichen-Operationen.
#[derive(Debug, Clone, Default)]
pub struct TrackingState {
    /// Zuletzt akzeptierte Position
    pub last_known_position: Option<GeoPoint>,
    /// Zuletzt akzeptierter Kurs in Grad `[0, 360)`
    pub heading_degrees: f64,
    /// Richtungsmarker auf der Karte
    pub overlay: Option<DirectionOverlay>,
    /// Positionsüberwachung wurde gestartet
    pub position_watch_active: bool,
    /// Kompass-Überwachung wurde gestartet
    pub heading_watch_active: bool,
    pending: Vec<TrackingRequest>,
}

impl TrackingState {
    /// Erstellt einen leeren Tracking-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reiht einen Auftrag an die Geräte-Laufzeit ein.
    pub fn request(&mut self, request: TrackingRequest) {
        self.pending.push(request);
    }

    /// Noch nicht abgeholte Aufträge.
    pub fn pending_requests(&self) -> &[TrackingRequest] {
        &self.pending
    }

    /// Entnimmt alle offenen Aufträge in Reihenfolge.
    pub fn take_requests(&mut self) -> Vec<TrackingRequest> {
        std::mem::take(&mut self.pending)
    }

    /// Neue Position aus der Überwachung: speichern und einen vorhandenen
    /// Marker mitziehen (Drehung bleibt).
    pub fn apply_position(&mut self, point: GeoPoint) {
        self.last_known_position = Some(point);
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.position = point;
        }
    }

    /// Neuer Kurs: speichern und den Marker an der (evtl. veralteten) Position
    /// setzen bzw. drehen. Ohne bekannte Position wird nichts gezeichnet.
    pub fn apply_heading(&mut self, degrees: f64) {
        self.heading_degrees = degrees;
        if let Some(position) = self.last_known_position {
            self.overlay = Some(DirectionOverlay {
                position,
                heading_degrees: degrees,
            });
        }
    }

    /// Position explizit ermittelt (Startabruf / „zur Position"): speichern
    /// und Marker mit aktuellem Kurs platzieren.
    pub fn place_overlay_at(&mut self, point: GeoPoint) {
        self.last_known_position = Some(point);
        self.overlay = Some(DirectionOverlay {
            position: point,
            heading_degrees: self.heading_degrees,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_update_without_overlay_only_stores() {
        let mut tracking = TrackingState::new();
        tracking.apply_position(GeoPoint::new(37.0, 127.0));
        assert_eq!(tracking.last_known_position, Some(GeoPoint::new(37.0, 127.0)));
        assert!(tracking.overlay.is_none());
    }

    #[test]
    fn test_heading_without_position_draws_nothing() {
        let mut tracking = TrackingState::new();
        tracking.apply_heading(90.0);
        assert_eq!(tracking.heading_degrees, 90.0);
        assert!(tracking.overlay.is_none());
    }

    #[test]
    fn test_heading_places_overlay_at_stale_position() {
        let mut tracking = TrackingState::new();
        tracking.apply_position(GeoPoint::new(37.0, 127.0));
        tracking.apply_heading(45.0);
        assert_eq!(
            tracking.overlay,
            Some(DirectionOverlay {
                position: GeoPoint::new(37.0, 127.0),
                heading_degrees: 45.0
            })
        );

        // Position wandert, Drehung bleibt
        tracking.apply_position(GeoPoint::new(37.001, 127.0));
        let overlay = tracking.overlay.expect("Marker erwartet");
        assert_eq!(overlay.position, GeoPoint::new(37.001, 127.0));
        assert_eq!(overlay.heading_degrees, 45.0);
    }

    #[test]
    fn test_requests_are_taken_in_order() {
        let mut tracking = TrackingState::new();
        tracking.request(TrackingRequest::CheckLocationPermission);
        tracking.request(TrackingRequest::SetupOrientation);
        assert_eq!(
            tracking.take_requests(),
            vec![
                TrackingRequest::CheckLocationPermission,
                TrackingRequest::SetupOrientation
            ]
        );
        assert!(tracking.pending_requests().is_empty());
    }
}
