//! Datentypen rund um Positions- und Kompass-Tracking.

use super::geo::GeoPoint;

/// Dreiwertiger Berechtigungsstatus des Positionsdienstes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Zugriff erlaubt
    Granted,
    /// Zugriff verweigert
    Denied,
    /// Noch nicht entschieden, Nachfrage nötig
    NeedsPrompt,
}

/// Ergebnis einer Kompass-Berechtigungsanfrage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompassPermission {
    /// Zugriff erlaubt
    Granted,
    /// Zugriff verweigert
    Denied,
    /// Die Quelle braucht keine Berechtigung
    NotRequired,
    /// Anfrage selbst ist fehlgeschlagen
    Failed(String),
}

/// Anlass eines einmaligen Positionsabrufs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPurpose {
    /// Erster Abruf beim Start
    Initial,
    /// „Zur aktuellen Position" ohne bekannte Position
    GoToLocation,
}

/// Fehler der Geräte-Dienste.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrackingError {
    /// Berechtigung fehlt
    #[error("permission denied")]
    PermissionDenied,
    /// Kein Messwert innerhalb des Timeouts
    #[error("timed out after {0} ms")]
    Timeout(u64),
    /// Dienst liefert keine Werte
    #[error("position unavailable: {0}")]
    Unavailable(String),
    /// Messwert außerhalb des gültigen Bereichs
    #[error("invalid sample: {0}")]
    InvalidSample(String),
}

/// Richtungsmarker an der Geräteposition, gedreht um den Kurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionOverlay {
    /// Position des Markers
    pub position: GeoPoint,
    /// Kurs in Grad `[0, 360)`
    pub heading_degrees: f64,
}
