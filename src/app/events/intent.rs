use crate::core::{
    CompassPermission, FetchPurpose, GeoPoint, HeadingReading, PermissionStatus, TrackingError,
};
use std::time::Instant;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Karte um Screen-Delta verschieben (Drag)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt in Screen-Koordinaten)
    CameraZoom {
        delta_levels: f64,
        focus_screen: Option<glam::Vec2>,
    },

    // ── Modus ───────────────────────────────────────────────────
    /// „Zeichnen" bzw. „Route bearbeiten"
    StartDrawingRequested,
    /// „Stopp" im Zeichenmodus
    StopDrawingRequested,
    /// „Bestätigen"
    ConfirmRouteRequested,
    /// „Löschen" im Zeichenmodus
    ClearDrawingRequested,
    /// „Zurücksetzen"
    ResetRequested,
    /// „Erneut laufen"
    RunAgainRequested,

    // ── Pointer auf der Karte ───────────────────────────────────
    /// Pointer-Down (Screen-Koordinaten relativ zum Viewport)
    StrokeStarted { screen_pos: glam::Vec2 },
    /// Pointer-Move während gedrückt
    StrokeMoved { screen_pos: glam::Vec2 },
    /// Pointer-Up
    StrokeEnded,

    // ── Stop-Geste ──────────────────────────────────────────────
    /// Stop-Button gedrückt
    StopPressStarted { at: Instant },
    /// Frame-Tick während der Stop-Button gehalten wird
    StopPressTicked { now: Instant },
    /// Stop-Button losgelassen
    StopPressReleased { at: Instant },

    // ── Tracking (Nutzer) ───────────────────────────────────────
    /// Tracking beim Start einrichten
    TrackingStartupRequested,
    /// „Zur aktuellen Position"
    GoToCurrentLocationRequested,
    /// Kompass-Berechtigung per Button anfragen
    CompassPermissionRequested,
    /// Hinweis geschlossen
    NoticeDismissed,

    // ── Tracking (Geräte-Dienste) ───────────────────────────────
    /// Ergebnis der Positions-Berechtigung (`prompted` = nach Nachfrage)
    LocationPermissionResolved {
        status: PermissionStatus,
        prompted: bool,
    },
    /// Ergebnis eines einmaligen Positionsabrufs
    PositionFetched {
        purpose: FetchPurpose,
        result: Result<GeoPoint, TrackingError>,
    },
    /// Messwert der Positionsüberwachung
    PositionUpdated { point: GeoPoint },
    /// Fehler der Positionsüberwachung
    PositionWatchFailed { error: TrackingError },
    /// Messwert der Kompass-Überwachung
    HeadingUpdated { reading: HeadingReading },
    /// Fehler der Kompass-Überwachung
    HeadingWatchFailed { error: TrackingError },
    /// Ergebnis der Kompass-Berechtigung
    CompassPermissionResolved {
        outcome: CompassPermission,
        user_initiated: bool,
    },
}
