use crate::core::{CompassPermission, FetchPurpose, GeoPoint, PermissionStatus, TrackingError};
use std::time::Instant;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Screen-Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen
    ZoomCamera {
        delta_levels: f64,
        focus_screen: Option<glam::Vec2>,
    },

    // ── Modus ───────────────────────────────────────────────────
    /// Idle/Paused → Drawing
    BeginDrawing,
    /// Drawing → Idle
    EndDrawing,
    /// Entwurf bestätigen
    ConfirmRoute,
    /// Entwurf und laufenden Stroke verwerfen
    ClearDrawing,
    /// Alles zurücksetzen → Idle
    ResetAll,
    /// Paused → Running
    ResumeRoute,

    // ── Stroke ──────────────────────────────────────────────────
    /// Stroke beginnen
    BeginStroke { point: GeoPoint },
    /// Punkt an laufenden Stroke anhängen
    ExtendStroke { point: GeoPoint },
    /// Laufenden Stroke abschließen
    FinishStroke,

    // ── Stop-Geste ──────────────────────────────────────────────
    /// Geste scharf schalten
    ArmStopGesture { at: Instant },
    /// Geste fortschreiben
    TickStopGesture { now: Instant },
    /// Geste beenden
    ReleaseStopGesture { at: Instant },

    // ── Tracking ────────────────────────────────────────────────
    /// Start-Sequenz einreihen
    StartTracking,
    /// Auf bekannte Position zentrieren oder neu abrufen
    CenterOnCurrentLocation,
    /// Kompass-Berechtigung anfragen
    RequestCompassPermission,
    /// Positions-Berechtigung auswerten
    ApplyLocationPermission {
        status: PermissionStatus,
        prompted: bool,
    },
    /// Abgerufene Position übernehmen
    ApplyFetchedPosition {
        purpose: FetchPurpose,
        result: Result<GeoPoint, TrackingError>,
    },
    /// Überwachte Position übernehmen
    ApplyPositionUpdate { point: GeoPoint },
    /// Normalisierten Kurs übernehmen
    ApplyHeading { degrees: f64 },
    /// Fehler eines Geräte-Dienstes protokollieren
    RecordTrackingFailure {
        source: &'static str,
        error: TrackingError,
    },
    /// Kompass-Berechtigung auswerten
    ApplyCompassPermission {
        outcome: CompassPermission,
        user_initiated: bool,
    },
    /// Hinweis schließen
    DismissNotice,
}
