//! Core-Domänentypen: Geo-Mathematik, Strokes und Route, Modus-Zustandsmaschine, Kamera.

pub mod camera;
/// Geografische Grundtypen
///
/// Punkt, Haversine-Distanz und Bounding-Box. Alle übrigen Module
/// rechnen ausschließlich in Metern auf Basis dieser Funktionen.
pub mod geo;
pub mod heading;
pub mod long_press;
pub mod mode;
pub mod route;
pub mod tracking;

pub use camera::{MapCamera, TILE_SIZE};
pub use geo::{distance_m, GeoBounds, GeoPoint, EARTH_RADIUS_M};
pub use heading::{normalize_degrees, HeadingReading, HeadingSourceKind};
pub use long_press::{
    LongPressConfig, LongPressGesture, LongPressOutcome, LongPressState, LONG_PRESS_HOLD,
    LONG_PRESS_TICK,
};
pub use mode::{Mode, ModeController, ModeError, StopRelease};
pub use route::{Route, RouteDraft, RouteError, Stroke, MIN_STROKE_POINTS};
pub use tracking::{
    CompassPermission, DirectionOverlay, FetchPurpose, PermissionStatus, TrackingError,
};
