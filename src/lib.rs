//! Route Trace Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod device;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, PathRecorder, UiState, ViewState};
pub use core::{
    GeoBounds, GeoPoint, HeadingReading, MapCamera, Mode, ModeController, Route, RouteDraft,
    Stroke,
};
pub use device::{OrientationService, PositionService, TrackingRuntime};
pub use shared::{RenderScene, TraceOptions};
