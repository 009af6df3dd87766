//! Geräte-Anbindung: Dienst-Verträge für Position und Kompass, simulierte
//! Implementierungen und die Laufzeit, die Ergebnisse als `AppIntent`s liefert.

pub mod runtime;
pub mod service;
pub mod simulated;
pub mod watch;

pub use runtime::TrackingRuntime;
pub use service::{HeadingCallback, OrientationService, PositionCallback, PositionService};
pub use simulated::{SimulatedOrientation, SimulatedPosition};
pub use watch::WatchHandle;
