//! Verträge der Geräte-Dienste.
//!
//! Alle Methoden dürfen blockieren; die Laufzeit ruft sie nie vom UI-Thread auf.

use super::watch::WatchHandle;
use crate::core::{CompassPermission, GeoPoint, HeadingReading, PermissionStatus, TrackingError};
use std::time::Duration;

/// Empfänger der Messwerte einer Positionsüberwachung.
pub type PositionCallback = Box<dyn Fn(Result<GeoPoint, TrackingError>) + Send + 'static>;
/// Empfänger der Messwerte einer Kompass-Überwachung.
pub type HeadingCallback = Box<dyn Fn(Result<HeadingReading, TrackingError>) + Send + 'static>;

/// Positionsdienst des Geräts.
pub trait PositionService: Send + Sync {
    /// Aktueller Berechtigungsstatus ohne Nachfrage.
    fn check_permission(&self) -> Result<PermissionStatus, TrackingError>;

    /// Fragt den Nutzer nach der Berechtigung.
    fn request_permission(&self) -> Result<PermissionStatus, TrackingError>;

    /// Einmaliger Abruf mit hoher Genauigkeit.
    fn current_position(&self, timeout: Duration) -> Result<GeoPoint, TrackingError>;

    /// Startet die fortlaufende Überwachung. Die Überwachung endet mit dem Handle.
    fn watch(
        &self,
        timeout: Duration,
        callback: PositionCallback,
    ) -> Result<WatchHandle, TrackingError>;
}

/// Orientierungsdienst (Kompass) des Geräts.
pub trait OrientationService: Send + Sync {
    /// Gibt `true` zurück, wenn vor dem Überwachen eine Berechtigung nötig ist.
    fn needs_permission(&self) -> bool;

    /// Fragt den Nutzer nach der Berechtigung.
    fn request_permission(&self) -> CompassPermission;

    /// Startet die fortlaufende Überwachung. Die Überwachung endet mit dem Handle.
    fn watch(&self, callback: HeadingCallback) -> Result<WatchHandle, TrackingError>;
}
