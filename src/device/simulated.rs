//! Simulierte Geräte-Dienste: Kreisbahn um einen Startpunkt mit passendem Kurs.
//!
//! Ersetzt echtes GPS und echten Kompass auf dem Desktop und in Tests.
//! Berechtigungen verhalten sich gemäß [`SimulationOptions`].

use super::service::{HeadingCallback, OrientationService, PositionCallback, PositionService};
use super::watch::WatchHandle;
use crate::core::{
    normalize_degrees, CompassPermission, GeoPoint, HeadingReading, HeadingSourceKind,
    PermissionStatus, TrackingError, EARTH_RADIUS_M,
};
use crate::shared::options::{SimulatedCompassPermission, SimulatedLocationPermission};
use crate::shared::SimulationOptions;
use std::time::{Duration, Instant};

/// Position und Kurs auf der Kreisbahn nach `elapsed`.
///
/// Start im Norden des Mittelpunkts, Umlauf im Uhrzeigersinn.
pub fn circle_sample(options: &SimulationOptions, elapsed: Duration) -> (GeoPoint, f64) {
    let lap = options.lap_seconds.max(1.0);
    let angle = std::f64::consts::TAU * (elapsed.as_secs_f64() / lap);

    let north_m = options.radius_m * angle.cos();
    let east_m = options.radius_m * angle.sin();
    let d_lat = (north_m / EARTH_RADIUS_M).to_degrees();
    let d_lng = (east_m / (EARTH_RADIUS_M * options.start.lat.to_radians().cos())).to_degrees();

    let point = GeoPoint::new(options.start.lat + d_lat, options.start.lng + d_lng);
    let heading = normalize_degrees(angle.to_degrees() + 90.0);
    (point, heading)
}

/// Simulierter Positionsdienst.
#[derive(Debug, Clone)]
pub struct SimulatedPosition {
    options: SimulationOptions,
    started: Instant,
}

impl SimulatedPosition {
    /// Erstellt den Dienst; die Kreisbahn beginnt jetzt.
    pub fn new(options: SimulationOptions) -> Self {
        Self {
            options,
            started: Instant::now(),
        }
    }
}

impl PositionService for SimulatedPosition {
    fn check_permission(&self) -> Result<PermissionStatus, TrackingError> {
        Ok(match self.options.location_permission {
            SimulatedLocationPermission::Granted => PermissionStatus::Granted,
            SimulatedLocationPermission::Denied => PermissionStatus::Denied,
            SimulatedLocationPermission::PromptThenGranted
            | SimulatedLocationPermission::PromptThenDenied => PermissionStatus::NeedsPrompt,
        })
    }

    fn request_permission(&self) -> Result<PermissionStatus, TrackingError> {
        Ok(match self.options.location_permission {
            SimulatedLocationPermission::Granted
            | SimulatedLocationPermission::PromptThenGranted => PermissionStatus::Granted,
            SimulatedLocationPermission::Denied
            | SimulatedLocationPermission::PromptThenDenied => PermissionStatus::Denied,
        })
    }

    fn current_position(&self, timeout: Duration) -> Result<GeoPoint, TrackingError> {
        if self.options.fail_initial_fetch {
            return Err(TrackingError::Timeout(timeout.as_millis() as u64));
        }
        Ok(circle_sample(&self.options, self.started.elapsed()).0)
    }

    fn watch(
        &self,
        timeout: Duration,
        callback: PositionCallback,
    ) -> Result<WatchHandle, TrackingError> {
        let options = self.options.clone();
        let started = self.started;
        let interval = Duration::from_millis(options.position_interval_ms.max(1));

        WatchHandle::spawn("position-watch", interval, move || {
            if interval > timeout {
                callback(Err(TrackingError::Timeout(timeout.as_millis() as u64)));
            } else {
                callback(Ok(circle_sample(&options, started.elapsed()).0));
            }
            true
        })
    }
}

/// Simulierter Orientierungsdienst.
#[derive(Debug, Clone)]
pub struct SimulatedOrientation {
    options: SimulationOptions,
    started: Instant,
}

impl SimulatedOrientation {
    /// Erstellt den Dienst; der Kurs folgt derselben Kreisbahn wie die Position.
    pub fn new(options: SimulationOptions) -> Self {
        Self {
            options,
            started: Instant::now(),
        }
    }

    fn reading(source: HeadingSourceKind, heading: f64) -> HeadingReading {
        match source {
            HeadingSourceKind::Compass => HeadingReading::Compass(heading),
            HeadingSourceKind::RawAlpha => HeadingReading::RawAlpha(normalize_degrees(360.0 - heading)),
        }
    }
}

impl OrientationService for SimulatedOrientation {
    fn needs_permission(&self) -> bool {
        self.options.compass_permission != SimulatedCompassPermission::NotRequired
    }

    fn request_permission(&self) -> CompassPermission {
        match self.options.compass_permission {
            SimulatedCompassPermission::NotRequired => CompassPermission::NotRequired,
            SimulatedCompassPermission::Granted => CompassPermission::Granted,
            SimulatedCompassPermission::Denied => CompassPermission::Denied,
        }
    }

    fn watch(&self, callback: HeadingCallback) -> Result<WatchHandle, TrackingError> {
        let options = self.options.clone();
        let started = self.started;
        let interval = Duration::from_millis(options.heading_interval_ms.max(1));

        WatchHandle::spawn("heading-watch", interval, move || {
            let (_, heading) = circle_sample(&options, started.elapsed());
            callback(Ok(Self::reading(options.heading_source, heading)));
            true
        })
    }
}
