//! Zentrale Konfiguration für Route Trace.
//!
//! `TraceOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{GeoPoint, HeadingSourceKind, LongPressConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Zeichnen ────────────────────────────────────────────────────────

/// Mindestabstand in Metern, ab dem ein weiterer Pointer-Punkt aufgezeichnet wird.
pub const MIN_SAMPLE_DISTANCE_M: f64 = 3.0;
/// Farbe der Entwurfs-Polylinie (RGBA: Rot).
pub const DRAFT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Linienstärke der Entwurfs-Polylinie in Pixeln.
pub const DRAFT_WIDTH_PX: f32 = 4.0;
/// Farbe der bestätigten Route (RGBA: Blau, 80 % deckend).
pub const ROUTE_COLOR: [f32; 4] = [0.259, 0.522, 0.957, 0.8];
/// Linienstärke der bestätigten Route in Pixeln.
pub const ROUTE_WIDTH_PX: f32 = 6.0;

// ── Long-Press ──────────────────────────────────────────────────────

/// Haltedauer der Stop-Geste in Millisekunden.
pub const LONG_PRESS_HOLD_MS: u64 = 1500;
/// Fortschritts-Raster der Stop-Geste in Millisekunden.
pub const LONG_PRESS_TICK_MS: u64 = 100;

// ── Tracking ────────────────────────────────────────────────────────

/// Timeout des ersten Positionsabrufs.
pub const INITIAL_FETCH_TIMEOUT_MS: u64 = 10_000;
/// Timeout pro Messwert der fortlaufenden Positionsüberwachung.
pub const WATCH_TIMEOUT_MS: u64 = 5_000;
/// Zoomstufe beim Zentrieren auf die Geräteposition.
pub const LOCATE_ZOOM: f64 = 15.0;
/// Rand in Pixeln beim Einpassen der bestätigten Route.
pub const FIT_BOUNDS_PADDING_PX: f32 = 50.0;

// ── Karte ───────────────────────────────────────────────────────────

/// Startmittelpunkt ohne bekannte Position (Seoul, Rathaus).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::new(37.5665, 126.9780);
/// Start-Zoomstufe.
pub const DEFAULT_ZOOM: f64 = 15.0;
/// Zoomstufen pro Mausrad-Raste.
pub const SCROLL_ZOOM_STEP: f64 = 0.25;

/// Einstellungen für die Stroke-Aufzeichnung und deren Darstellung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingOptions {
    /// Mindestabstand zwischen zwei aufgezeichneten Punkten (Meter)
    pub min_sample_distance_m: f64,
    /// Farbe der Entwurfs-Polylinie (RGBA)
    pub draft_color: [f32; 4],
    /// Linienstärke der Entwurfs-Polylinie (Pixel)
    pub draft_width_px: f32,
    /// Farbe der bestätigten Route (RGBA)
    pub route_color: [f32; 4],
    /// Linienstärke der bestätigten Route (Pixel)
    pub route_width_px: f32,
}

impl Default for DrawingOptions {
    fn default() -> Self {
        Self {
            min_sample_distance_m: MIN_SAMPLE_DISTANCE_M,
            draft_color: DRAFT_COLOR,
            draft_width_px: DRAFT_WIDTH_PX,
            route_color: ROUTE_COLOR,
            route_width_px: ROUTE_WIDTH_PX,
        }
    }
}

/// Zeitparameter der Stop-Geste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LongPressOptions {
    /// Haltedauer in Millisekunden
    pub hold_ms: u64,
    /// Fortschritts-Raster in Millisekunden
    pub tick_ms: u64,
}

impl Default for LongPressOptions {
    fn default() -> Self {
        Self {
            hold_ms: LONG_PRESS_HOLD_MS,
            tick_ms: LONG_PRESS_TICK_MS,
        }
    }
}

/// Zeitlimits und Kamera-Verhalten des Trackings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingOptions {
    /// Timeout des ersten Abrufs (Millisekunden)
    pub initial_fetch_timeout_ms: u64,
    /// Timeout pro Messwert der Überwachung (Millisekunden)
    pub watch_timeout_ms: u64,
    /// Zoomstufe beim Zentrieren auf die Position
    pub locate_zoom: f64,
    /// Rand beim Einpassen der Route (Pixel)
    pub fit_bounds_padding_px: f32,
}

impl Default for TrackingOptions {
    fn default() -> Self {
        Self {
            initial_fetch_timeout_ms: INITIAL_FETCH_TIMEOUT_MS,
            watch_timeout_ms: WATCH_TIMEOUT_MS,
            locate_zoom: LOCATE_ZOOM,
            fit_bounds_padding_px: FIT_BOUNDS_PADDING_PX,
        }
    }
}

/// Startansicht der Karte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Mittelpunkt ohne bekannte Position
    pub default_center: GeoPoint,
    /// Start-Zoomstufe
    pub default_zoom: f64,
    /// Zoomstufen pro Mausrad-Raste
    pub scroll_zoom_step: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
        }
    }
}

/// Verhalten der simulierten Positions-Berechtigung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulatedLocationPermission {
    /// Sofort erlaubt
    #[default]
    Granted,
    /// Dauerhaft verweigert
    Denied,
    /// Nachfrage nötig, Nutzer stimmt zu
    PromptThenGranted,
    /// Nachfrage nötig, Nutzer lehnt ab
    PromptThenDenied,
}

/// Verhalten der simulierten Kompass-Berechtigung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulatedCompassPermission {
    /// Quelle braucht keine Berechtigung
    #[default]
    NotRequired,
    /// Nachfrage nötig, Nutzer stimmt zu
    Granted,
    /// Nachfrage nötig, Nutzer lehnt ab
    Denied,
}

/// Parameter der simulierten Geräte-Dienste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationOptions {
    /// Mittelpunkt der simulierten Kreisbahn
    pub start: GeoPoint,
    /// Radius der Kreisbahn (Meter)
    pub radius_m: f64,
    /// Dauer einer vollen Runde (Sekunden)
    pub lap_seconds: f64,
    /// Intervall der Positions-Messwerte (Millisekunden)
    pub position_interval_ms: u64,
    /// Intervall der Kompass-Messwerte (Millisekunden)
    pub heading_interval_ms: u64,
    /// Art der Kompass-Quelle
    pub heading_source: HeadingSourceKind,
    /// Verhalten der Positions-Berechtigung
    pub location_permission: SimulatedLocationPermission,
    /// Verhalten der Kompass-Berechtigung
    pub compass_permission: SimulatedCompassPermission,
    /// Erster Abruf schlägt fehl (für Fehlerpfad-Tests)
    pub fail_initial_fetch: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            start: DEFAULT_CENTER,
            radius_m: 150.0,
            lap_seconds: 120.0,
            position_interval_ms: 1000,
            heading_interval_ms: 200,
            heading_source: HeadingSourceKind::Compass,
            location_permission: SimulatedLocationPermission::Granted,
            compass_permission: SimulatedCompassPermission::NotRequired,
            fail_initial_fetch: false,
        }
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `route_trace.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraceOptions {
    /// Stroke-Aufzeichnung und Polylinien
    #[serde(default)]
    pub drawing: DrawingOptions,
    /// Stop-Geste
    #[serde(default)]
    pub long_press: LongPressOptions,
    /// Positions- und Kompass-Tracking
    #[serde(default)]
    pub tracking: TrackingOptions,
    /// Startansicht
    #[serde(default)]
    pub map: MapOptions,
    /// Simulierte Geräte-Dienste
    #[serde(default)]
    pub simulation: SimulationOptions,
}

impl TraceOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("route_trace"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("route_trace.toml")
    }

    /// Zeitparameter der Stop-Geste als Core-Typ.
    ///
    /// Ein Tick von 0 ms wird auf 1 ms angehoben.
    pub fn long_press_config(&self) -> LongPressConfig {
        LongPressConfig {
            hold: Duration::from_millis(self.long_press.hold_ms),
            tick: Duration::from_millis(self.long_press.tick_ms.max(1)),
        }
    }

    /// Timeout des ersten Positionsabrufs.
    pub fn initial_fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.tracking.initial_fetch_timeout_ms)
    }

    /// Timeout pro Messwert der Positionsüberwachung.
    pub fn watch_timeout(&self) -> Duration {
        Duration::from_millis(self.tracking.watch_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let opts = TraceOptions::default();
        assert_eq!(opts.drawing.min_sample_distance_m, MIN_SAMPLE_DISTANCE_M);
        assert_eq!(
            opts.long_press_config(),
            LongPressConfig::default(),
            "Standard-Geste: 1500 ms / 100 ms"
        );
        assert_eq!(opts.initial_fetch_timeout(), Duration::from_secs(10));
        assert_eq!(opts.watch_timeout(), Duration::from_secs(5));
        assert_eq!(opts.map.default_center, DEFAULT_CENTER);
    }

    #[test]
    fn test_partial_toml_uses_serde_defaults() {
        let opts: TraceOptions = toml::from_str(
            r#"
            [drawing]
            min_sample_distance_m = 5.0

            [simulation]
            heading_source = "raw_alpha"
            location_permission = "prompt_then_denied"
            "#,
        )
        .expect("Teil-TOML sollte parsebar sein");

        assert_eq!(opts.drawing.min_sample_distance_m, 5.0);
        assert_eq!(opts.drawing.draft_width_px, DRAFT_WIDTH_PX);
        assert_eq!(opts.long_press.hold_ms, LONG_PRESS_HOLD_MS);
        assert_eq!(opts.simulation.heading_source, HeadingSourceKind::RawAlpha);
        assert_eq!(
            opts.simulation.location_permission,
            SimulatedLocationPermission::PromptThenDenied
        );
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = TraceOptions::default();
        opts.long_press.hold_ms = 2000;
        opts.simulation.fail_initial_fetch = true;

        let text = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let back: TraceOptions = toml::from_str(&text).expect("Deserialisierung erwartet");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("route_trace_does_not_exist_4711.toml");
        assert_eq!(TraceOptions::load_from_file(&path), TraceOptions::default());
    }

    #[test]
    fn test_zero_tick_is_raised() {
        let mut opts = TraceOptions::default();
        opts.long_press.tick_ms = 0;
        assert_eq!(opts.long_press_config().tick, Duration::from_millis(1));
    }
}
