//! Long-Press-Geste zum Anhalten einer laufenden Route.
//!
//! Statt zweier unabhängiger Timer (Deadline + Fortschritts-Ticker) wird bei jedem
//! Tick die seit dem Drücken vergangene Zeit gegen eine monotone Uhr geprüft.
//! Fortschritt und Abschluss leiten sich aus derselben Messung ab.

use std::time::{Duration, Instant};

/// Haltedauer bis zum Abschluss der Geste.
pub const LONG_PRESS_HOLD: Duration = Duration::from_millis(1500);
/// Raster, in dem der Fortschritt angezeigt wird.
pub const LONG_PRESS_TICK: Duration = Duration::from_millis(100);

/// Zeitparameter der Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongPressConfig {
    /// Haltedauer bis zum Abschluss
    pub hold: Duration,
    /// Anzeige-Raster für den Fortschritt
    pub tick: Duration,
}

impl Default for LongPressConfig {
    fn default() -> Self {
        Self {
            hold: LONG_PRESS_HOLD,
            tick: LONG_PRESS_TICK,
        }
    }
}

/// Sichtbarer Zustand der Geste für die Präsentationsschicht.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LongPressState {
    /// Geste ist gerade scharf (Finger liegt auf dem Button)
    pub active: bool,
    /// Angezeigter Fortschritt 0..=100
    pub progress_percent: f32,
}

/// Ergebnis eines Ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LongPressOutcome {
    /// Noch nicht lange genug gehalten
    Pending {
        /// Angezeigter Fortschritt 0..100
        progress_percent: f32,
    },
    /// Haltedauer erreicht
    Completed,
}

/// Eine aktive Long-Press-Geste.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongPressGesture {
    started_at: Instant,
    progress_percent: f32,
}

impl LongPressGesture {
    /// Startet die Geste zum Zeitpunkt `at`.
    pub fn start(at: Instant) -> Self {
        Self {
            started_at: at,
            progress_percent: 0.0,
        }
    }

    /// Zeitpunkt des Drückens.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Zuletzt angezeigter Fortschritt.
    pub fn progress_percent(&self) -> f32 {
        self.progress_percent
    }

    /// Maßgebliche Abschlussprüfung: vergangene Haltezeit ≥ Haltedauer.
    pub fn is_complete_at(&self, now: Instant, config: &LongPressConfig) -> bool {
        now.saturating_duration_since(self.started_at) >= config.hold
    }

    /// Fortschritt zum Zeitpunkt `now`, gerastert auf volle Ticks.
    pub fn progress_at(&self, now: Instant, config: &LongPressConfig) -> f32 {
        let hold_ms = config.hold.as_millis().max(1);
        let tick_ms = config.tick.as_millis().max(1);
        let elapsed_ms = now.saturating_duration_since(self.started_at).as_millis();
        let quantized = (elapsed_ms / tick_ms) * tick_ms;
        ((quantized as f64 / hold_ms as f64) * 100.0).min(100.0) as f32
    }

    /// Aktualisiert den angezeigten Fortschritt und prüft den Abschluss.
    pub fn tick(&mut self, now: Instant, config: &LongPressConfig) -> LongPressOutcome {
        if self.is_complete_at(now, config) {
            self.progress_percent = 100.0;
            return LongPressOutcome::Completed;
        }
        self.progress_percent = self.progress_at(now, config);
        LongPressOutcome::Pending {
            progress_percent: self.progress_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_progress_advances_in_tick_steps() {
        let config = LongPressConfig::default();
        let t0 = Instant::now();
        let gesture = LongPressGesture::start(t0);

        assert_relative_eq!(gesture.progress_at(t0 + ms(99), &config), 0.0);
        assert_relative_eq!(
            gesture.progress_at(t0 + ms(100), &config),
            6.666_667,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            gesture.progress_at(t0 + ms(750), &config),
            46.666_668,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_completion_depends_on_elapsed_time_only() {
        let config = LongPressConfig::default();
        let t0 = Instant::now();
        let mut gesture = LongPressGesture::start(t0);

        // Gejitterter Tick kurz vor Ablauf: noch nicht fertig
        assert!(matches!(
            gesture.tick(t0 + ms(1499), &config),
            LongPressOutcome::Pending { .. }
        ));
        assert_eq!(gesture.tick(t0 + ms(1500), &config), LongPressOutcome::Completed);
        assert_relative_eq!(gesture.progress_percent(), 100.0);
    }

    #[test]
    fn test_progress_is_capped() {
        let config = LongPressConfig::default();
        let t0 = Instant::now();
        let gesture = LongPressGesture::start(t0);
        assert_relative_eq!(gesture.progress_at(t0 + ms(9000), &config), 100.0);
    }

    #[test]
    fn test_clock_before_start_counts_as_zero() {
        let config = LongPressConfig::default();
        let t0 = Instant::now() + ms(500);
        let gesture = LongPressGesture::start(t0);
        assert!(!gesture.is_complete_at(t0 - ms(100), &config));
        assert_relative_eq!(gesture.progress_at(t0 - ms(100), &config), 0.0);
    }
}
