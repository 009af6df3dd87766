//! Modus-Zustandsmaschine: Idle → Drawing → Confirmed (running/paused).

use super::long_press::{LongPressConfig, LongPressGesture, LongPressOutcome, LongPressState};
use super::route::Route;
use std::sync::Arc;
use std::time::Instant;

/// Aktueller Modus des Karten-Bildschirms.
///
/// Die bestätigte Route lebt ausschließlich in `Confirmed`, damit „Route vorhanden"
/// nicht implizit aus einem gesetzten Zeiger abgeleitet werden muss.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    /// Weder Zeichnen noch bestätigte Route
    #[default]
    Idle,
    /// Pointer-Eingaben werden als Strokes aufgezeichnet
    Drawing,
    /// Route bestätigt; `running` unterscheidet Laufen und Pause
    Confirmed {
        /// Bestätigte, flache Route (Arc für O(1)-Clone in die RenderScene)
        route: Arc<Route>,
        /// `true` = läuft, `false` = angehalten
        running: bool,
    },
}

impl Mode {
    /// Kurzname für Logs und Fehlermeldungen.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Idle => "Idle",
            Mode::Drawing => "Drawing",
            Mode::Confirmed { running: true, .. } => "Running",
            Mode::Confirmed { running: false, .. } => "Paused",
        }
    }

    /// Gibt `true` zurück im Zeichenmodus.
    pub fn is_drawing(&self) -> bool {
        matches!(self, Mode::Drawing)
    }

    /// Gibt `true` zurück, solange eine bestätigte Route läuft.
    pub fn is_running(&self) -> bool {
        matches!(self, Mode::Confirmed { running: true, .. })
    }

    /// Gibt `true` zurück, wenn eine Route bestätigt ist (laufend oder pausiert).
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Mode::Confirmed { .. })
    }

    /// Bestätigte Route, falls vorhanden.
    pub fn route(&self) -> Option<&Arc<Route>> {
        match self {
            Mode::Confirmed { route, .. } => Some(route),
            _ => None,
        }
    }

    /// Bestätigen ist aus Idle und Drawing erlaubt.
    pub fn can_confirm(&self) -> bool {
        matches!(self, Mode::Idle | Mode::Drawing)
    }
}

/// Abgelehnter Übergang. Der Zustand bleibt in diesem Fall unverändert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModeError {
    /// Der angefragte Übergang existiert im aktuellen Modus nicht.
    #[error("Übergang '{action}' ist im Modus {from} nicht erlaubt")]
    InvalidTransition {
        /// Modus zum Zeitpunkt der Anfrage
        from: &'static str,
        /// Angefragte Aktion
        action: &'static str,
    },
}

/// Ergebnis beim Loslassen des Stop-Buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopRelease {
    /// Keine Geste aktiv
    Inactive,
    /// Zu früh losgelassen → kein Übergang
    Cancelled,
    /// Lange genug gehalten → Route pausiert
    Completed,
}

/// Besitzt den Modus und die Long-Press-Geste. Einziger Schreiber beider Werte.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: Mode,
    long_press: Option<LongPressGesture>,
    config: LongPressConfig,
}

impl ModeController {
    /// Erstellt den Controller im Modus `Idle`.
    pub fn new(config: LongPressConfig) -> Self {
        Self {
            mode: Mode::Idle,
            long_press: None,
            config,
        }
    }

    /// Aktueller Modus.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Zeitparameter der Long-Press-Geste.
    pub fn long_press_config(&self) -> &LongPressConfig {
        &self.config
    }

    fn reject(&self, action: &'static str) -> ModeError {
        ModeError::InvalidTransition {
            from: self.mode.label(),
            action,
        }
    }

    /// Idle → Drawing, oder Paused → Drawing (Route bearbeiten).
    ///
    /// Beim Bearbeiten wird die bisherige Route zurückgegeben, damit ihre Strokes
    /// wieder in den Entwurf übernommen werden können.
    pub fn begin_drawing(&mut self) -> Result<Option<Route>, ModeError> {
        match std::mem::take(&mut self.mode) {
            Mode::Idle => {
                self.mode = Mode::Drawing;
                Ok(None)
            }
            Mode::Confirmed {
                route,
                running: false,
            } => {
                self.mode = Mode::Drawing;
                Ok(Some(Arc::unwrap_or_clone(route)))
            }
            other => {
                self.mode = other;
                Err(self.reject("begin_drawing"))
            }
        }
    }

    /// Drawing → Idle.
    pub fn end_drawing(&mut self) -> Result<(), ModeError> {
        if !self.mode.is_drawing() {
            return Err(self.reject("end_drawing"));
        }
        self.mode = Mode::Idle;
        Ok(())
    }

    /// Idle/Drawing → Confirmed (running).
    pub fn confirm(&mut self, route: Route) -> Result<(), ModeError> {
        if !self.mode.can_confirm() {
            return Err(self.reject("confirm"));
        }
        self.long_press = None;
        self.mode = Mode::Confirmed {
            route: Arc::new(route),
            running: true,
        };
        Ok(())
    }

    /// Paused → Running („erneut laufen").
    pub fn resume(&mut self) -> Result<(), ModeError> {
        match &mut self.mode {
            Mode::Confirmed { running, .. } if !*running => {
                *running = true;
                Ok(())
            }
            _ => Err(self.reject("resume")),
        }
    }

    /// Beliebiger Modus → Idle. Verwirft Route und Geste, gibt den alten Modus zurück.
    pub fn reset(&mut self) -> Mode {
        self.long_press = None;
        std::mem::take(&mut self.mode)
    }

    /// Stop-Button gedrückt: Geste scharf schalten (nur während die Route läuft).
    pub fn press_stop(&mut self, at: Instant) -> Result<(), ModeError> {
        if !self.mode.is_running() {
            return Err(self.reject("press_stop"));
        }
        self.long_press = Some(LongPressGesture::start(at));
        Ok(())
    }

    /// Tick während der Geste. Gibt `None` zurück, wenn keine Geste aktiv ist.
    pub fn tick_stop(&mut self, now: Instant) -> Option<LongPressOutcome> {
        let gesture = self.long_press.as_mut()?;
        let outcome = gesture.tick(now, &self.config);
        if outcome == LongPressOutcome::Completed {
            self.complete_stop();
        }
        Some(outcome)
    }

    /// Stop-Button losgelassen.
    pub fn release_stop(&mut self, at: Instant) -> StopRelease {
        let Some(gesture) = self.long_press.take() else {
            return StopRelease::Inactive;
        };
        if gesture.is_complete_at(at, &self.config) {
            self.complete_stop();
            StopRelease::Completed
        } else {
            StopRelease::Cancelled
        }
    }

    fn complete_stop(&mut self) {
        self.long_press = None;
        if let Mode::Confirmed { running, .. } = &mut self.mode {
            *running = false;
        }
    }

    /// Sichtbarer Long-Press-Zustand.
    pub fn long_press_state(&self) -> LongPressState {
        match &self.long_press {
            Some(gesture) => LongPressState {
                active: true,
                progress_percent: gesture.progress_percent(),
            },
            None => LongPressState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeoPoint, RouteDraft, Stroke};
    use std::time::Duration;

    fn route() -> Route {
        let mut draft = RouteDraft::new();
        draft.commit(
            Stroke::from_points(vec![GeoPoint::new(37.0, 127.0), GeoPoint::new(37.0, 127.001)])
                .expect("Stroke erwartet"),
        );
        draft.take_route().expect("Route erwartet")
    }

    fn running_controller() -> ModeController {
        let mut ctrl = ModeController::default();
        ctrl.begin_drawing().expect("Idle → Drawing");
        ctrl.confirm(route()).expect("Drawing → Confirmed");
        ctrl
    }

    #[test]
    fn test_initial_mode_is_idle() {
        assert_eq!(ModeController::default().mode(), &Mode::Idle);
    }

    #[test]
    fn test_full_cycle() {
        let mut ctrl = running_controller();
        assert!(ctrl.mode().is_running());

        let t0 = Instant::now();
        ctrl.press_stop(t0).expect("Geste erwartet");
        assert_eq!(
            ctrl.release_stop(t0 + Duration::from_millis(1600)),
            StopRelease::Completed
        );
        assert_eq!(ctrl.mode().label(), "Paused");

        ctrl.resume().expect("Paused → Running");
        assert!(ctrl.mode().is_running());

        let old = ctrl.reset();
        assert!(old.is_confirmed());
        assert_eq!(ctrl.mode(), &Mode::Idle);
    }

    #[test]
    fn test_early_release_keeps_running() {
        let mut ctrl = running_controller();
        let t0 = Instant::now();
        ctrl.press_stop(t0).expect("Geste erwartet");
        ctrl.tick_stop(t0 + Duration::from_millis(1400));
        assert!(ctrl.long_press_state().progress_percent > 90.0);

        assert_eq!(
            ctrl.release_stop(t0 + Duration::from_millis(1450)),
            StopRelease::Cancelled
        );
        assert!(ctrl.mode().is_running());
        assert_eq!(ctrl.long_press_state(), LongPressState::default());
    }

    #[test]
    fn test_tick_completes_gesture() {
        let mut ctrl = running_controller();
        let t0 = Instant::now();
        ctrl.press_stop(t0).expect("Geste erwartet");
        assert_eq!(
            ctrl.tick_stop(t0 + Duration::from_millis(1500)),
            Some(LongPressOutcome::Completed)
        );
        assert!(!ctrl.mode().is_running());
        assert!(ctrl.mode().is_confirmed());
        assert!(!ctrl.long_press_state().active);
        assert_eq!(ctrl.release_stop(t0), StopRelease::Inactive);
    }

    #[test]
    fn test_press_stop_rejected_outside_running() {
        let mut ctrl = ModeController::default();
        assert!(ctrl.press_stop(Instant::now()).is_err());
        assert!(!ctrl.long_press_state().active);
    }

    #[test]
    fn test_begin_drawing_rejected_while_running() {
        let mut ctrl = running_controller();
        let err = ctrl.begin_drawing().expect_err("Running → Drawing darf nicht gehen");
        assert_eq!(
            err,
            ModeError::InvalidTransition {
                from: "Running",
                action: "begin_drawing"
            }
        );
        assert!(ctrl.mode().is_running());
    }

    #[test]
    fn test_begin_drawing_from_paused_returns_route() {
        let mut ctrl = running_controller();
        let t0 = Instant::now();
        ctrl.press_stop(t0).expect("Geste erwartet");
        ctrl.tick_stop(t0 + Duration::from_secs(2));

        let restored = ctrl.begin_drawing().expect("Paused → Drawing");
        assert_eq!(restored, Some(route()));
        assert!(ctrl.mode().is_drawing());
    }

    #[test]
    fn test_confirm_rejected_when_confirmed() {
        let mut ctrl = running_controller();
        assert!(ctrl.confirm(route()).is_err());
    }

    #[test]
    fn test_reset_cancels_gesture() {
        let mut ctrl = running_controller();
        ctrl.press_stop(Instant::now()).expect("Geste erwartet");
        ctrl.reset();
        assert!(!ctrl.long_press_state().active);
    }
}
