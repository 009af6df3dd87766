//! Laufzeit der Geräte-Dienste.
//!
//! Holt die im `AppState` gesammelten [`TrackingRequest`]s ab, führt sie auf
//! Hintergrund-Threads aus und liefert die Ergebnisse als [`AppIntent`]s über
//! einen Kanal zurück. Der UI-Thread leert den Kanal einmal pro Frame; nur
//! dort wird der State verändert.

use super::service::{HeadingCallback, OrientationService, PositionCallback, PositionService};
use super::simulated::{SimulatedOrientation, SimulatedPosition};
use super::watch::WatchHandle;
use crate::app::{AppIntent, AppState, TrackingRequest};
use crate::core::{CompassPermission, PermissionStatus};
use crate::shared::TraceOptions;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Sendet Intents an den UI-Thread und weckt ihn auf.
#[derive(Clone)]
struct Outbox {
    sender: Sender<AppIntent>,
    waker: Waker,
}

impl Outbox {
    fn send(&self, intent: AppIntent) {
        // Empfänger weg = Laufzeit beendet, Ergebnis wird verworfen
        if self.sender.send(intent).is_ok() {
            (self.waker)();
        }
    }
}

/// Besitzt Dienste, laufende Überwachungen und den Ergebnis-Kanal.
pub struct TrackingRuntime {
    position: Arc<dyn PositionService>,
    orientation: Arc<dyn OrientationService>,
    outbox: Outbox,
    receiver: Receiver<AppIntent>,
    watches: Vec<WatchHandle>,
    fetch_timeout: Duration,
    watch_timeout: Duration,
    shut_down: bool,
}

impl TrackingRuntime {
    /// Erstellt die Laufzeit mit beliebigen Dienst-Implementierungen.
    pub fn new(
        position: Arc<dyn PositionService>,
        orientation: Arc<dyn OrientationService>,
        options: &TraceOptions,
    ) -> Self {
        let (sender, receiver) = unbounded();
        Self {
            position,
            orientation,
            outbox: Outbox {
                sender,
                waker: Arc::new(|| {}),
            },
            receiver,
            watches: Vec::new(),
            fetch_timeout: options.initial_fetch_timeout(),
            watch_timeout: options.watch_timeout(),
            shut_down: false,
        }
    }

    /// Erstellt die Laufzeit mit den simulierten Diensten aus den Optionen.
    pub fn simulated(options: &TraceOptions) -> Self {
        Self::new(
            Arc::new(SimulatedPosition::new(options.simulation.clone())),
            Arc::new(SimulatedOrientation::new(options.simulation.clone())),
            options,
        )
    }

    /// Setzt die Funktion, die nach jedem gelieferten Ergebnis aufgerufen wird
    /// (z.B. Repaint-Anforderung des Hosts).
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.outbox.waker = Arc::new(waker);
    }

    /// Anzahl laufender Überwachungen.
    pub fn active_watch_count(&self) -> usize {
        self.watches.iter().filter(|w| !w.is_finished()).count()
    }

    /// Holt offene Aufträge aus dem State und führt sie aus.
    pub fn process_requests(&mut self, state: &mut AppState) {
        for request in state.tracking.take_requests() {
            self.dispatch(request);
        }
    }

    /// Führt einen einzelnen Auftrag aus.
    pub fn dispatch(&mut self, request: TrackingRequest) {
        if self.shut_down {
            log::debug!("Laufzeit beendet, Auftrag verworfen: {:?}", request);
            return;
        }

        match request {
            TrackingRequest::CheckLocationPermission => {
                let position = self.position.clone();
                self.spawn_oneshot("location-permission", move || {
                    AppIntent::LocationPermissionResolved {
                        status: position.check_permission().unwrap_or_else(|e| {
                            log::warn!("Berechtigungsprüfung fehlgeschlagen: {}", e);
                            PermissionStatus::Denied
                        }),
                        prompted: false,
                    }
                });
            }
            TrackingRequest::RequestLocationPermission => {
                let position = self.position.clone();
                self.spawn_oneshot("location-permission", move || {
                    AppIntent::LocationPermissionResolved {
                        status: position.request_permission().unwrap_or_else(|e| {
                            log::warn!("Berechtigungsanfrage fehlgeschlagen: {}", e);
                            PermissionStatus::Denied
                        }),
                        prompted: true,
                    }
                });
            }
            TrackingRequest::FetchPosition { purpose } => {
                let position = self.position.clone();
                let timeout = self.fetch_timeout;
                self.spawn_oneshot("position-fetch", move || AppIntent::PositionFetched {
                    purpose,
                    result: position.current_position(timeout),
                });
            }
            TrackingRequest::StartPositionWatch => self.start_position_watch(),
            TrackingRequest::SetupOrientation => {
                let orientation = self.orientation.clone();
                self.spawn_oneshot("orientation-setup", move || {
                    let outcome = if orientation.needs_permission() {
                        orientation.request_permission()
                    } else {
                        CompassPermission::NotRequired
                    };
                    AppIntent::CompassPermissionResolved {
                        outcome,
                        user_initiated: false,
                    }
                });
            }
            TrackingRequest::RequestCompassPermission => {
                let orientation = self.orientation.clone();
                self.spawn_oneshot("compass-permission", move || {
                    let outcome = if orientation.needs_permission() {
                        orientation.request_permission()
                    } else {
                        CompassPermission::NotRequired
                    };
                    AppIntent::CompassPermissionResolved {
                        outcome,
                        user_initiated: true,
                    }
                });
            }
            TrackingRequest::StartHeadingWatch => self.start_heading_watch(),
        }
    }

    fn start_position_watch(&mut self) {
        let outbox = self.outbox.clone();
        let callback: PositionCallback = Box::new(move |sample| {
            outbox.send(match sample {
                Ok(point) => AppIntent::PositionUpdated { point },
                Err(error) => AppIntent::PositionWatchFailed { error },
            })
        });

        match self.position.watch(self.watch_timeout, callback) {
            Ok(handle) => {
                log::info!("Positionsüberwachung gestartet");
                self.watches.push(handle);
            }
            Err(error) => self.outbox.send(AppIntent::PositionWatchFailed { error }),
        }
    }

    fn start_heading_watch(&mut self) {
        let outbox = self.outbox.clone();
        let callback: HeadingCallback = Box::new(move |sample| {
            outbox.send(match sample {
                Ok(reading) => AppIntent::HeadingUpdated { reading },
                Err(error) => AppIntent::HeadingWatchFailed { error },
            })
        });

        match self.orientation.watch(callback) {
            Ok(handle) => {
                log::info!("Kompass-Überwachung gestartet");
                self.watches.push(handle);
            }
            Err(error) => self.outbox.send(AppIntent::HeadingWatchFailed { error }),
        }
    }

    fn spawn_oneshot<F>(&self, name: &str, job: F)
    where
        F: FnOnce() -> AppIntent + Send + 'static,
    {
        let outbox = self.outbox.clone();
        if let Err(e) = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || outbox.send(job()))
        {
            log::error!("Hintergrund-Auftrag '{}' nicht gestartet: {}", name, e);
        }
    }

    /// Alle bisher gelieferten Ergebnisse, ohne zu blockieren.
    pub fn drain(&self) -> Vec<AppIntent> {
        self.receiver.try_iter().collect()
    }

    /// Wartet höchstens `timeout` auf das nächste Ergebnis.
    pub fn wait_for(&self, timeout: Duration) -> Option<AppIntent> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Beendet alle Überwachungen. Spätere Aufträge werden verworfen.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        let count = self.watches.len();
        for watch in self.watches.drain(..) {
            watch.cancel();
        }
        log::info!("Tracking beendet ({} Überwachungen gestoppt)", count);
    }
}

impl Drop for TrackingRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}
