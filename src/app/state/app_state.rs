use crate::app::CommandLog;
use crate::core::{MapCamera, Mode, ModeController};
use crate::shared::TraceOptions;

use super::{DrawingState, TrackingState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Modus-Zustandsmaschine inkl. bestätigter Route und Stop-Geste
    pub modes: ModeController,
    /// Laufender Stroke und Entwurf
    pub drawing: DrawingState,
    /// Geräteposition, Kurs und Richtungsmarker
    pub tracking: TrackingState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: TraceOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(TraceOptions::default())
    }

    /// Erstellt einen App-State und übernimmt die Optionen in Recorder, Geste und Kamera.
    pub fn with_options(options: TraceOptions) -> Self {
        let mut view = ViewState::new();
        view.camera = MapCamera::new(options.map.default_center, options.map.default_zoom);

        Self {
            modes: ModeController::new(options.long_press_config()),
            drawing: DrawingState::new(options.drawing.min_sample_distance_m),
            tracking: TrackingState::new(),
            view,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Aktueller Modus.
    pub fn mode(&self) -> &Mode {
        self.modes.mode()
    }

    /// Mindestens ein Stroke ist übernommen.
    pub fn has_path(&self) -> bool {
        !self.drawing.draft.is_empty()
    }

    /// Zeichenmodus aktiv.
    pub fn is_drawing_mode(&self) -> bool {
        self.mode().is_drawing()
    }

    /// Bestätigte Route läuft.
    pub fn is_running(&self) -> bool {
        self.mode().is_running()
    }

    /// Zuletzt bekannter Kurs in Grad.
    pub fn current_heading_degrees(&self) -> f64 {
        self.tracking.heading_degrees
    }

    /// Text der Ladeanzeige, falls aktiv.
    pub fn loading_status(&self) -> Option<&str> {
        self.ui.loading_status.as_deref()
    }

    /// Dauerhafte Positions-Fehlermeldung, falls vorhanden.
    pub fn error_message(&self) -> Option<&str> {
        self.ui.location_error.as_deref()
    }

    /// Fortschritt der Stop-Geste (0 ohne aktive Geste).
    pub fn long_press_progress_percent(&self) -> f32 {
        self.modes.long_press_state().progress_percent
    }

    /// Stop-Geste ist scharf.
    pub fn long_press_active(&self) -> bool {
        self.modes.long_press_state().active
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
