/// UI-bezogener Anwendungszustand: Hinweise, Ladeanzeige, Positionsfehler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Blockierender Hinweis, bis der Nutzer ihn schließt
    pub notice: Option<String>,
    /// Ladeanzeige während des ersten Positionsabrufs
    pub loading_status: Option<String>,
    /// Dauerhafte Fehlermeldung des Positions-Trackings
    pub location_error: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeigt einen Hinweis an (ersetzt einen vorhandenen).
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Ladeanzeige und Fehlermeldung entfernen.
    pub fn clear_location_status(&mut self) {
        self.loading_status = None;
        self.location_error = None;
    }
}
