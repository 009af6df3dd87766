//! Command-Log der ausgeführten Schritte (Nachvollziehbarkeit in Tests und Logs).

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    ///
    /// Hochfrequente Ticks der Stop-Geste werden nicht protokolliert.
    pub fn record(&mut self, command: &AppCommand) {
        if matches!(command, AppCommand::TickStopGesture { .. }) {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_log_is_bounded() {
        let mut log = CommandLog::new();
        for _ in 0..1001 {
            log.record(&AppCommand::DismissNotice);
        }
        assert_eq!(log.len(), 501);
    }

    #[test]
    fn test_ticks_are_not_recorded() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::TickStopGesture {
            now: Instant::now(),
        });
        assert!(log.is_empty());
    }
}
