use crate::app::recorder::PathRecorder;
use crate::core::RouteDraft;

/// Zustand des Zeichnens: laufender Stroke und übernommene Strokes.
///
/// Beide Werte werden ausschließlich von den Zeichen- und Routen-Use-Cases verändert.
#[derive(Debug, Clone, Default)]
pub struct DrawingState {
    /// Laufender Stroke
    pub recorder: PathRecorder,
    /// Übernommene Strokes seit der letzten Bestätigung
    pub draft: RouteDraft,
}

impl DrawingState {
    /// Erstellt einen leeren Zeichenzustand mit dem gegebenen Mindestabstand.
    pub fn new(min_sample_distance_m: f64) -> Self {
        Self {
            recorder: PathRecorder::new(min_sample_distance_m),
            draft: RouteDraft::new(),
        }
    }

    /// Verwirft laufenden Stroke und Entwurf.
    pub fn clear(&mut self) {
        self.recorder.clear();
        self.draft.clear();
    }
}
