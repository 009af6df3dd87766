//! Aufzeichnung eines laufenden Strokes aus Pointer-Bewegungen.
//!
//! Der Recorder kennt den Modus nicht; die Use-Cases rufen ihn nur im
//! Zeichenmodus auf.

use crate::core::{GeoPoint, RouteDraft, Stroke};
use crate::shared::options::MIN_SAMPLE_DISTANCE_M;

/// Puffer des aktuell gezeichneten Strokes.
#[derive(Debug, Clone)]
pub struct PathRecorder {
    buffer: Vec<GeoPoint>,
    min_distance_m: f64,
}

impl PathRecorder {
    /// Erstellt einen Recorder mit dem gegebenen Mindestabstand in Metern.
    pub fn new(min_distance_m: f64) -> Self {
        Self {
            buffer: Vec::new(),
            min_distance_m,
        }
    }

    /// Mindestabstand zwischen zwei aufgezeichneten Punkten.
    pub fn min_distance_m(&self) -> f64 {
        self.min_distance_m
    }

    /// Pointer-Down: verwirft einen evtl. alten Puffer und beginnt mit `point`.
    pub fn start(&mut self, point: GeoPoint) {
        self.buffer.clear();
        self.buffer.push(point);
    }

    /// Pointer-Move: übernimmt `point` nur bei laufendem Stroke und
    /// strikt mehr als Mindestabstand zum letzten Punkt.
    ///
    /// Gibt `true` zurück, wenn der Punkt übernommen wurde.
    pub fn extend(&mut self, point: GeoPoint) -> bool {
        let Some(last) = self.buffer.last() else {
            return false;
        };
        if last.distance_to(point) > self.min_distance_m {
            self.buffer.push(point);
            true
        } else {
            false
        }
    }

    /// Pointer-Up: übernimmt den Puffer als Stroke in `draft`, falls er
    /// mindestens zwei Punkte hat. Der Puffer ist danach immer leer.
    ///
    /// Gibt `true` zurück, wenn ein Stroke übernommen wurde.
    pub fn end(&mut self, draft: &mut RouteDraft) -> bool {
        match Stroke::from_points(std::mem::take(&mut self.buffer)) {
            Some(stroke) => {
                draft.commit(stroke);
                true
            }
            None => false,
        }
    }

    /// Verwirft den laufenden Stroke.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Read-only Sicht auf den laufenden Stroke (Vorschau).
    pub fn buffer(&self) -> &[GeoPoint] {
        &self.buffer
    }

    /// Gibt `true` zurück, solange ein Stroke aufgezeichnet wird.
    pub fn is_recording(&self) -> bool {
        !self.buffer.is_empty()
    }
}

impl Default for PathRecorder {
    fn default() -> Self {
        Self::new(MIN_SAMPLE_DISTANCE_M)
    }
}
