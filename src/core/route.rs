//! Strokes, RouteDraft (Menge bestätigter Strokes) und die flache Route.

use super::geo::{distance_m, GeoBounds, GeoPoint};

/// Mindestanzahl Punkte, ab der ein Stroke übernommen wird.
pub const MIN_STROKE_POINTS: usize = 2;

/// Fehler beim Zusammenbauen einer Route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Der Entwurf enthält keinen einzigen übernommenen Stroke.
    #[error("Kein Stroke vorhanden: Route kann nicht bestätigt werden")]
    EmptyDraft,
}

/// Ein abgeschlossener Zeichenzug (Pointer-Down bis Pointer-Up).
///
/// Wird nur mit mindestens [`MIN_STROKE_POINTS`] Punkten erzeugt und ist danach unveränderlich.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<GeoPoint>,
}

impl Stroke {
    /// Übernimmt die Punkte als Stroke. `None` bei weniger als zwei Punkten.
    pub fn from_points(points: Vec<GeoPoint>) -> Option<Self> {
        (points.len() >= MIN_STROKE_POINTS).then_some(Self { points })
    }

    /// Punkte in Zeichenreihenfolge.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Immer `false` (ein Stroke hat mindestens zwei Punkte).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Polylinien-Länge in Metern.
    pub fn length_m(&self) -> f64 {
        polyline_length_m(&self.points)
    }
}

/// Geordnete Menge übernommener Strokes vor der Bestätigung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteDraft {
    strokes: Vec<Stroke>,
}

impl RouteDraft {
    /// Erstellt einen leeren Entwurf.
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Baut einen Entwurf aus bereits übernommenen Strokes (z.B. beim Bearbeiten einer Route).
    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Hängt einen Stroke an (Einfügereihenfolge = Zeichenreihenfolge).
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Read-only Sicht auf alle Strokes zum erneuten Zeichnen als Vorschau.
    pub fn restore_for_redraw(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Alle Strokes in Reihenfolge.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Gibt `true` zurück, wenn kein Stroke übernommen wurde.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Anzahl der Strokes.
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Summe aller Punkte über alle Strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    /// Verkettet alle Strokes (Stroke-Reihenfolge, dann Punkt-Reihenfolge) zu einer Route.
    ///
    /// Bei leerem Entwurf ist die Route leer.
    pub fn flatten(&self) -> Route {
        Route::from_strokes(self.strokes.clone())
    }

    /// Erzeugt die Route und leert den Entwurf. Leerer Entwurf → `RouteError::EmptyDraft`.
    pub fn take_route(&mut self) -> Result<Route, RouteError> {
        if self.strokes.is_empty() {
            return Err(RouteError::EmptyDraft);
        }
        Ok(Route::from_strokes(std::mem::take(&mut self.strokes)))
    }

    /// Leert den Entwurf.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

/// Flache, bestätigte Route. Behält die Stroke-Grenzen für die Nachbearbeitung.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<GeoPoint>,
    strokes: Vec<Stroke>,
}

impl Route {
    fn from_strokes(strokes: Vec<Stroke>) -> Self {
        let points = strokes
            .iter()
            .flat_map(|s| s.points().iter().copied())
            .collect();
        Self { points, strokes }
    }

    /// Alle Punkte der Route in Reihenfolge.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Die Strokes, aus denen die Route entstanden ist.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Gibt die Strokes zurück (für erneutes Bearbeiten).
    pub fn into_strokes(self) -> Vec<Stroke> {
        self.strokes
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Route keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding-Box aller Routenpunkte.
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(&self.points)
    }

    /// Gesamtlänge in Metern (ohne die Sprünge zwischen den Strokes).
    pub fn length_m(&self) -> f64 {
        self.strokes.iter().map(Stroke::length_m).sum()
    }
}

fn polyline_length_m(points: &[GeoPoint]) -> f64 {
    points.windows(2).map(|w| distance_m(w[0], w[1])).sum()
}
