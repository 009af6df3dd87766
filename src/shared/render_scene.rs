//! Render-Szene als expliziter Übergabevertrag zwischen App und Karten-Canvas.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::DrawingOptions;
use crate::core::{DirectionOverlay, GeoPoint, MapCamera, Route};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Übernommene Strokes des Entwurfs als Vorschau-Polylinien
    pub draft_strokes: Vec<Vec<GeoPoint>>,
    /// Laufender Stroke (leer, solange weniger als zwei Punkte vorliegen)
    pub live_stroke: Vec<GeoPoint>,
    /// Bestätigte Route (Arc für O(1)-Clone pro Frame)
    pub route: Option<Arc<Route>>,
    /// Route läuft (sonst angehalten)
    pub route_running: bool,
    /// Richtungsmarker an der Geräteposition
    pub overlay: Option<DirectionOverlay>,
    /// Karte per Drag verschiebbar
    pub drag_enabled: bool,
    /// Farben und Linienstärken
    pub style: DrawingOptions,
}

impl RenderScene {
    /// Alle Entwurfs-Polylinien inkl. laufendem Stroke.
    pub fn preview_polylines(&self) -> impl Iterator<Item = &[GeoPoint]> {
        self.draft_strokes
            .iter()
            .map(Vec::as_slice)
            .chain((self.live_stroke.len() >= 2).then_some(self.live_stroke.as_slice()))
    }
}
