use crate::core::MapCamera;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Karten-Kamera (Mittelpunkt + Zoomstufe)
    pub camera: MapCamera,
    /// Aktuelle Viewport-Größe in Pixel (0×0 solange die Fläche nicht angehängt ist)
    pub viewport_size: [f32; 2],
    /// Karte per Drag verschiebbar (im Zeichenmodus aus)
    pub drag_enabled: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: MapCamera::default(),
            viewport_size: [0.0, 0.0],
            drag_enabled: true,
        }
    }

    /// Viewport-Größe als Vektor.
    pub fn viewport(&self) -> glam::Vec2 {
        glam::Vec2::from(self.viewport_size)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
