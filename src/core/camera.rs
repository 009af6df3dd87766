//! Karten-Kamera mit Web-Mercator-Projektion (Zoomstufen wie bei Slippy-Maps).

use super::geo::{GeoBounds, GeoPoint};
use glam::{DVec2, Vec2};

/// Kantenlänge einer Kachel in Pixeln bei ganzzahligem Zoom.
pub const TILE_SIZE: f64 = 256.0;
/// Grenze der Mercator-Projektion in Grad.
const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_6;

/// Kamera über der Karte: Mittelpunkt und Zoomstufe.
#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    /// Geografischer Mittelpunkt des Viewports
    pub center: GeoPoint,
    /// Zoomstufe (0 = ganze Welt in einer Kachel)
    pub zoom: f64,
}

impl MapCamera {
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: f64 = 2.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f64 = 19.0;

    /// Erstellt eine Kamera.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Weltgröße in Pixeln bei gegebener Zoomstufe.
    fn world_size(zoom: f64) -> f64 {
        TILE_SIZE * zoom.exp2()
    }

    /// Projiziert einen Punkt in Welt-Pixel (Ursprung oben links).
    pub fn project(point: GeoPoint, zoom: f64) -> DVec2 {
        let size = Self::world_size(zoom);
        let lat = point.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
        let x = (point.lng + 180.0) / 360.0 * size;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * size;
        DVec2::new(x, y)
    }

    /// Umkehrung von [`Self::project`].
    pub fn unproject(world: DVec2, zoom: f64) -> GeoPoint {
        let size = Self::world_size(zoom);
        let lng = world.x / size * 360.0 - 180.0;
        let n = std::f64::consts::PI * (1.0 - 2.0 * world.y / size);
        let lat = n.sinh().atan().to_degrees();
        GeoPoint::new(lat, lng)
    }

    /// Zentriert die Kamera auf einen Punkt mit fester Zoomstufe.
    pub fn look_at(&mut self, target: GeoPoint, zoom: f64) {
        self.center = target;
        self.zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Verschiebt die Kamera um ein Screen-Delta (Drag-Richtung).
    pub fn pan_pixels(&mut self, delta: Vec2) {
        let center = Self::project(self.center, self.zoom) - delta.as_dvec2();
        self.center = Self::unproject(center, self.zoom);
    }

    /// Zoomt um `delta_levels` Stufen, optional so dass `focus` auf dem Screen stehen bleibt.
    pub fn zoom_towards(&mut self, delta_levels: f64, focus: Option<Vec2>, viewport: Vec2) {
        let new_zoom = (self.zoom + delta_levels).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        let focus_geo = focus.and_then(|f| self.screen_to_geo(f, viewport));
        match (focus, focus_geo) {
            (Some(focus), Some(focus_geo)) => {
                let focus_world = Self::project(focus_geo, new_zoom);
                let offset = (focus - viewport / 2.0).as_dvec2();
                self.center = Self::unproject(focus_world - offset, new_zoom);
            }
            _ => {}
        }
        self.zoom = new_zoom;
    }

    /// Konvertiert einen geografischen Punkt in Screen-Koordinaten relativ zum Viewport.
    pub fn geo_to_screen(&self, point: GeoPoint, viewport: Vec2) -> Vec2 {
        let world = Self::project(point, self.zoom);
        let center = Self::project(self.center, self.zoom);
        (world - center).as_vec2() + viewport / 2.0
    }

    /// Konvertiert Screen-Koordinaten in einen geografischen Punkt.
    ///
    /// Liefert `None`, solange der Viewport keine Fläche hat (Surface nicht angehängt)
    /// oder die Eingabe nicht endlich ist.
    pub fn screen_to_geo(&self, screen: Vec2, viewport: Vec2) -> Option<GeoPoint> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 || !screen.is_finite() {
            return None;
        }
        let center = Self::project(self.center, self.zoom);
        let world = center + (screen - viewport / 2.0).as_dvec2();
        let point = Self::unproject(world, self.zoom);
        point.is_valid().then_some(point)
    }

    /// Passt Mittelpunkt und Zoom so an, dass `bounds` mit `padding` Pixeln Rand sichtbar ist.
    ///
    /// Gibt `false` zurück, wenn der Viewport zu klein ist (keine Änderung).
    pub fn fit_bounds(&mut self, bounds: &GeoBounds, viewport: Vec2, padding: f32) -> bool {
        let available = (viewport - Vec2::splat(2.0 * padding)).as_dvec2();
        if available.x <= 0.0 || available.y <= 0.0 {
            return false;
        }

        let nw = GeoPoint::new(bounds.north_east.lat, bounds.south_west.lng);
        let se = GeoPoint::new(bounds.south_west.lat, bounds.north_east.lng);
        let size0 = (Self::project(se, 0.0) - Self::project(nw, 0.0)).abs();

        let zoom = if size0.x <= f64::EPSILON && size0.y <= f64::EPSILON {
            Self::ZOOM_MAX
        } else {
            let scale_x = if size0.x > f64::EPSILON {
                available.x / size0.x
            } else {
                f64::INFINITY
            };
            let scale_y = if size0.y > f64::EPSILON {
                available.y / size0.y
            } else {
                f64::INFINITY
            };
            scale_x.min(scale_y).log2().floor()
        };
        let zoom = zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);

        let mid = (Self::project(nw, zoom) + Self::project(se, zoom)) / 2.0;
        self.center = Self::unproject(mid, zoom);
        self.zoom = zoom;
        true
    }
}

impl Default for MapCamera {
    fn default() -> Self {
        Self::new(GeoPoint::new(37.5665, 126.9780), 15.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_project_roundtrip_is_stable() {
        let p = GeoPoint::new(37.5665, 126.978);
        let back = MapCamera::unproject(MapCamera::project(p, 15.0), 15.0);
        assert_relative_eq!(back.lat, p.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lng, p.lng, epsilon = 1e-9);
    }

    #[test]
    fn test_screen_center_maps_to_camera_center() {
        let camera = MapCamera::default();
        let geo = camera
            .screen_to_geo(VIEWPORT / 2.0, VIEWPORT)
            .expect("Umrechnung erwartet");
        assert_relative_eq!(geo.lat, camera.center.lat, epsilon = 1e-9);
        assert_relative_eq!(geo.lng, camera.center.lng, epsilon = 1e-9);

        let screen = camera.geo_to_screen(camera.center, VIEWPORT);
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn test_screen_to_geo_fails_without_surface() {
        let camera = MapCamera::default();
        assert!(camera.screen_to_geo(Vec2::new(10.0, 10.0), Vec2::ZERO).is_none());
        assert!(camera
            .screen_to_geo(Vec2::new(f32::NAN, 1.0), VIEWPORT)
            .is_none());
    }

    #[test]
    fn test_pan_moves_center_against_drag() {
        let mut camera = MapCamera::default();
        let before = camera.center;
        // Karte nach rechts ziehen → Mittelpunkt wandert nach Westen
        camera.pan_pixels(Vec2::new(100.0, 0.0));
        assert!(camera.center.lng < before.lng);
        assert_relative_eq!(camera.center.lat, before.lat, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = MapCamera::default();
        camera.zoom_towards(100.0, None, VIEWPORT);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MAX);
        camera.zoom_towards(-100.0, None, VIEWPORT);
        assert_relative_eq!(camera.zoom, MapCamera::ZOOM_MIN);
    }

    #[test]
    fn test_fit_bounds_shows_all_points() {
        let mut camera = MapCamera::default();
        let bounds = GeoBounds::from_points(&[
            GeoPoint::new(37.50, 126.90),
            GeoPoint::new(37.60, 127.05),
        ])
        .expect("Bounds erwartet");

        assert!(camera.fit_bounds(&bounds, VIEWPORT, 50.0));
        for corner in [bounds.south_west, bounds.north_east] {
            let s = camera.geo_to_screen(corner, VIEWPORT);
            assert!(s.x >= 49.0 && s.x <= 751.0, "x = {}", s.x);
            assert!(s.y >= 49.0 && s.y <= 551.0, "y = {}", s.y);
        }
    }

    #[test]
    fn test_fit_bounds_rejects_tiny_viewport() {
        let mut camera = MapCamera::default();
        let before = camera.clone();
        let bounds = GeoBounds::from_points(&[GeoPoint::new(37.5, 127.0)]).expect("Bounds");
        assert!(!camera.fit_bounds(&bounds, Vec2::new(80.0, 80.0), 50.0));
        assert_eq!(camera, before);
    }
}
