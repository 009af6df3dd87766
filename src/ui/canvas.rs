//! Karten-Canvas: zeichnet Gitternetz, Entwurf, Route und Richtungsmarker
//! mit dem egui-Painter.

use crate::core::{GeoPoint, MapCamera, TILE_SIZE};
use crate::shared::RenderScene;
use glam::Vec2;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(232, 236, 230);
const GRID_COLOR: egui::Color32 = egui::Color32::from_rgb(205, 210, 204);
const GRID_LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(140, 146, 138);
const OVERLAY_FILL: egui::Color32 = egui::Color32::from_rgb(30, 110, 230);
/// Mindestabstand benachbarter Gitterlinien in Pixeln
const MIN_GRID_SPACING_PX: f64 = 80.0;
/// Verfügbare Gitterweiten in Grad, grob nach fein
const GRID_STEPS_DEG: [f64; 14] = [
    10.0, 5.0, 2.0, 1.0, 0.5, 0.2, 0.1, 0.05, 0.02, 0.01, 0.005, 0.002, 0.001, 0.0005,
];
/// Begrenzung gegen Endlosschleifen bei extremen Zoomstufen
const MAX_GRID_LINES: usize = 200;
/// Länge der Richtungsspitze in Pixeln
const ARROW_LENGTH_PX: f32 = 22.0;

/// Wählt die gröbste Gitterweite, die bei `zoom` noch dicht genug ist.
///
/// Gemessen an Längengraden am Äquator; für die Anzeige reicht das.
pub fn graticule_step(zoom: f64) -> f64 {
    let px_per_degree = TILE_SIZE * 2f64.powf(zoom) / 360.0;
    let mut chosen = GRID_STEPS_DEG[0];
    for step in GRID_STEPS_DEG {
        if step * px_per_degree < MIN_GRID_SPACING_PX {
            break;
        }
        chosen = step;
    }
    chosen
}

/// Eckpunkte der Richtungsspitze relativ zur Spitze-Mitte (Screen, y nach unten).
///
/// 0° zeigt nach oben (Norden), Drehung im Uhrzeigersinn.
pub fn arrow_points(center: Vec2, heading_degrees: f64) -> [Vec2; 3] {
    let angle = heading_degrees.to_radians() as f32;
    let forward = Vec2::new(angle.sin(), -angle.cos());
    let right = Vec2::new(-forward.y, forward.x);

    let tip = center + forward * ARROW_LENGTH_PX * 0.6;
    let back = center - forward * ARROW_LENGTH_PX * 0.4;
    [
        tip,
        back + right * ARROW_LENGTH_PX * 0.35,
        back - right * ARROW_LENGTH_PX * 0.35,
    ]
}

fn to_pos(rect: egui::Rect, screen: Vec2) -> egui::Pos2 {
    rect.min + egui::vec2(screen.x, screen.y)
}

fn to_color(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

fn polyline(
    camera: &MapCamera,
    rect: egui::Rect,
    viewport: Vec2,
    points: &[GeoPoint],
) -> Vec<egui::Pos2> {
    points
        .iter()
        .map(|p| to_pos(rect, camera.geo_to_screen(*p, viewport)))
        .collect()
}

/// Zeichnet die komplette Szene in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let viewport = Vec2::new(rect.width(), rect.height());
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return;
    }

    paint_graticule(painter, rect, viewport, &scene.camera);

    let draft = egui::Stroke::new(scene.style.draft_width_px, to_color(scene.style.draft_color));
    for points in scene.preview_polylines() {
        painter.add(egui::Shape::line(
            polyline(&scene.camera, rect, viewport, points),
            draft,
        ));
    }

    if let Some(route) = &scene.route {
        let mut color = to_color(scene.style.route_color);
        if !scene.route_running {
            color = color.gamma_multiply(0.6);
        }
        painter.add(egui::Shape::line(
            polyline(&scene.camera, rect, viewport, route.points()),
            egui::Stroke::new(scene.style.route_width_px, color),
        ));
    }

    if let Some(overlay) = scene.overlay {
        let center = scene.camera.geo_to_screen(overlay.position, viewport);
        let points = arrow_points(center, overlay.heading_degrees)
            .iter()
            .map(|p| to_pos(rect, *p))
            .collect();
        painter.circle_filled(to_pos(rect, center), 4.0, OVERLAY_FILL);
        painter.add(egui::Shape::convex_polygon(
            points,
            OVERLAY_FILL,
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        ));
    }
}

fn paint_graticule(painter: &egui::Painter, rect: egui::Rect, viewport: Vec2, camera: &MapCamera) {
    let (Some(top_left), Some(bottom_right)) = (
        camera.screen_to_geo(Vec2::ZERO, viewport),
        camera.screen_to_geo(viewport, viewport),
    ) else {
        return;
    };

    let step = graticule_step(camera.zoom);
    let stroke = egui::Stroke::new(1.0, GRID_COLOR);
    let font = egui::FontId::monospace(10.0);

    let mut lng = (top_left.lng / step).floor() * step;
    let mut lines = 0;
    while lng <= bottom_right.lng && lines < MAX_GRID_LINES {
        let x = camera
            .geo_to_screen(GeoPoint::new(camera.center.lat, lng), viewport)
            .x;
        painter.line_segment(
            [to_pos(rect, Vec2::new(x, 0.0)), to_pos(rect, Vec2::new(x, viewport.y))],
            stroke,
        );
        painter.text(
            to_pos(rect, Vec2::new(x + 2.0, 2.0)),
            egui::Align2::LEFT_TOP,
            format!("{:.4}", lng),
            font.clone(),
            GRID_LABEL_COLOR,
        );
        lng += step;
        lines += 1;
    }

    let mut lat = (bottom_right.lat / step).floor() * step;
    lines = 0;
    while lat <= top_left.lat && lines < MAX_GRID_LINES {
        let y = camera
            .geo_to_screen(GeoPoint::new(lat, camera.center.lng), viewport)
            .y;
        painter.line_segment(
            [to_pos(rect, Vec2::new(0.0, y)), to_pos(rect, Vec2::new(viewport.x, y))],
            stroke,
        );
        painter.text(
            to_pos(rect, Vec2::new(2.0, y - 2.0)),
            egui::Align2::LEFT_BOTTOM,
            format!("{:.4}", lat),
            font.clone(),
            GRID_LABEL_COLOR,
        );
        lat += step;
        lines += 1;
    }
}
