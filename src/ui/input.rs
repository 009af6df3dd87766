//! Viewport-Input-Handling: Pointer → Stroke-Intents, Drag-Pan, Scroll-Zoom.

use crate::app::AppIntent;
use crate::shared::options::MapOptions;
use glam::Vec2;

/// Was der aktuelle Primär-Drag steuert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum PrimaryDragMode {
    #[default]
    None,
    Stroke,
    CameraPan,
}

/// Verwaltet den Input-Zustand des Viewports über Frames hinweg.
#[derive(Debug, Default)]
pub struct InputState {
    primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Im Zeichenmodus wird ein Primär-Drag zum Stroke, sonst zum Kamera-Pan
    /// (sofern Drag freigegeben ist). Multi-Touch zeichnet nie.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        drawing_mode: bool,
        drag_enabled: bool,
        map: &MapOptions,
    ) -> Vec<AppIntent> {
        let mut events = vec![AppIntent::ViewportResized {
            size: [response.rect.width(), response.rect.height()],
        }];

        let multi_touch = ui.input(|i| i.multi_touch().is_some());
        let to_local = |pos: egui::Pos2| {
            let local = pos - response.rect.min;
            Vec2::new(local.x, local.y)
        };

        if response.drag_started_by(egui::PointerButton::Primary) {
            self.primary_drag_mode = if drawing_mode && !multi_touch {
                PrimaryDragMode::Stroke
            } else if drag_enabled {
                PrimaryDragMode::CameraPan
            } else {
                PrimaryDragMode::None
            };

            if self.primary_drag_mode == PrimaryDragMode::Stroke {
                let origin = ui
                    .input(|i| i.pointer.press_origin())
                    .or_else(|| response.interact_pointer_pos());
                if let Some(pos) = origin {
                    events.push(AppIntent::StrokeStarted {
                        screen_pos: to_local(pos),
                    });
                }
            }
        }

        match self.primary_drag_mode {
            PrimaryDragMode::Stroke if response.dragged() => {
                if multi_touch {
                    // Zweiter Finger beendet den Stroke
                    events.push(AppIntent::StrokeEnded);
                    self.primary_drag_mode = PrimaryDragMode::None;
                } else if let Some(pos) = response.interact_pointer_pos() {
                    events.push(AppIntent::StrokeMoved {
                        screen_pos: to_local(pos),
                    });
                }
            }
            PrimaryDragMode::CameraPan if response.dragged() => {
                let delta = response.drag_delta();
                if delta != egui::Vec2::ZERO {
                    events.push(AppIntent::CameraPan {
                        delta: Vec2::new(delta.x, delta.y),
                    });
                }
            }
            _ => {}
        }

        if response.drag_stopped() {
            if self.primary_drag_mode == PrimaryDragMode::Stroke {
                events.push(AppIntent::StrokeEnded);
            }
            self.primary_drag_mode = PrimaryDragMode::None;
        }

        if response.hovered() {
            self.handle_scroll_zoom(ui, response, map, &mut events);
        }

        events
    }

    fn handle_scroll_zoom(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        map: &MapOptions,
        events: &mut Vec<AppIntent>,
    ) {
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        let pinch = ui.input(|i| i.zoom_delta());

        let delta_levels = if scroll != 0.0 {
            map.scroll_zoom_step * f64::from(scroll.signum())
        } else if pinch != 1.0 && pinch > 0.0 {
            f64::from(pinch).log2()
        } else {
            return;
        };

        let focus_screen = response.hover_pos().map(|pos| {
            let local = pos - response.rect.min;
            Vec2::new(local.x, local.y)
        });
        events.push(AppIntent::CameraZoom {
            delta_levels,
            focus_screen,
        });
    }
}
