//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Jeder Intent läuft vollständig durch, bevor der nächste verarbeitet wird.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                delta_levels,
                focus_screen,
            } => handlers::view::zoom_towards(state, delta_levels, focus_screen),

            // === Modus ===
            AppCommand::BeginDrawing => handlers::mode::begin_drawing(state),
            AppCommand::EndDrawing => handlers::mode::end_drawing(state),
            AppCommand::ConfirmRoute => handlers::mode::confirm_route(state)?,
            AppCommand::ResetAll => handlers::mode::reset(state),
            AppCommand::ResumeRoute => handlers::mode::resume(state),

            // === Stroke ===
            AppCommand::BeginStroke { point } => handlers::drawing::begin_stroke(state, point),
            AppCommand::ExtendStroke { point } => handlers::drawing::extend_stroke(state, point),
            AppCommand::FinishStroke => handlers::drawing::finish_stroke(state),
            AppCommand::ClearDrawing => handlers::drawing::clear(state),

            // === Stop-Geste ===
            AppCommand::ArmStopGesture { at } => handlers::mode::arm_stop(state, at),
            AppCommand::TickStopGesture { now } => handlers::mode::tick_stop(state, now),
            AppCommand::ReleaseStopGesture { at } => handlers::mode::release_stop(state, at),

            // === Tracking ===
            AppCommand::StartTracking => handlers::tracking::start(state),
            AppCommand::CenterOnCurrentLocation => {
                handlers::tracking::center_on_current_location(state)
            }
            AppCommand::RequestCompassPermission => {
                handlers::tracking::request_compass_permission(state)
            }
            AppCommand::ApplyLocationPermission { status, prompted } => {
                handlers::tracking::apply_location_permission(state, status, prompted)
            }
            AppCommand::ApplyFetchedPosition { purpose, result } => {
                handlers::tracking::apply_fetched_position(state, purpose, result)
            }
            AppCommand::ApplyPositionUpdate { point } => {
                handlers::tracking::apply_position_update(state, point)
            }
            AppCommand::ApplyHeading { degrees } => handlers::tracking::apply_heading(state, degrees),
            AppCommand::RecordTrackingFailure { source, error } => {
                handlers::tracking::record_failure(source, &error)
            }
            AppCommand::ApplyCompassPermission {
                outcome,
                user_initiated,
            } => handlers::tracking::apply_compass_permission(state, outcome, user_initiated),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::DismissNotice => handlers::dialog::dismiss_notice(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
