//! UI-Komponenten: Karten-Canvas, Bedienleiste, Status-Bar, Hinweise, Input-Handling.

pub mod canvas;
pub mod controls;
pub mod dialogs;
pub mod input;
/// UI-Layer mit egui
///
/// Alle Funktionen lesen nur aus dem `AppState` bzw. der `RenderScene` und
/// geben Nutzeraktionen als `AppIntent`s zurück.
pub mod status;

pub use canvas::paint_scene;
pub use controls::{render_controls, ControlsState};
pub use dialogs::show_notice_dialog;
pub use input::InputState;
pub use status::render_status_bar;
