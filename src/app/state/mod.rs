//! Application State — zentrale Datenhaltung.

mod app_state;
mod dialogs;
mod drawing;
mod tracking;
mod view;

pub use app_state::AppState;
pub use dialogs::UiState;
pub use drawing::DrawingState;
pub use tracking::{TrackingRequest, TrackingState};
pub use view::ViewState;
