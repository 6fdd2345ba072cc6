//! Full-screen terminal UI
//!
//! Question field on top, answer region below, updated live while the
//! reveal types. The panel itself runs in a background task; the event
//! loop only edits the input field and applies display events to state.

mod app;
mod event;
mod keys;
mod layout;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::{PanelCommand, PanelEvent};
pub use keys::{handle_key_event, KeyAction};
pub use state::TuiState;
