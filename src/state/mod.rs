//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod controller;
pub mod copy_indicator;
pub mod form;
pub mod mouse_handler;
pub mod selection;
pub mod text_input;

// Re-export for convenience
pub use action_handler::{cancel_edit, commit_edit, handle_action, handle_text_input};
pub use app_state::AppState;
pub use controller::LayoutController;
pub use copy_indicator::{CopyIndicator, COPY_INDICATOR_DURATION};
pub use form::{Field, FieldEdit, FieldKind, FormState};
pub use mouse_handler::{detect_box_click, handle_mouse_click, BoxHit};
pub use selection::Selection;
pub use text_input::TextInput;
