//! Application state.
//!
//! AppState is the root state type containing all UI state. It owns the
//! `LayoutController` (and through it the one live `LayoutState`) plus the
//! purely presentational state around it.

use crate::codegen::{generate, OutputFormat};
use crate::model::{ChildStyle, LayoutMode, LayoutState};
use crate::state::controller::LayoutController;
use crate::state::copy_indicator::CopyIndicator;
use crate::state::form::{visible_fields, Field, FormState};
use crate::state::mouse_handler::BoxHit;
use crate::viewport::{ScaleTracker, ViewportKind};

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// # State Transitions
///
/// - Layout edits go through `controller`, which replaces the layout wholesale
///   and reconciles the selection.
/// - The viewport scale only changes on a host resize or a viewport switch
///   (see `ScaleTracker`), never on layout edits.
/// - The copy indicator resets itself two seconds after a copy.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Layout being edited, its selection and id allocator.
    pub controller: LayoutController,

    /// Simulated device and the scale that fits it into the canvas.
    pub viewport: ScaleTracker,

    /// Which generator feeds the code panel and the copy action.
    pub output_format: OutputFormat,

    /// Result of the last copy, shown briefly in the code panel.
    pub copy_indicator: CopyIndicator,

    /// Sidebar cursor and the text buffer of the field being typed into.
    pub form: FormState,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Screen rectangles of the boxes drawn in the last frame, topmost last.
    /// Refreshed on every draw and used for mouse selection.
    pub box_hits: Vec<BoxHit>,
}

impl AppState {
    /// Creates the state around `layout`, with nothing selected.
    pub fn new(layout: LayoutState, viewport: ViewportKind, output_format: OutputFormat) -> Self {
        Self {
            controller: LayoutController::new(layout),
            viewport: ScaleTracker::new(viewport),
            output_format,
            copy_indicator: CopyIndicator::Idle,
            form: FormState::default(),
            help_visible: false,
            box_hits: Vec::new(),
        }
    }

    /// Startup state: the seed layout in `mode`.
    pub fn seeded(mode: LayoutMode, viewport: ViewportKind, output_format: OutputFormat) -> Self {
        let layout = crate::state::controller::set_mode(LayoutState::seed(), mode);
        Self::new(layout, viewport, output_format)
    }

    /// Current layout.
    pub fn layout(&self) -> &LayoutState {
        self.controller.layout()
    }

    /// The selected child, if it still exists.
    pub fn selected_child(&self) -> Option<&ChildStyle> {
        self.controller.selected_child()
    }

    /// Code for the active output format.
    pub fn generated_code(&self) -> String {
        generate(self.layout(), self.output_format)
    }

    /// Sidebar controls for the current mode and selection.
    pub fn visible_fields(&self) -> Vec<Field> {
        visible_fields(self.layout().mode(), self.selected_child().is_some())
    }

    /// Field under the sidebar cursor.
    pub fn focused_field(&self) -> Option<Field> {
        self.form.focused(&self.visible_fields())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            LayoutState::seed(),
            ViewportKind::default(),
            OutputFormat::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChildId;

    #[test]
    fn default_state_starts_on_seed_layout() {
        let state = AppState::default();
        assert_eq!(state.layout(), &LayoutState::seed());
        assert_eq!(state.viewport.kind(), ViewportKind::Desktop);
        assert!(state.copy_indicator.is_idle());
        assert!(!state.help_visible);
        assert!(state.selected_child().is_none());
    }

    #[test]
    fn generated_code_follows_format() {
        let mut state = AppState::default();
        assert!(state.generated_code().starts_with(".container {"));
        state.output_format = OutputFormat::Markup;
        assert!(state.generated_code().starts_with("<div className="));
    }

    #[test]
    fn seeded_applies_mode() {
        let state = AppState::seeded(LayoutMode::Grid, ViewportKind::Mobile, OutputFormat::Css);
        assert_eq!(state.layout().mode(), LayoutMode::Grid);
        assert!(state.generated_code().contains("display: grid;"));
    }

    #[test]
    fn visible_fields_grow_with_selection() {
        let mut state = AppState::default();
        let before = state.visible_fields().len();
        state.controller.select(ChildId::new(1));
        assert!(state.visible_fields().len() > before);
        assert_eq!(state.focused_field(), Some(Field::FlexDirection));
    }
}
