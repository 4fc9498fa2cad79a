//! Keyboard action handler.
//!
//! Pure functions that transform AppState in response to `KeyAction`s and
//! text-entry keys. Side-effecting actions (copy, quit) are left to the shell.

use crate::model::KeyAction;
use crate::state::form::{cycle_field, field_edit_text};
use crate::state::text_input::TextInput;
use crate::state::AppState;
use crate::viewport::ViewportKind;
use tracing::debug;

/// Apply a bound action. `Copy` and `Quit` are no-ops here.
pub fn handle_action(mut state: AppState, action: KeyAction) -> AppState {
    match action {
        KeyAction::ToggleMode => {
            state.form = state.form.cancel();
            state.controller.toggle_mode();
        }
        KeyAction::AddChild => {
            state.controller.add_child();
        }
        KeyAction::RemoveChild => {
            state.controller.remove_child();
        }
        KeyAction::SelectNext => {
            state.form = state.form.cancel();
            state.controller.select_next();
        }
        KeyAction::SelectPrev => {
            state.form = state.form.cancel();
            state.controller.select_prev();
        }
        KeyAction::ClearSelection => {
            state.form = state.form.cancel();
            state.controller.clear_selection();
        }
        KeyAction::FieldUp => {
            let fields = state.visible_fields();
            state.form = state.form.focus_prev(&fields);
        }
        KeyAction::FieldDown => {
            let fields = state.visible_fields();
            state.form = state.form.focus_next(&fields);
        }
        KeyAction::ValuePrev => return step_focused(state, false),
        KeyAction::ValueNext => return step_focused(state, true),
        KeyAction::BeginEdit => return begin_edit(state),
        KeyAction::ViewportMobile => return set_viewport(state, ViewportKind::Mobile),
        KeyAction::ViewportTablet => return set_viewport(state, ViewportKind::Tablet),
        KeyAction::ViewportDesktop => return set_viewport(state, ViewportKind::Desktop),
        KeyAction::ToggleFormat => {
            state.output_format = state.output_format.toggled();
            debug!(format = state.output_format.label(), "Output format toggled");
        }
        KeyAction::Help => {
            state.help_visible = !state.help_visible;
        }
        KeyAction::Copy | KeyAction::Quit => {}
    }
    state
}

fn set_viewport(mut state: AppState, kind: ViewportKind) -> AppState {
    state.viewport.set_kind(kind);
    state
}

/// Cycle or step the focused control.
fn step_focused(mut state: AppState, forward: bool) -> AppState {
    let Some(field) = state.focused_field() else {
        return state;
    };
    let edit = cycle_field(field, state.layout(), state.selected_child(), forward);
    if let Some(edit) = edit {
        edit.apply(&mut state.controller);
    }
    state
}

/// Enter on a control: open a text buffer, or cycle a choice forward.
fn begin_edit(mut state: AppState) -> AppState {
    let Some(field) = state.focused_field() else {
        return state;
    };
    if !field.accepts_typing() {
        return step_focused(state, true);
    }
    let target = if field.is_child_field() {
        match state.controller.selection().id() {
            Some(id) => Some(id),
            None => return state,
        }
    } else {
        None
    };
    let initial = field_edit_text(field, state.layout(), state.selected_child());
    state.form = state.form.begin_edit(field, target, &initial);
    state
}

// ===== Text entry =====

/// Edit the open text buffer. No-op when nothing is being typed into.
pub fn handle_text_input(
    mut state: AppState,
    f: impl FnOnce(TextInput) -> TextInput,
) -> AppState {
    state.form = state.form.map_input(f);
    state
}

/// Commit the open text buffer into the layout.
pub fn commit_edit(mut state: AppState) -> AppState {
    let (form, edit) = state.form.commit();
    state.form = form;
    if let Some(edit) = edit {
        edit.apply(&mut state.controller);
    }
    state
}

/// Close the open text buffer without applying it.
pub fn cancel_edit(mut state: AppState) -> AppState {
    state.form = state.form.cancel();
    state
}

#[cfg(test)]
#[path = "action_handler_tests.rs"]
mod tests;
