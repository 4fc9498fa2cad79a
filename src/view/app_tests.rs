//! Tests for the TuiApp event shell.

use super::*;
use crate::clipboard::MemoryClipboard;
use crate::model::ChildId;
use crate::state::Field;
use ratatui::backend::TestBackend;
use std::time::Duration;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn app_with(state: AppState, clipboard: MemoryClipboard) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(140, 40)).expect("test terminal");
    TuiApp::new_for_test(terminal, state, Box::new(clipboard))
}

fn app() -> TuiApp<TestBackend> {
    app_with(AppState::default(), MemoryClipboard::new())
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Focus the basis field of box #1 so Enter opens a text buffer.
fn editing_basis() -> AppState {
    let mut state = state::handle_action(AppState::default(), KeyAction::SelectNext);
    while state.focused_field() != Some(Field::FlexBasis) {
        state = state::handle_action(state, KeyAction::FieldDown);
    }
    state::handle_action(state, KeyAction::BeginEdit)
}

// ===== Quit =====

#[test]
fn q_quits() {
    let mut app = app();
    assert!(app.handle_key_test(key(KeyCode::Char('q'))));
}

#[test]
fn ctrl_c_quits_even_while_editing() {
    let mut app = app_with(editing_basis(), MemoryClipboard::new());
    assert!(app.app_state().form.is_editing());
    assert!(app.handle_key_test(ctrl('c')));
}

#[test]
fn unbound_key_is_ignored() {
    let mut app = app();
    assert!(!app.handle_key_test(key(KeyCode::Char('z'))));
    assert_eq!(app.app_state().layout().children().len(), 3);
}

// ===== Key routing =====

#[test]
fn bound_key_applies_layout_action() {
    let mut app = app();
    app.handle_key_test(key(KeyCode::Char('a')));
    assert_eq!(app.app_state().layout().children().len(), 4);
    app.handle_key_test(key(KeyCode::Char('m')));
    assert_eq!(app.app_state().layout().mode(), crate::model::LayoutMode::Grid);
}

#[test]
fn typing_while_editing_does_not_trigger_bindings() {
    // GIVEN: the basis buffer of box #1 is open
    let mut app = app_with(editing_basis(), MemoryClipboard::new());

    // WHEN: typing characters that are also bindings
    for _ in 0..5 {
        app.handle_key_test(key(KeyCode::Backspace));
    }
    for c in "aq50%".chars() {
        assert!(!app.handle_key_test(key(KeyCode::Char(c))));
    }

    // THEN: nothing was added and the buffer holds the text
    assert_eq!(app.app_state().layout().children().len(), 3);
    let text = app
        .app_state()
        .form
        .editing()
        .map(|e| e.input.text().to_string());
    assert_eq!(text.as_deref(), Some("aq50%"));
}

#[test]
fn enter_commits_and_esc_cancels_text_entry() {
    let mut app = app_with(editing_basis(), MemoryClipboard::new());
    for _ in 0..5 {
        app.handle_key_test(key(KeyCode::Backspace));
    }
    for c in "30%".chars() {
        app.handle_key_test(key(KeyCode::Char(c)));
    }
    app.handle_key_test(key(KeyCode::Enter));
    assert!(!app.app_state().form.is_editing());
    let basis = app
        .app_state()
        .layout()
        .child(ChildId::new(1))
        .map(|c| c.flex_basis.clone());
    assert_eq!(basis.as_deref(), Some("30%"));

    // Reopen, type, cancel: the committed value stays.
    app.handle_key_test(key(KeyCode::Enter));
    app.handle_key_test(key(KeyCode::Char('9')));
    app.handle_key_test(key(KeyCode::Esc));
    assert!(!app.app_state().form.is_editing());
    let basis = app
        .app_state()
        .layout()
        .child(ChildId::new(1))
        .map(|c| c.flex_basis.clone());
    assert_eq!(basis.as_deref(), Some("30%"));
}

// ===== Help overlay =====

#[test]
fn help_overlay_blocks_layout_actions() {
    let mut app = app();
    app.handle_key_test(key(KeyCode::Char('?')));
    assert!(app.app_state().help_visible);

    app.handle_key_test(key(KeyCode::Char('a')));
    assert_eq!(app.app_state().layout().children().len(), 3);

    app.handle_key_test(key(KeyCode::Esc));
    assert!(!app.app_state().help_visible);
    app.handle_key_test(key(KeyCode::Char('a')));
    assert_eq!(app.app_state().layout().children().len(), 4);
}

#[test]
fn quit_still_works_over_help() {
    let mut app = app();
    app.handle_key_test(key(KeyCode::Char('?')));
    assert!(app.handle_key_test(key(KeyCode::Char('q'))));
}

// ===== Copy =====

#[test]
fn copy_writes_generated_code_and_arms_indicator() {
    let clipboard = MemoryClipboard::new();
    let mut app = app_with(AppState::default(), clipboard.clone());
    app.handle_key_test(key(KeyCode::Char('y')));

    assert!(matches!(
        app.app_state().copy_indicator,
        CopyIndicator::Copied { .. }
    ));
    let expected = app.app_state().generated_code();
    assert_eq!(clipboard.last(), Some(expected));
    assert_eq!(clipboard.writes().len(), 1);
}

#[test]
fn failed_copy_shows_failure_and_keeps_running() {
    let mut app = app_with(AppState::default(), MemoryClipboard::failing());
    assert!(!app.handle_key_test(key(KeyCode::Char('y'))));
    assert!(matches!(
        app.app_state().copy_indicator,
        CopyIndicator::Failed { .. }
    ));
    app.handle_key_test(key(KeyCode::Char('a')));
    assert_eq!(app.app_state().layout().children().len(), 4);
}

#[test]
fn tick_expires_copy_indicator() {
    let mut app = app();
    app.handle_key_test(key(KeyCode::Char('y')));
    assert!(!app.tick_test(Instant::now()));
    assert!(app.tick_test(Instant::now() + Duration::from_secs(3)));
    assert!(app.app_state().copy_indicator.is_idle());
    assert!(!app.tick_test(Instant::now() + Duration::from_secs(4)));
}

// ===== Mouse and drawing =====

#[test]
fn draw_observes_canvas_and_records_hits() {
    let mut app = app();
    app.render_test().expect("draw");
    assert!(app.app_state().viewport.host().is_some());
    assert_eq!(app.app_state().box_hits.len(), 3);
    let size = app.terminal().size().expect("size");
    assert_eq!((size.width, size.height), (140, 40));
}

#[test]
fn clicking_a_drawn_box_selects_it() {
    let mut app = app();
    app.render_test().expect("draw");

    let hit = app.app_state().box_hits[1].clone();
    let column = hit.area.x + hit.area.width / 2;
    let row = hit.area.y + hit.area.height / 2;
    assert!(app.handle_mouse_test(left_click(column, row)));
    assert_eq!(app.app_state().controller.selection().id(), Some(hit.id));
}

#[test]
fn click_outside_boxes_keeps_selection() {
    let mut app = app_with(
        state::handle_action(AppState::default(), KeyAction::SelectNext),
        MemoryClipboard::new(),
    );
    app.render_test().expect("draw");
    app.handle_mouse_test(left_click(0, 0));
    assert_eq!(
        app.app_state().controller.selection().id(),
        Some(ChildId::new(1))
    );
}

#[test]
fn non_left_mouse_events_are_ignored() {
    let mut app = app();
    app.render_test().expect("draw");
    let scroll = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 70,
        row: 20,
        modifiers: KeyModifiers::NONE,
    };
    assert!(!app.handle_mouse_test(scroll));
}
