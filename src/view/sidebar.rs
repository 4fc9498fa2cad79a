//! Sidebar: mode switch, container controls, box count and the box editor.

use crate::model::LayoutMode;
use crate::state::form::{field_value, is_custom_basis, Field};
use crate::state::{AppState, TextInput};
use crate::view::styles::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const LABEL_WIDTH: usize = 15;

/// Draw the sidebar into `area`.
pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let paragraph = Paragraph::new(sidebar_lines(state, palette))
        .block(Block::default().borders(Borders::ALL).title(" Layout "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn mode_switch(mode: LayoutMode, palette: &Palette) -> Line<'static> {
    let tab = |m: LayoutMode| {
        let label = format!(" {} ", m.label());
        if m == mode {
            Span::styled(label, palette.focused_field)
        } else {
            Span::styled(label, palette.muted)
        }
    };
    Line::from(vec![
        Span::raw(" "),
        tab(LayoutMode::Flex),
        Span::raw(" "),
        tab(LayoutMode::Grid),
    ])
}

/// Buffer text with a bar at the cursor position.
fn with_cursor(input: &TextInput) -> String {
    let mut shown: String = input.text().chars().take(input.cursor()).collect();
    shown.push('▏');
    shown.extend(input.text().chars().skip(input.cursor()));
    shown
}

fn field_line(field: Field, state: &AppState, focused: bool, palette: &Palette) -> Line<'static> {
    let editing = state.form.editing().filter(|e| focused && e.field == field);
    let value = match editing {
        Some(e) => with_cursor(&e.input),
        None => {
            let value = field_value(field, state.layout(), state.selected_child());
            if field == Field::FlexBasis && is_custom_basis(&value) {
                format!("custom: {value}")
            } else {
                value
            }
        }
    };
    let marker = if focused { "›" } else { " " };
    let value_style = if focused { palette.focused_field } else { Style::default() };
    Line::from(vec![
        Span::styled(format!("{marker} {:<LABEL_WIDTH$}", field.label()), palette.muted),
        Span::styled(format!(" {value} "), value_style),
    ])
}

/// The sidebar's content, one entry per screen line.
pub fn sidebar_lines(state: &AppState, palette: &Palette) -> Vec<Line<'static>> {
    let fields = state.visible_fields();
    let focused = state.form.focused(&fields);
    let mut lines = vec![mode_switch(state.layout().mode(), palette), Line::raw("")];

    let heading = match state.layout().mode() {
        LayoutMode::Flex => "Flex Container",
        LayoutMode::Grid => "Grid Container",
    };
    lines.push(Line::styled(heading.to_uppercase(), palette.section_header));
    for field in fields.iter().copied().filter(|f| !f.is_child_field()) {
        lines.push(field_line(field, state, focused == Some(field), palette));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("CONTAINER BOXES ", palette.section_header),
        Span::raw(format!("{} ", state.layout().children().len())),
        Span::styled("[-] [+]", palette.key_hint),
    ]));
    lines.push(Line::raw(""));

    match (state.controller.selection().id(), state.selected_child()) {
        (Some(id), Some(_)) => {
            let number = state.layout().position_of(id).map_or(0, |i| i + 1);
            lines.push(Line::styled(
                format!("EDITING BOX {number}"),
                palette.section_header,
            ));
            for field in fields.iter().copied().filter(|f| f.is_child_field()) {
                lines.push(field_line(field, state, focused == Some(field), palette));
            }
        }
        _ => {
            lines.push(Line::styled("Select a box on the canvas", palette.muted));
            lines.push(Line::styled("to edit individual styles", palette.muted));
            lines.push(Line::styled("( ] / [ or click )", palette.muted));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChildId;
    use crate::state::action_handler::{handle_action, handle_text_input};
    use crate::model::KeyAction;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn shows_container_fields_and_hint_without_selection() {
        let rendered = text(&sidebar_lines(&AppState::default(), &Palette::default()));
        assert!(rendered.contains("FLEX CONTAINER"));
        assert!(rendered.contains("Direction"));
        assert!(rendered.contains(" row "));
        assert!(rendered.contains("16px"));
        assert!(rendered.contains("CONTAINER BOXES 3"));
        assert!(rendered.contains("Select a box on the canvas"));
    }

    #[test]
    fn selected_box_editor_names_display_position() {
        let mut state = AppState::default();
        state.controller.select(ChildId::new(2));
        let rendered = text(&sidebar_lines(&state, &Palette::default()));
        assert!(rendered.contains("EDITING BOX 2"));
        assert!(rendered.contains("custom: 200px"));
        assert!(!rendered.contains("Select a box"));
    }

    #[test]
    fn grid_mode_lists_grid_fields() {
        let state = handle_action(AppState::default(), KeyAction::ToggleMode);
        let rendered = text(&sidebar_lines(&state, &Palette::default()));
        assert!(rendered.contains("GRID CONTAINER"));
        assert!(rendered.contains("1fr 1fr 1fr"));
        assert!(!rendered.contains("Direction"));
    }

    #[test]
    fn edit_buffer_shows_cursor() {
        let state = handle_action(AppState::default(), KeyAction::FieldUp);
        let state = handle_action(state, KeyAction::BeginEdit);
        let state = handle_text_input(state, |i| i.cursor_left());
        let rendered = text(&sidebar_lines(&state, &Palette::default()));
        assert!(rendered.contains("1▏6"), "{rendered}");
    }
}
