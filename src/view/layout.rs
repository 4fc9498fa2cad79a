//! Screen layout: header, sidebar, canvas, code panel and status bar.
//!
//! Pure layout logic. Area calculation is separate from rendering so the
//! shell can observe the canvas size before drawing.

use crate::state::{AppState, BoxHit};
use crate::view::canvas::render_canvas;
use crate::view::code_panel::render_code_panel;
use crate::view::constants::{
    CODE_PANEL_WIDTH_PERCENT, HEADER_HEIGHT, SIDEBAR_WIDTH, STATUS_BAR_HEIGHT,
};
use crate::view::help::render_help_overlay;
use crate::view::sidebar::render_sidebar;
use crate::view::styles::Palette;
use crate::viewport::ViewportKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Screen regions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title and mode tabs.
    pub header: Rect,
    /// Property form.
    pub sidebar: Rect,
    /// Device preview.
    pub canvas: Rect,
    /// Generated code.
    pub code: Rect,
    /// Key hints.
    pub status: Rect,
}

/// Split the frame into its regions.
///
/// Top to bottom: header, content, status bar. The content row holds the
/// sidebar (fixed width), the canvas and the code panel.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Min(0),
            Constraint::Percentage(CODE_PANEL_WIDTH_PERCENT),
        ])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        sidebar: columns[0],
        canvas: columns[1],
        code: columns[2],
        status: rows[2],
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default().borders(Borders::BOTTOM);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(34)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(" ▦ ", palette.accent),
        Span::styled("Flex-Grid Visual Lab", palette.section_header),
    ]);
    frame.render_widget(Paragraph::new(title), halves[0]);

    let selected = ViewportKind::ALL
        .iter()
        .position(|k| *k == state.viewport.kind())
        .unwrap_or(0);
    let tabs = Tabs::new(ViewportKind::ALL.iter().map(|k| k.label()))
        .select(selected)
        .style(palette.muted)
        .highlight_style(palette.focused_field);
    frame.render_widget(tabs, halves[1]);
}

/// Key hints for the current input mode.
fn keyboard_hints(state: &AppState) -> &'static str {
    if state.form.is_editing() {
        "Enter: apply | Esc: cancel | ←/→: move cursor"
    } else if state.selected_child().is_some() {
        "j/k: control | h/l: value | Enter: type | ]/[: box | Esc: deselect | y: copy | ?: help | q: quit"
    } else {
        "m: mode | +/-: boxes | ]/[: select | j/k: control | h/l: value | 1/2/3: device | f: format | y: copy | ?: help | q: quit"
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let paragraph = Paragraph::new(Line::styled(keyboard_hints(state), palette.muted));
    frame.render_widget(paragraph, area);
}

/// Draw every pane and return the rectangles of the drawn canvas boxes.
pub fn render_layout(frame: &mut Frame, state: &AppState, palette: &Palette) -> Vec<BoxHit> {
    let areas = calculate_areas(frame.area());

    render_header(frame, areas.header, state, palette);
    render_sidebar(frame, areas.sidebar, state, palette);
    let hits = render_canvas(frame, areas.canvas, state, palette);
    render_code_panel(frame, areas.code, state, palette);
    render_status_bar(frame, areas.status, state, palette);

    if state.help_visible {
        render_help_overlay(frame, palette);
        // Boxes under the overlay are not clickable.
        return Vec::new();
    }
    hits
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
