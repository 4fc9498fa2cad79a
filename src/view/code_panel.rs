//! Code panel: format toggle, copy state and the generated code.

use crate::codegen::OutputFormat;
use crate::state::{AppState, CopyIndicator};
use crate::view::styles::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn toolbar(state: &AppState, palette: &Palette) -> Line<'static> {
    let tab = |format: OutputFormat| {
        let label = format!(" {} ", format.label());
        if format == state.output_format {
            Span::styled(label, palette.focused_field)
        } else {
            Span::styled(label, palette.muted)
        }
    };
    let copy_style = match state.copy_indicator {
        CopyIndicator::Idle => palette.key_hint,
        CopyIndicator::Copied { .. } => palette.copied,
        CopyIndicator::Failed { .. } => palette.copy_failed,
    };
    Line::from(vec![
        tab(OutputFormat::Css),
        Span::raw(" "),
        tab(OutputFormat::Markup),
        Span::raw("  "),
        Span::styled(format!(" {} ", state.copy_indicator.label()), copy_style),
    ])
}

/// Draw the code panel into `area`.
pub fn render_code_panel(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
    let block = Block::default().borders(Borders::ALL).title(" Code ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Toolbar
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Code
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(toolbar(state, palette)), chunks[0]);

    let code: Vec<Line> = state
        .generated_code()
        .lines()
        .map(|line| Line::styled(line.to_string(), palette.code))
        .collect();
    frame.render_widget(Paragraph::new(code).wrap(Wrap { trim: false }), chunks[2]);
}
