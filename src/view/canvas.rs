//! Canvas pane: the scaled device frame and the laid-out boxes.
//!
//! Geometry flows one way: the pane's inner area is converted to logical px
//! and observed by the scale tracker, the device frame is sized from the
//! current scale, and the preview boxes computed at the device's logical
//! size are projected onto the frame's screen cells.

use crate::preview::{compute_preview, PreviewBox};
use crate::state::{AppState, BoxHit};
use crate::view::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::view::styles::Palette;
use crate::viewport::{HostSize, ViewportKind};
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

/// Outer block of the canvas pane.
pub fn canvas_block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title(" Canvas ")
}

/// Host container size, in logical px, of a canvas drawn in `area`.
pub fn host_size(area: Rect) -> HostSize {
    let inner = canvas_block().inner(area);
    cells_to_px(inner)
}

fn cells_to_px(area: Rect) -> HostSize {
    HostSize::new(
        f64::from(area.width) * CELL_WIDTH_PX,
        f64::from(area.height) * CELL_HEIGHT_PX,
    )
}

/// Where the simulated device is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceFrame {
    /// Frame rectangle including its border.
    pub outer: Rect,
    /// Screen cells inside the border.
    pub screen: Rect,
    /// Logical size the layout is computed at.
    pub logical: HostSize,
}

fn device_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Size and centre the device frame inside `host`.
///
/// Fixed devices are drawn at their chrome-inclusive size times `scale`.
/// Desktop fills the host. Returns `None` when the frame would be too small
/// to hold a single screen cell.
pub fn device_frame(host: Rect, kind: ViewportKind, scale: f64) -> Option<DeviceFrame> {
    let outer = match kind.outer_frame_size() {
        Some(size) => {
            let width = ((size.width * scale) / CELL_WIDTH_PX).round();
            let height = ((size.height * scale) / CELL_HEIGHT_PX).round();
            let width = (width.max(0.0) as u16).min(host.width);
            let height = (height.max(0.0) as u16).min(host.height);
            Rect {
                x: host.x + (host.width - width) / 2,
                y: host.y + (host.height - height) / 2,
                width,
                height,
            }
        }
        None => host,
    };

    let screen = device_block().inner(outer);
    if screen.width == 0 || screen.height == 0 {
        return None;
    }

    let logical = kind.frame_size().unwrap_or_else(|| cells_to_px(screen));
    Some(DeviceFrame {
        outer,
        screen,
        logical,
    })
}

/// Map a logical px span onto `cells` screen cells starting at `origin`.
///
/// Returns `None` when the span starts past the end (overflowing content).
fn project_span(start: f32, len: f32, extent: f64, origin: u16, cells: u16) -> Option<(u16, u16)> {
    if extent <= 0.0 || cells == 0 {
        return None;
    }
    let ratio = f64::from(cells) / extent;
    let first = (f64::from(start) * ratio).floor().max(0.0);
    let last = (f64::from(start + len) * ratio).floor().max(first + 1.0);
    if first >= f64::from(cells) {
        return None;
    }
    let first = first as u16;
    let last = (last as u16).min(cells);
    Some((origin + first, last - first))
}

/// Screen rectangle of `preview_box` inside the device frame, clipped.
pub fn project_box(preview_box: &PreviewBox, device: &DeviceFrame) -> Option<Rect> {
    let (x, width) = project_span(
        preview_box.x,
        preview_box.width,
        device.logical.width,
        device.screen.x,
        device.screen.width,
    )?;
    let (y, height) = project_span(
        preview_box.y,
        preview_box.height,
        device.logical.height,
        device.screen.y,
        device.screen.height,
    )?;
    Some(Rect {
        x,
        y,
        width,
        height,
    })
}

/// Text of the scale badge, or `None` on desktop.
pub fn scale_badge(kind: ViewportKind, percent: u32) -> Option<String> {
    match kind {
        ViewportKind::Desktop => None,
        _ => Some(format!(
            "{} VIEW • {}%",
            kind.label().to_uppercase(),
            percent
        )),
    }
}

/// Draw the canvas pane and return the rectangles of the drawn boxes.
pub fn render_canvas(frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) -> Vec<BoxHit> {
    let block = canvas_block();
    let host = block.inner(area);
    frame.render_widget(block, area);

    let hits = render_device(frame, host, state, palette);

    // Drawn last so it stays on top of the frame.
    if let Some(badge) = scale_badge(state.viewport.kind(), state.viewport.percent()) {
        let text = format!("{badge} ");
        let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
        if host.height > 0 && width <= host.width {
            let badge_area = Rect {
                x: host.x + host.width - width,
                y: host.y + host.height - 1,
                width,
                height: 1,
            };
            frame.render_widget(
                Paragraph::new(Line::styled(text, palette.muted)).alignment(Alignment::Right),
                badge_area,
            );
        }
    }
    hits
}

fn render_device(frame: &mut Frame, host: Rect, state: &AppState, palette: &Palette) -> Vec<BoxHit> {
    let Some(device) = device_frame(host, state.viewport.kind(), state.viewport.scale()) else {
        return Vec::new();
    };
    frame.render_widget(
        device_block()
            .border_style(palette.device_frame)
            .title(format!(" {} ", state.viewport.kind().label())),
        device.outer,
    );

    let preview = match compute_preview(state.layout(), device.logical) {
        Ok(preview) => preview,
        Err(e) => {
            debug!(error = %e, "Preview layout failed");
            frame.render_widget(
                Paragraph::new("layout unavailable").style(palette.muted),
                device.screen,
            );
            return Vec::new();
        }
    };

    let selection = state.controller.selection();
    let mut hits = Vec::with_capacity(preview.boxes.len());
    for preview_box in &preview.boxes {
        let Some(rect) = project_box(preview_box, &device) else {
            continue;
        };
        let selected = selection.is_selected(preview_box.id);
        render_box(frame, rect, preview_box.index + 1, selected, palette);
        hits.push(BoxHit {
            id: preview_box.id,
            area: rect,
        });
    }
    hits
}

fn render_box(frame: &mut Frame, rect: Rect, number: usize, selected: bool, palette: &Palette) {
    let style = if selected {
        palette.selected_box
    } else {
        palette.box_fill
    };
    let label = if selected {
        format!("●{number}")
    } else {
        number.to_string()
    };
    // Centre the number vertically.
    let mut lines = vec![Line::raw(""); usize::from(rect.height.saturating_sub(1) / 2)];
    lines.push(Line::raw(label));
    frame.render_widget(
        Paragraph::new(lines).style(style).alignment(Alignment::Center),
        rect,
    );
}

#[cfg(test)]
#[path = "canvas_tests.rs"]
mod tests;
