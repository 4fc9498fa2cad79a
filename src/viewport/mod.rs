//! Simulated device viewports and the scale that fits them on screen.
//!
//! The scale depends only on the viewport kind and the host container size.
//! Layout edits never trigger a recomputation.

use serde::Deserialize;
use tracing::debug;

/// Border thickness of the device frame, added to both dimensions.
pub const CHROME_MARGIN_PX: f64 = 16.0;

/// Space kept free around the frame inside the host container.
pub const SAFETY_PADDING_PX: f64 = 48.0;

/// Size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl HostSize {
    /// Creates a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Simulated device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewportKind {
    /// 375 x 667 phone frame.
    Mobile,
    /// 768 x 1024 tablet frame.
    Tablet,
    /// Fills the host, never scaled.
    #[default]
    Desktop,
}

impl ViewportKind {
    /// Every device in tab order.
    pub const ALL: [ViewportKind; 3] = [
        ViewportKind::Mobile,
        ViewportKind::Tablet,
        ViewportKind::Desktop,
    ];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            ViewportKind::Mobile => "Mobile",
            ViewportKind::Tablet => "Tablet",
            ViewportKind::Desktop => "Desktop",
        }
    }

    /// Fixed logical screen size, or `None` when the frame fills the host.
    pub fn frame_size(self) -> Option<HostSize> {
        match self {
            ViewportKind::Mobile => Some(HostSize::new(375.0, 667.0)),
            ViewportKind::Tablet => Some(HostSize::new(768.0, 1024.0)),
            ViewportKind::Desktop => None,
        }
    }

    /// Frame size including the chrome border.
    pub fn outer_frame_size(self) -> Option<HostSize> {
        self.frame_size().map(|s| {
            HostSize::new(s.width + CHROME_MARGIN_PX, s.height + CHROME_MARGIN_PX)
        })
    }
}

/// Uniform scale that fits the device frame inside `host`.
///
/// Desktop is always 1. Fixed frames fit the more constraining axis and are
/// never scaled above 1. A collapsed host (zero or negative space after
/// padding) yields 0, the lowest valid scale.
pub fn compute_scale(kind: ViewportKind, host: HostSize) -> f64 {
    let Some(frame) = kind.outer_frame_size() else {
        return 1.0;
    };

    let available_width = host.width - SAFETY_PADDING_PX;
    let available_height = host.height - SAFETY_PADDING_PX;

    // `f64::min` skips NaN, so NaN has to fail this check.
    if !(available_width > 0.0 && available_height > 0.0) {
        return 0.0;
    }

    let scale_x = available_width / frame.width;
    let scale_y = available_height / frame.height;
    scale_x.min(scale_y).min(1.0)
}

/// Caches the current scale and recomputes it only when its inputs change.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTracker {
    kind: ViewportKind,
    host: Option<HostSize>,
    scale: f64,
}

impl ScaleTracker {
    /// Tracker for `kind` with no host observed yet.
    pub fn new(kind: ViewportKind) -> Self {
        Self {
            kind,
            host: None,
            scale: tracked_scale(kind, None),
        }
    }

    /// Current device.
    pub fn kind(&self) -> ViewportKind {
        self.kind
    }

    /// Last observed host size, if any.
    pub fn host(&self) -> Option<HostSize> {
        self.host
    }

    /// Last computed scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Host container resize notification.
    ///
    /// Returns `true` if the scale was recomputed.
    pub fn observe_host(&mut self, host: HostSize) -> bool {
        if self.host == Some(host) {
            return false;
        }
        self.host = Some(host);
        self.recompute();
        true
    }

    /// Switch the simulated device. Returns `true` if the scale was recomputed.
    pub fn set_kind(&mut self, kind: ViewportKind) -> bool {
        if self.kind == kind {
            return false;
        }
        self.kind = kind;
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.scale = tracked_scale(self.kind, self.host);
        debug!(kind = ?self.kind, host = ?self.host, scale = self.scale, "Viewport scale recomputed");
    }

    /// Scale as a whole percentage, for the badge.
    pub fn percent(&self) -> u32 {
        (self.scale * 100.0).round() as u32
    }
}

fn tracked_scale(kind: ViewportKind, host: Option<HostSize>) -> f64 {
    match host {
        Some(host) => compute_scale(kind, host),
        // Nothing observed yet: only desktop has a known scale.
        None if kind == ViewportKind::Desktop => 1.0,
        None => 0.0,
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
