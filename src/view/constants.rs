//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Logical pixels covered by one terminal cell horizontally.
pub const CELL_WIDTH_PX: f64 = 8.0;

/// Logical pixels covered by one terminal cell vertically.
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Height of the header bar in lines (border + title + viewport tabs).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
///
/// Single line for keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the sidebar in columns, borders included.
pub const SIDEBAR_WIDTH: u16 = 36;

/// Share of the content width given to the code panel.
pub const CODE_PANEL_WIDTH_PERCENT: u16 = 34;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Event poll timeout; also how often the copy indicator is checked.
pub const TICK_INTERVAL: Duration = Duration::from_millis(250);
