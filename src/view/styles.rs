//! Colour palette for the editor panes.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors on, regardless of the environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles shared by every pane.
///
/// With colors disabled every entry keeps its modifiers (bold, reversed)
/// but drops its colors, so focus and selection stay visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Titles and the active tab.
    pub accent: Style,
    /// Sidebar section headings.
    pub section_header: Style,
    /// Keys in the status bar.
    pub key_hint: Style,
    /// Secondary text.
    pub muted: Style,
    /// Row under the sidebar cursor.
    pub focused_field: Style,
    /// Unselected preview box.
    pub box_fill: Style,
    /// Selected preview box.
    pub selected_box: Style,
    /// Device outline and badge.
    pub device_frame: Style,
    /// Code panel text.
    pub code: Style,
    /// Successful copy label.
    pub copied: Style,
    /// Failed copy label.
    pub copy_failed: Style,
}

impl Palette {
    /// Builds the palette, collapsing to plain text when colour is off.
    pub fn new(config: ColorConfig) -> Self {
        let colored = Self {
            accent: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            section_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            key_hint: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(Color::DarkGray),
            focused_field: Style::default().add_modifier(Modifier::REVERSED),
            box_fill: Style::default().fg(Color::White).bg(Color::Indexed(61)),
            selected_box: Style::default()
                .fg(Color::White)
                .bg(Color::Indexed(99))
                .add_modifier(Modifier::BOLD),
            device_frame: Style::default().fg(Color::Gray),
            code: Style::default().fg(Color::Green),
            copied: Style::default().fg(Color::Black).bg(Color::Green),
            copy_failed: Style::default().fg(Color::White).bg(Color::Red),
        };
        if config.colors_enabled() {
            return colored;
        }
        let plain = |style: Style| Style::default().add_modifier(style.add_modifier);
        Self {
            accent: plain(colored.accent),
            section_header: plain(colored.section_header),
            key_hint: plain(colored.key_hint),
            muted: Style::default(),
            focused_field: plain(colored.focused_field),
            box_fill: Style::default().add_modifier(Modifier::REVERSED),
            selected_box: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            device_frame: Style::default(),
            code: Style::default(),
            copied: Style::default().add_modifier(Modifier::BOLD),
            copy_failed: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
