//! Domain-level keyboard actions independent of key bindings.

/// User intents that key bindings map to.
///
/// These represent what the user wants, not which key they pressed. The
/// mapping from `crossterm::event::KeyEvent` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Layout
    /// Switch between flexbox and grid. Default: m
    ToggleMode,
    /// Append a box with default styles. Default: + / a
    AddChild,
    /// Drop the last box (never the only one). Default: - / x
    RemoveChild,

    // Selection
    /// Select the next box, wrapping. Default: ]
    SelectNext,
    /// Select the previous box, wrapping. Default: [
    SelectPrev,
    /// Deselect the current box. Default: Esc
    ClearSelection,

    // Form
    /// Move the form cursor up. Default: k / ↑
    FieldUp,
    /// Move the form cursor down. Default: j / ↓ / Tab
    FieldDown,
    /// Previous option or decrement. Default: h / ←
    ValuePrev,
    /// Next option or increment. Default: l / →
    ValueNext,
    /// Start typing into the focused field. Default: Enter / e
    BeginEdit,

    // Viewport
    /// Default: 1
    ViewportMobile,
    /// Default: 2
    ViewportTablet,
    /// Default: 3
    ViewportDesktop,

    // Output
    /// Switch between CSS and utility-class markup. Default: f
    ToggleFormat,
    /// Copy the generated code to the clipboard. Default: y / c
    Copy,

    // Application
    /// Show the keyboard shortcut overlay. Default: ?
    Help,
    /// Default: q / Ctrl+c
    Quit,
}

impl KeyAction {
    /// Whether the action may run while the help overlay is open.
    pub fn allowed_over_help(self) -> bool {
        matches!(self, KeyAction::Help | KeyAction::Quit)
    }
}
