//! TUI rendering and terminal management (impure shell)

pub mod canvas;
mod code_panel;
pub mod constants;
mod help;
pub mod layout;
mod sidebar;
mod styles;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, render_layout, ScreenAreas};
pub use styles::{ColorConfig, Palette};

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::state::{self, AppState, CopyIndicator};
use crate::view::constants::TICK_INTERVAL;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    clipboard: Box<dyn ClipboardSink>,
    palette: Palette,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(app_state: AppState, palette: Palette) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            clipboard: Box::new(SystemClipboard::new()),
            palette,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws on input, resize, and
    /// when the copy indicator expires; an idle editor does no work.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    // Release/repeat events would double every key on some platforms.
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        if self.handle_mouse(mouse) {
                            self.draw()?;
                        }
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height);
                        self.draw()?;
                    }
                    _ => {}
                }
            }

            if self.tick(Instant::now()) {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Special case: Ctrl+C should always quit, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Special case: Escape closes help overlay if visible (before key binding dispatch)
        if key.code == KeyCode::Esc && self.app_state.help_visible {
            self.app_state.help_visible = false;
            return false;
        }

        // Text entry captures every key while a field is being typed into
        if self.app_state.form.is_editing() {
            self.handle_text_key(key);
            return false;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false, // Unknown key, ignore
        };

        // Block most actions while the help overlay is visible
        if self.app_state.help_visible && !action.allowed_over_help() {
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Copy => self.copy_code(),
            other => {
                let app_state = std::mem::take(&mut self.app_state);
                self.app_state = state::handle_action(app_state, other);
            }
        }
        false
    }

    /// Route a key to the open text buffer.
    fn handle_text_key(&mut self, key: KeyEvent) {
        let app_state = std::mem::take(&mut self.app_state);
        self.app_state = match key.code {
            KeyCode::Enter => state::commit_edit(app_state),
            KeyCode::Esc => state::cancel_edit(app_state),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state::handle_text_input(app_state, |input| input.insert_char(c))
            }
            KeyCode::Backspace => state::handle_text_input(app_state, |input| input.backspace()),
            KeyCode::Delete => state::handle_text_input(app_state, |input| input.delete()),
            KeyCode::Left => state::handle_text_input(app_state, |input| input.cursor_left()),
            KeyCode::Right => state::handle_text_input(app_state, |input| input.cursor_right()),
            KeyCode::Home => state::handle_text_input(app_state, |input| input.cursor_home()),
            KeyCode::End => state::handle_text_input(app_state, |input| input.cursor_end()),
            _ => app_state,
        };
    }

    /// Copy the generated code and arm the indicator.
    ///
    /// A failed write is shown and logged; it never stops the editor.
    fn copy_code(&mut self) {
        let code = self.app_state.generated_code();
        let result = self.clipboard.write_text(&code);
        match &result {
            Ok(()) => info!(
                format = self.app_state.output_format.label(),
                bytes = code.len(),
                "Copied generated code"
            ),
            Err(e) => warn!(error = %e, "Copy to clipboard failed"),
        }
        self.app_state.copy_indicator = CopyIndicator::from_result(&result, Instant::now());
    }

    /// Handle a single mouse event
    ///
    /// Left clicks select the box under the cursor. Returns true if the
    /// screen needs a redraw.
    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        if self.app_state.help_visible {
            return false;
        }
        let app_state = std::mem::take(&mut self.app_state);
        self.app_state = state::handle_mouse_click(app_state, mouse.column, mouse.row);
        true
    }

    /// Handle a terminal resize event
    ///
    /// The canvas host size changes with the terminal, so the viewport scale
    /// is re-observed.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.observe_canvas(Rect::new(0, 0, width, height));
    }

    fn observe_canvas(&mut self, frame_area: Rect) {
        let areas = calculate_areas(frame_area);
        self.app_state
            .viewport
            .observe_host(canvas::host_size(areas.canvas));
    }

    /// Expire the copy indicator. Returns true if it changed.
    fn tick(&mut self, now: Instant) -> bool {
        let before = self.app_state.copy_indicator;
        self.app_state.copy_indicator = before.expire(now);
        before != self.app_state.copy_indicator
    }

    /// Render the current frame
    ///
    /// Re-observes the canvas size first, then stores the drawn box
    /// rectangles for mouse selection.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        self.observe_canvas(Rect::new(0, 0, size.width, size.height));

        let mut hits = Vec::new();
        self.terminal.draw(|frame| {
            hits = render_layout(frame, &self.app_state, &self.palette);
        })?;
        self.app_state.box_hits = hits;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            clipboard,
            palette: Palette::new(ColorConfig::enabled()),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) -> bool {
        self.handle_mouse(mouse)
    }

    pub(crate) fn tick_test(&mut self, now: Instant) -> bool {
        self.tick(now)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_app(app_state: AppState, palette: Palette) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, palette)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
