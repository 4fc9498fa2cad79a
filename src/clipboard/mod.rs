//! Clipboard boundary.
//!
//! The app writes generated code through [`ClipboardSink`]. The system
//! implementation talks to the desktop clipboard via `arboard`; tests use
//! [`MemoryClipboard`].

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use tracing::debug;

/// Failures writing to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard is reachable (headless session, missing display server).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard was reachable but rejected the write.
    #[error("failed to copy: {0}")]
    Write(String),
}

/// Text sink for the copy action.
pub trait ClipboardSink {
    /// Places `text` on the clipboard, replacing its contents.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The desktop clipboard.
///
/// The handle is opened on the first write, so a session that never copies
/// never touches the display server. A failed open is retried on the next
/// write.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Creates a clipboard with no open handle.
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.handle.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            debug!("System clipboard opened");
            self.handle = Some(clipboard);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self.handle()?;
        match clipboard.set_text(text) {
            Ok(()) => Ok(()),
            Err(e) => {
                // Drop the handle so the next write reconnects.
                self.handle = None;
                Err(ClipboardError::Write(e.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

/// In-memory clipboard recording every write. Can be told to fail.
///
/// Clones share one write log, so a caller can keep a handle to a clipboard
/// it has boxed and handed off.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    writes: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl MemoryClipboard {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail.
    pub fn failing() -> Self {
        Self {
            writes: Rc::default(),
            fail: true,
        }
    }

    /// Every write so far, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// The most recent write, if any.
    pub fn last(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("memory clipboard set to fail".to_string()));
        }
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}
