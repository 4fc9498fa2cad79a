//! Error types for the flexlab application.
//!
//! Each concern owns a `thiserror` enum next to the code that raises it; this
//! module composes them into the top-level [`AppError`] returned from `main`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - `ConfigError` - config file unreadable or not valid TOML
//!   - `LoggingError` - log file could not be set up
//!   - `TuiError` - terminal setup, drawing or event polling failed
//!   - `std::io::Error` - stdout failures in `--print` mode
//!
//! Editing the layout never fails. Free-form values are passed through as
//! typed, removing the last box is a no-op and edits for a box that no
//! longer exists are dropped, so none of those paths produce an error.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// All variants convert via `From`, so `main` can use `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// The configuration file exists but could not be used.
    ///
    /// A missing file is not an error; defaults apply instead.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log file or the global subscriber could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the editor cannot run. The terminal is
    /// restored before the error reaches the user.
    #[error("Terminal error: {0}")]
    Tui(#[from] TuiError),

    /// Writing generated code to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
