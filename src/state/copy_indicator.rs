//! Transient result of the last copy action.
//!
//! The indicator shows for [`COPY_INDICATOR_DURATION`] and then resets to
//! idle on the next tick. It never feeds back into the layout.

use std::time::{Duration, Instant};

/// How long the "copied"/"failed" state stays visible.
pub const COPY_INDICATOR_DURATION: Duration = Duration::from_secs(2);

/// Feedback shown after a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyIndicator {
    /// No recent copy.
    #[default]
    Idle,
    /// The last copy succeeded.
    Copied {
        /// When the copy happened.
        at: Instant,
    },
    /// The last copy failed.
    Failed {
        /// When the copy was attempted.
        at: Instant,
    },
}

impl CopyIndicator {
    /// Indicator for a copy attempt finishing at `at`.
    pub fn from_result<E>(result: &Result<(), E>, at: Instant) -> Self {
        match result {
            Ok(()) => CopyIndicator::Copied { at },
            Err(_) => CopyIndicator::Failed { at },
        }
    }

    /// Reset to idle once the display window has passed.
    pub fn expire(self, now: Instant) -> Self {
        match self {
            CopyIndicator::Copied { at } | CopyIndicator::Failed { at }
                if now.saturating_duration_since(at) >= COPY_INDICATOR_DURATION =>
            {
                CopyIndicator::Idle
            }
            other => other,
        }
    }

    /// True when no copy feedback is showing.
    pub fn is_idle(&self) -> bool {
        matches!(self, CopyIndicator::Idle)
    }

    /// Label for the copy button.
    pub fn label(&self) -> &'static str {
        match self {
            CopyIndicator::Idle => "Copy Code",
            CopyIndicator::Copied { .. } => "Copied!",
            CopyIndicator::Failed { .. } => "Copy failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copied_stays_within_window() {
        let at = Instant::now();
        let indicator = CopyIndicator::Copied { at };
        let later = at + Duration::from_millis(1999);
        assert_eq!(indicator.expire(later), indicator);
    }

    #[test]
    fn copied_resets_after_window() {
        let at = Instant::now();
        let indicator = CopyIndicator::Copied { at };
        assert_eq!(
            indicator.expire(at + COPY_INDICATOR_DURATION),
            CopyIndicator::Idle
        );
    }

    #[test]
    fn failed_also_expires() {
        let at = Instant::now();
        let indicator = CopyIndicator::Failed { at };
        assert!(indicator.expire(at + Duration::from_secs(3)).is_idle());
    }

    #[test]
    fn clock_before_event_does_not_expire() {
        let at = Instant::now() + Duration::from_secs(10);
        let indicator = CopyIndicator::Copied { at };
        assert_eq!(indicator.expire(Instant::now()), indicator);
    }

    #[test]
    fn from_result_maps_outcome() {
        let at = Instant::now();
        let ok: Result<(), ()> = Ok(());
        let err: Result<(), ()> = Err(());
        assert_eq!(CopyIndicator::from_result(&ok, at), CopyIndicator::Copied { at });
        assert_eq!(CopyIndicator::from_result(&err, at), CopyIndicator::Failed { at });
        assert_eq!(CopyIndicator::Idle.label(), "Copy Code");
    }
}
