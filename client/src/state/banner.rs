//! Transient error banner.
//!
//! A shown message stays visible for [`BANNER_DISMISS`] and then disappears
//! on its own. Showing a new message restarts the timer. Time is passed in
//! by the caller so the behavior is deterministic under test.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use std::time::{Duration, Instant};

pub const BANNER_DISMISS: Duration = Duration::from_millis(5000);

#[derive(Clone, Debug, Default)]
pub struct ErrorBanner {
    shown: Option<(String, Instant)>,
}

impl ErrorBanner {
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.shown = Some((message.into(), now));
    }

    /// The visible message at `now`, if any.
    #[must_use]
    pub fn message(&self, now: Instant) -> Option<&str> {
        match &self.shown {
            Some((message, at)) if now.saturating_duration_since(*at) < BANNER_DISMISS => Some(message),
            _ => None,
        }
    }

    /// Drop the message early (the banner's close button).
    pub fn dismiss(&mut self) {
        self.shown = None;
    }
}
