//! Grace-delayed dismissal of the suggestion menu
//!
//! Losing terminal focus should close the menu, but not before a pointer
//! press on a row has had a chance to resolve. Focus loss arms the timer;
//! the event loop checks expiry each tick and dismisses only if no press is
//! still pending. Regaining focus cancels it.

use std::time::{Duration, Instant};

/// Grace delay between focus loss and dismissal, in milliseconds
pub const DEFAULT_GRACE_MS: u64 = 150;

/// Tracks the grace window after a focus loss.
#[derive(Debug)]
pub struct DismissTimer {
    delay_ms: u64,
    armed_at: Option<Instant>,
}

impl DismissTimer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            armed_at: None,
        }
    }

    /// Start (or restart) the grace window
    pub fn arm(&mut self) {
        self.armed_at = Some(Instant::now());
    }

    /// Abort a pending dismissal
    pub fn cancel(&mut self) {
        self.armed_at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    /// True once the grace window has elapsed since `arm`
    pub fn is_expired(&self) -> bool {
        match self.armed_at {
            Some(armed_at) => armed_at.elapsed() >= Duration::from_millis(self.delay_ms),
            None => false,
        }
    }
}

impl Default for DismissTimer {
    fn default() -> Self {
        Self::new(DEFAULT_GRACE_MS)
    }
}
