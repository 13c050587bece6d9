//! Rate limiting for scroll-driven recomputation.

use std::time::{Duration, Instant};

/// One frame at 60 Hz.
pub const SCROLL_MIN_INTERVAL: Duration = Duration::from_micros(16_667);

/// Admits at most one event per `min_interval`.
///
/// Rejected events mark the throttle as pending so the caller can run one
/// trailing update with [`ScrollThrottle::flush`] once scrolling settles.
#[derive(Debug, Clone)]
pub struct ScrollThrottle {
    min_interval: Duration,
    last: Option<Instant>,
    pending: bool,
}

impl Default for ScrollThrottle {
    fn default() -> Self {
        Self::new(SCROLL_MIN_INTERVAL)
    }
}

impl ScrollThrottle {
    #[must_use]
    pub const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
            pending: false,
        }
    }

    /// Whether an event at `now` may run.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.ready(now) {
            self.last = Some(now);
            self.pending = false;
            true
        } else {
            self.pending = true;
            false
        }
    }

    /// Admit the trailing event, if one was dropped and the interval has passed.
    pub fn flush(&mut self, now: Instant) -> bool {
        self.pending && self.poll(now)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    fn ready(&self, now: Instant) -> bool {
        self.last
            .is_none_or(|last| now.saturating_duration_since(last) >= self.min_interval)
    }
}
