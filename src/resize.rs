//! Resize debouncing.
//!
//! A burst of resize notifications becomes one [`ResizeEvent::Start`] when
//! the burst begins and one [`ResizeEvent::End`] once no notification has
//! arrived for the timeout. The caller supplies the clock as a monotonic
//! [`Duration`] since any fixed origin, so this works without `std` and is
//! trivially testable.
//!
//! ```text
//!     on_resize  ×   ×  ×        ×
//!     events     Start                 End (last + timeout)
//!     time  ─────┼───┼──┼────────┼─────┼──────────▶
//! ```

use core::time::Duration;

use crate::config::DEFAULT_RESIZE_TIMEOUT;

/// Debounced resize transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResizeEvent {
    /// First notification of a burst. Prior placements should be cleared.
    Start,
    /// The container has settled. Time to re-layout.
    End,
}

/// Collapses resize notifications into start/end transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResizeDebouncer {
    timeout: Duration,
    last_resize: Option<Duration>,
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_TIMEOUT)
    }
}

impl ResizeDebouncer {
    /// Debouncer that settles `timeout` after the last notification.
    pub const fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            last_resize: None,
        }
    }

    /// The configured quiet period.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Record a resize notification at `now`.
    ///
    /// Returns [`ResizeEvent::Start`] when this begins a new burst.
    pub fn on_resize(&mut self, now: Duration) -> Option<ResizeEvent> {
        let starting = self.last_resize.is_none();
        self.last_resize = Some(now);
        starting.then_some(ResizeEvent::Start)
    }

    /// Check whether the current burst has settled by `now`.
    ///
    /// Returns [`ResizeEvent::End`] once, then goes idle.
    pub fn poll(&mut self, now: Duration) -> Option<ResizeEvent> {
        let last = self.last_resize?;
        if now.saturating_sub(last) >= self.timeout {
            self.last_resize = None;
            Some(ResizeEvent::End)
        } else {
            None
        }
    }

    /// Change the quiet period. An open burst stays open and settles
    /// `timeout` after its last notification.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// When the pending [`ResizeEvent::End`] becomes due, if a burst is open.
    pub fn deadline(&self) -> Option<Duration> {
        self.last_resize.map(|t| t.saturating_add(self.timeout))
    }

    /// True between a `Start` and its `End`.
    pub fn is_settling(&self) -> bool {
        self.last_resize.is_some()
    }

    /// Drop any open burst without emitting `End`.
    pub fn reset(&mut self) {
        self.last_resize = None;
    }
}
