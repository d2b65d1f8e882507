//! Coalescing of render requests
//!
//! Mutations mark the debouncer dirty; the render loop asks whether a redraw
//! is due. Requests arriving within the window of the last render collapse
//! into one redraw once the window has passed. Core state is never touched.

use std::time::{Duration, Instant};
use tracing::trace;

/// Default coalescing window
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Tracks pending redraws and throttles them to one per window
#[derive(Clone, Debug)]
pub struct RenderDebouncer {
    window: Duration,
    dirty: bool,
    last_render: Option<Instant>,
    coalesced: u64,
}

impl RenderDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            dirty: false,
            last_render: None,
            coalesced: 0,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Request a redraw
    pub fn request(&mut self) {
        if self.dirty {
            self.coalesced += 1;
        }
        self.dirty = true;
    }

    /// Whether a redraw is pending
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Requests folded into an already pending redraw so far
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }

    /// Whether a pending redraw may run at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        self.dirty
            && self
                .last_render
                .map_or(true, |last| now.saturating_duration_since(last) >= self.window)
    }

    /// Take the pending redraw if it is due, marking it rendered at `now`
    pub fn poll_at(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.dirty = false;
        self.last_render = Some(now);
        trace!(coalesced = self.coalesced, "render due");
        true
    }

    /// [`poll_at`](Self::poll_at) with the current time
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }
}

impl Default for RenderDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_never_due() {
        let mut debouncer = RenderDebouncer::default();
        assert!(!debouncer.poll());
    }

    #[test]
    fn test_first_request_renders_immediately() {
        let mut debouncer = RenderDebouncer::default();
        debouncer.request();
        assert!(debouncer.poll_at(Instant::now()));
        assert!(!debouncer.is_dirty());
    }

    #[test]
    fn test_burst_coalesces_within_window() {
        let start = Instant::now();
        let mut debouncer = RenderDebouncer::new(Duration::from_millis(100));

        debouncer.request();
        assert!(debouncer.poll_at(start));

        for _ in 0..5 {
            debouncer.request();
        }
        assert!(!debouncer.poll_at(start + Duration::from_millis(40)));
        assert_eq!(debouncer.coalesced(), 4);

        assert!(debouncer.poll_at(start + Duration::from_millis(100)));
        assert!(!debouncer.poll_at(start + Duration::from_millis(250)));
    }
}
