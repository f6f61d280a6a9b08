//! Trailing-edge debounce
//!
//! A [`Debouncer`] holds at most one pending value with a deadline. Scheduling
//! a new value replaces the pending one and restarts the delay; the value is
//! handed back by [`Debouncer::poll`] once the deadline has passed with no
//! further scheduling.
//!
//! The current time is always passed in by the caller, so the event loop
//! decides what "now" is and tests never need to sleep.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Cancellable, single-slot deferred task
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Quiet period before a scheduled value fires
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the quiet period
    ///
    /// A pending value is re-armed with the new delay, counted from `now`.
    pub fn set_delay(&mut self, delay: Duration, now: Instant) {
        self.delay = delay;
        if let Some(pending) = self.pending.as_mut() {
            pending.deadline = now + delay;
        }
    }

    /// Schedule `value`, cancelling whatever was pending
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Drop the pending value, if any
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    /// Whether a value is waiting to fire
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value if its deadline has been reached
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if ready { self.cancel() } else { None }
    }

    /// Time left before the pending value fires
    ///
    /// `None` when nothing is pending, `Duration::ZERO` when it is overdue.
    #[must_use]
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|pending| pending.deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_nothing_pending_initially() {
        let mut debouncer: Debouncer<String> = Debouncer::new(DELAY);
        let now = Instant::now();

        assert!(!debouncer.is_pending());
        assert!(debouncer.poll(now + DELAY).is_none());
        assert!(debouncer.time_until_ready(now).is_none());
    }

    #[test]
    fn test_fires_after_delay() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();
        debouncer.schedule("ali", start);

        assert!(debouncer.poll(start + Duration::from_millis(299)).is_none());
        assert_eq!(debouncer.poll(start + DELAY), Some("ali"));
        // Fires exactly once
        assert!(debouncer.poll(start + DELAY * 2).is_none());
    }

    #[test]
    fn test_reschedule_restarts_delay() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.schedule("a", start);
        debouncer.schedule("al", start + Duration::from_millis(200));

        // The first deadline has passed but was superseded
        assert!(debouncer.poll(start + Duration::from_millis(350)).is_none());
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("al"));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();
        debouncer.schedule(1, start);

        assert_eq!(debouncer.cancel(), Some(1));
        assert!(debouncer.poll(start + DELAY).is_none());
    }

    #[test]
    fn test_zero_delay_fires_on_next_poll() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        let now = Instant::now();
        debouncer.schedule('x', now);

        assert_eq!(debouncer.time_until_ready(now), Some(Duration::ZERO));
        assert_eq!(debouncer.poll(now), Some('x'));
    }

    #[test]
    fn test_time_until_ready() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();
        debouncer.schedule((), start);

        assert_eq!(
            debouncer.time_until_ready(start + Duration::from_millis(100)),
            Some(Duration::from_millis(200))
        );
        assert_eq!(
            debouncer.time_until_ready(start + Duration::from_secs(1)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_set_delay_rearms_pending() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();
        debouncer.schedule("q", start);

        let later = start + Duration::from_millis(100);
        debouncer.set_delay(Duration::from_millis(1000), later);

        assert_eq!(debouncer.delay(), Duration::from_millis(1000));
        assert!(debouncer.poll(start + DELAY).is_none());
        assert_eq!(debouncer.poll(later + Duration::from_millis(1000)), Some("q"));
    }
}
