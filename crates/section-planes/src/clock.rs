//! Tick sources: the clock and repeating-timer abstraction driving animations.
//!
//! Everything runs on the host's single UI thread. A [`TickSource`] does not
//! call back into the animator by itself; the host polls, and forwards a tick
//! to the owner of each scheduled timer (see
//! [`ClippingController::tick`](crate::ClippingController::tick)). Cancelling a
//! timer guarantees that its owner ignores later ticks.

use std::time::{Duration, Instant};

/// Handle of a repeating timer registered with a [`TickSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A monotonic clock with repeating-timer registration.
pub trait TickSource {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;

    /// Registers a new repeating timer.
    fn schedule_repeating(&mut self) -> TimerId;

    /// Cancels a timer. Cancelling an unknown or already cancelled timer is a no-op.
    fn cancel(&mut self, timer: TimerId);

    /// Returns true if the timer is registered and not cancelled.
    fn is_scheduled(&self, timer: TimerId) -> bool;

    /// Number of timers currently registered.
    fn scheduled_count(&self) -> usize;
}

impl<C: TickSource + ?Sized> TickSource for &mut C {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn schedule_repeating(&mut self) -> TimerId {
        (**self).schedule_repeating()
    }

    fn cancel(&mut self, timer: TimerId) {
        (**self).cancel(timer);
    }

    fn is_scheduled(&self, timer: TimerId) -> bool {
        (**self).is_scheduled(timer)
    }

    fn scheduled_count(&self) -> usize {
        (**self).scheduled_count()
    }
}

/// Timer bookkeeping shared by the clock implementations.
#[derive(Debug, Default)]
struct TimerSet {
    next_id: u64,
    active: Vec<TimerId>,
}

impl TimerSet {
    fn schedule(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.active.push(id);
        id
    }

    fn cancel(&mut self, timer: TimerId) {
        self.active.retain(|t| *t != timer);
    }

    fn contains(&self, timer: TimerId) -> bool {
        self.active.contains(&timer)
    }
}

/// A clock that only moves when told to. Used for deterministic tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    timers: TimerSet,
}

impl ManualClock {
    /// Creates a clock at time zero with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward.
    pub fn advance(&mut self, delta: Duration) {
        self.now += delta;
    }

    /// Moves time forward by a number of milliseconds.
    pub fn advance_ms(&mut self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }
}

impl TickSource for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule_repeating(&mut self) -> TimerId {
        self.timers.schedule()
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.cancel(timer);
    }

    fn is_scheduled(&self, timer: TimerId) -> bool {
        self.timers.contains(timer)
    }

    fn scheduled_count(&self) -> usize {
        self.timers.active.len()
    }
}

/// Wall-clock tick source backed by [`Instant`].
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
    timers: TimerSet,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            timers: TimerSet::default(),
        }
    }
}

impl TickSource for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn schedule_repeating(&mut self) -> TimerId {
        self.timers.schedule()
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.cancel(timer);
    }

    fn is_scheduled(&self, timer: TimerId) -> bool {
        self.timers.contains(timer)
    }

    fn scheduled_count(&self) -> usize {
        self.timers.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.now(), Duration::ZERO);
        clock.advance_ms(120);
        clock.advance(Duration::from_millis(30));
        assert_eq!(clock.now(), Duration::from_millis(150));
    }

    #[test]
    fn timers_are_unique_and_cancellable() {
        let mut clock = ManualClock::new();
        let a = clock.schedule_repeating();
        let b = clock.schedule_repeating();
        assert_ne!(a, b);
        assert_eq!(clock.scheduled_count(), 2);

        clock.cancel(a);
        assert!(!clock.is_scheduled(a));
        assert!(clock.is_scheduled(b));
        assert_eq!(clock.scheduled_count(), 1);

        clock.cancel(a);
        assert_eq!(clock.scheduled_count(), 1);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
