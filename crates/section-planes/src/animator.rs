//! Eased transitions between clipping states.

use std::time::Duration;

use crate::{ClippingState, ClippingStates, TickSource, TimerId};

/// Fixed length of every preset transition.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Cubic ease-out: fast at first, decelerating towards the end.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Blends two full states at a raw (un-eased) progress in `[0, 1]`.
///
/// Positions follow the eased curve. `enabled` jumps to the target at once,
/// and `inverted` switches only once progress passes one half.
pub fn interpolate(from: &ClippingStates, to: &ClippingStates, progress: f32) -> ClippingStates {
    let eased = ease_out_cubic(progress);
    let mut out = *from;
    for (plane, target) in to.iter() {
        let current = &from[plane];
        let position = current.position() + (target.position() - current.position()) * eased;
        let inverted = if progress > 0.5 {
            target.inverted()
        } else {
            current.inverted()
        };
        out[plane] = ClippingState::new(target.enabled(), position, inverted);
    }
    out
}

/// A transition in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: ClippingStates,
    to: ClippingStates,
    started: Duration,
    timer: TimerId,
}

impl Transition {
    /// The state the transition started from.
    pub fn from(&self) -> &ClippingStates {
        &self.from
    }

    /// The state the transition ends on.
    pub fn to(&self) -> &ClippingStates {
        &self.to
    }

    /// Raw progress in `[0, 1]` at time `now`.
    pub fn progress(&self, now: Duration) -> f32 {
        let elapsed = now.saturating_sub(self.started);
        if elapsed >= TRANSITION_DURATION {
            1.0
        } else {
            (elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0)
        }
    }
}

/// Drives at most one transition at a time.
///
/// Each transition owns exactly one repeating timer on the tick source. The
/// previous timer is always cancelled before a new one is registered, so no
/// two transitions ever advance the same state.
#[derive(Debug, Default)]
pub struct TransitionAnimator {
    active: Option<Transition>,
}

impl TransitionAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts animating from `from` to `to`, superseding any transition in flight.
    pub fn start<C: TickSource>(
        &mut self,
        from: ClippingStates,
        to: ClippingStates,
        clock: &mut C,
    ) {
        if self.cancel(clock) {
            log::debug!("superseding in-flight clipping transition");
        }
        let timer = clock.schedule_repeating();
        self.active = Some(Transition {
            from,
            to,
            started: clock.now(),
            timer,
        });
        log::debug!("clipping transition started ({timer:?})");
    }

    /// Stops the transition in flight, if any. Returns true if one was stopped.
    pub fn cancel<C: TickSource>(&mut self, clock: &mut C) -> bool {
        match self.active.take() {
            Some(transition) => {
                clock.cancel(transition.timer);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// The transition in flight, if any.
    pub fn transition(&self) -> Option<&Transition> {
        self.active.as_ref()
    }

    /// Advances the transition to the clock's current time.
    ///
    /// Returns the state to display, or `None` when nothing is animating.
    /// The final tick returns the target exactly, cancels the timer and ends
    /// the transition.
    pub fn tick<C: TickSource>(&mut self, clock: &mut C) -> Option<ClippingStates> {
        let transition = self.active.as_ref()?;
        if !clock.is_scheduled(transition.timer) {
            log::debug!("clipping transition timer was cancelled externally");
            self.active = None;
            return None;
        }

        let progress = transition.progress(clock.now());
        log::trace!("clipping transition progress {progress:.3}");
        if progress >= 1.0 {
            let target = transition.to;
            self.cancel(clock);
            log::debug!("clipping transition finished");
            return Some(target);
        }

        Some(interpolate(&transition.from, &transition.to, progress))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnatomicalPlane, ManualClock, preset};
    use approx::assert_relative_eq;

    #[test]
    fn ease_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_relative_eq!(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let value = ease_out_cubic(i as f32 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn interpolate_snaps_enabled_immediately() {
        let to = preset::TRANSVERSE.materialize();
        let blended = interpolate(&ClippingStates::BASELINE, &to, 0.01);
        assert!(blended[AnatomicalPlane::Axial].enabled());
    }

    #[test]
    fn interpolate_flips_inverted_after_half() {
        let to = preset::FRONTAL.materialize();
        let from = ClippingStates::BASELINE;
        assert!(!interpolate(&from, &to, 0.25)[AnatomicalPlane::Coronal].inverted());
        assert!(!interpolate(&from, &to, 0.5)[AnatomicalPlane::Coronal].inverted());
        assert!(interpolate(&from, &to, 0.51)[AnatomicalPlane::Coronal].inverted());
    }

    #[test]
    fn interpolate_eases_positions() {
        let to = preset::TRANSVERSE.materialize();
        let blended = interpolate(&ClippingStates::BASELINE, &to, 0.5);
        assert_relative_eq!(blended[AnatomicalPlane::Axial].position(), 0.2 * 0.875);
    }

    #[test]
    fn tick_without_transition_is_none() {
        let mut clock = ManualClock::new();
        let mut animator = TransitionAnimator::new();
        assert!(animator.tick(&mut clock).is_none());
        assert!(!animator.is_animating());
    }

    #[test]
    fn finishes_exactly_on_target() {
        let mut clock = ManualClock::new();
        let mut animator = TransitionAnimator::new();
        let to = preset::TRANSVERSE.materialize();
        animator.start(ClippingStates::BASELINE, to, &mut clock);

        clock.advance_ms(150);
        let mid = animator.tick(&mut clock).unwrap();
        assert!(animator.is_animating());
        assert_ne!(mid, to);

        clock.advance_ms(149);
        assert!(animator.tick(&mut clock).is_some());
        assert!(animator.is_animating());

        clock.advance_ms(1);
        assert_eq!(animator.tick(&mut clock), Some(to));
        assert!(!animator.is_animating());
        assert_eq!(clock.scheduled_count(), 0);
        assert!(animator.tick(&mut clock).is_none());
    }

    #[test]
    fn late_tick_still_lands_on_target() {
        let mut clock = ManualClock::new();
        let mut animator = TransitionAnimator::new();
        let to = preset::QUARTER.materialize();
        animator.start(ClippingStates::BASELINE, to, &mut clock);
        clock.advance_ms(5_000);
        assert_eq!(animator.tick(&mut clock), Some(to));
    }

    #[test]
    fn start_cancels_previous_timer() {
        let mut clock = ManualClock::new();
        let mut animator = TransitionAnimator::new();
        animator.start(ClippingStates::BASELINE, preset::FRONTAL.materialize(), &mut clock);
        assert_eq!(clock.scheduled_count(), 1);

        clock.advance_ms(100);
        animator.start(ClippingStates::BASELINE, preset::QUARTER.materialize(), &mut clock);
        assert_eq!(clock.scheduled_count(), 1);
        assert_eq!(animator.transition().unwrap().to(), &preset::QUARTER.materialize());
    }

    #[test]
    fn restarted_transition_measures_from_its_own_start() {
        let mut clock = ManualClock::new();
        let mut animator = TransitionAnimator::new();
        animator.start(ClippingStates::BASELINE, preset::FRONTAL.materialize(), &mut clock);
        clock.advance_ms(200);
        animator.start(ClippingStates::BASELINE, preset::QUARTER.materialize(), &mut clock);

        clock.advance_ms(200);
        assert!(animator.tick(&mut clock).is_some());
        assert!(animator.is_animating());
    }

    #[test]
    fn externally_cancelled_timer_stops_transition() {
        let mut clock = ManualClock::new();
        let mut animator = TransitionAnimator::new();
        animator.start(ClippingStates::BASELINE, preset::FRONTAL.materialize(), &mut clock);
        let timer = animator.transition().unwrap().timer;
        clock.cancel(timer);
        assert!(animator.tick(&mut clock).is_none());
        assert!(!animator.is_animating());
    }
}
