//! The clipping controller: the public face of one viewer's clipping state.

use crate::{
    AnatomicalPlane, BoundingBox, ClippingStateStore, ClippingStates, CompiledClipping,
    IndicatorCache, PlaneIndicator, Preset, RenderClippingPort, TickSource, TransitionAnimator,
    compile, preset,
};

/// Owns the clipping state of one viewer and keeps its render sink in sync.
///
/// Every mutation is followed by a recompile; the sink is written only when
/// the compiled output changes, always as a full replacement. Dropping the
/// controller tears the viewer down: any transition is cancelled and the sink
/// is cleared, so no clipping leaks into whatever the host renders next.
///
/// The host drives animations by calling [`ClippingController::tick`] from its
/// frame or timer loop.
///
/// ```no_run
/// use section_planes::{ClippingController, RecordingPort, SystemClock, preset};
///
/// let mut viewer = ClippingController::new(RecordingPort::new(), SystemClock::new());
/// viewer.apply_preset(&preset::QUARTER);
/// while viewer.is_animating() {
///     viewer.tick();
/// }
/// ```
pub struct ClippingController<P: RenderClippingPort, C: TickSource> {
    store: ClippingStateStore,
    animator: TransitionAnimator,
    bounds: Option<BoundingBox>,
    port: P,
    clock: C,
    published: CompiledClipping,
    indicators: [IndicatorCache; 3],
}

impl<P: RenderClippingPort, C: TickSource> ClippingController<P, C> {
    /// Mounts a viewer with every plane disabled.
    ///
    /// The sink immediately receives an empty plane list with clipping
    /// disabled, so it starts from a known state.
    pub fn new(mut port: P, clock: C) -> Self {
        let published = CompiledClipping::empty();
        port.publish(&published);
        Self {
            store: ClippingStateStore::new(),
            animator: TransitionAnimator::new(),
            bounds: None,
            port,
            clock,
            published,
            indicators: AnatomicalPlane::ALL.map(IndicatorCache::new),
        }
    }

    /// Sets the model bounds at construction time.
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.set_bounds(Some(bounds));
        self
    }

    /// Returns a snapshot of the live clipping state.
    #[inline]
    pub fn states(&self) -> ClippingStates {
        self.store.states()
    }

    /// Flips whether a plane clips.
    pub fn toggle_plane(&mut self, plane: AnatomicalPlane) {
        self.store.toggle_enabled(plane);
        self.recompute();
    }

    /// Moves a plane; the value is clamped to `[-1, 1]`.
    pub fn set_position(&mut self, plane: AnatomicalPlane, value: f32) {
        self.store.set_position(plane, value);
        self.recompute();
    }

    /// Flips which side of a plane is kept.
    pub fn toggle_invert(&mut self, plane: AnatomicalPlane) {
        self.store.toggle_inverted(plane);
        self.recompute();
    }

    /// Starts an animated transition to a preset.
    ///
    /// A transition already in flight is cancelled; the new one starts from
    /// whatever is displayed right now.
    pub fn apply_preset(&mut self, preset: &Preset) {
        log::debug!("applying clipping preset `{}`", preset.id);
        let target = preset.materialize();
        self.animator.start(self.store.states(), target, &mut self.clock);
    }

    /// Animates back to the unclipped model.
    pub fn reset(&mut self) {
        self.apply_preset(&preset::NONE);
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Scheduler callback: advances the transition in flight, if any.
    ///
    /// The new state is written in one step and compiled before returning.
    /// Returns true while a transition is still running.
    pub fn tick(&mut self) -> bool {
        if let Some(states) = self.animator.tick(&mut self.clock) {
            self.store.replace(states);
            self.recompute();
        }
        self.animator.is_animating()
    }

    /// Updates the model bounds and recompiles.
    ///
    /// Degenerate or non-finite bounds are logged and replaced by the unit cube.
    pub fn set_bounds(&mut self, bounds: Option<BoundingBox>) {
        self.bounds = bounds.map(|b| BoundingBox::resolve(Some(b)));
        self.recompute();
    }

    /// The bounds positions are currently mapped against.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::resolve(self.bounds)
    }

    /// The output most recently sent to the sink.
    #[inline]
    pub fn compiled(&self) -> &CompiledClipping {
        &self.published
    }

    /// The guide quad of a plane, or `None` while the plane is disabled.
    pub fn indicator(&mut self, plane: AnatomicalPlane) -> Option<&PlaneIndicator> {
        let state = self.store.states()[plane];
        self.indicators[plane.index()].get(state.position(), state.enabled(), self.bounds.as_ref())
    }

    #[inline]
    pub fn port(&self) -> &P {
        &self.port
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Tears the viewer down. Equivalent to dropping it.
    pub fn teardown(self) {}

    fn recompute(&mut self) {
        let compiled = compile(&self.store.states(), self.bounds.as_ref());
        if compiled != self.published {
            log::debug!("publishing {} clip plane(s)", compiled.len());
            self.port.publish(&compiled);
            self.published = compiled;
        }
    }
}

impl<P: RenderClippingPort, C: TickSource> Drop for ClippingController<P, C> {
    fn drop(&mut self) {
        self.animator.cancel(&mut self.clock);
        self.port.clear();
        log::debug!("clipping viewer torn down");
    }
}
