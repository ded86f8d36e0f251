//! Per-plane clipping state and the store that owns it.

use std::ops::{Index, IndexMut};

use crate::AnatomicalPlane;

/// Lowest normalized slider position.
pub const POSITION_MIN: f32 = -1.0;
/// Highest normalized slider position.
pub const POSITION_MAX: f32 = 1.0;

/// Clamps a slider position into `[-1, 1]`. `NaN` becomes the midpoint.
#[inline]
pub const fn clamp_position(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else if value < POSITION_MIN {
        POSITION_MIN
    } else if value > POSITION_MAX {
        POSITION_MAX
    } else {
        value
    }
}

/// Clipping state of a single anatomical plane.
///
/// The position is always within `[-1, 1]`; every constructor and setter
/// clamps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClippingState {
    enabled: bool,
    position: f32,
    inverted: bool,
}

impl ClippingState {
    /// A disabled plane at the midpoint, not inverted.
    pub const DISABLED: ClippingState = ClippingState {
        enabled: false,
        position: 0.0,
        inverted: false,
    };

    pub const fn new(enabled: bool, position: f32, inverted: bool) -> Self {
        Self {
            enabled,
            position: clamp_position(position),
            inverted,
        }
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[inline]
    pub fn set_position(&mut self, position: f32) {
        self.position = clamp_position(position);
    }

    #[inline]
    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }
}

/// The clipping state of all three planes.
///
/// Indexable by [`AnatomicalPlane`]; every plane always has an entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClippingStates {
    planes: [ClippingState; 3],
}

impl ClippingStates {
    /// All planes disabled, at the midpoint, not inverted.
    pub const BASELINE: ClippingStates = ClippingStates {
        planes: [ClippingState::DISABLED; 3],
    };

    pub fn new(sagittal: ClippingState, coronal: ClippingState, axial: ClippingState) -> Self {
        Self {
            planes: [sagittal, coronal, axial],
        }
    }

    /// Iterates `(plane, state)` pairs in compilation order.
    pub fn iter(&self) -> impl Iterator<Item = (AnatomicalPlane, &ClippingState)> {
        AnatomicalPlane::ALL.into_iter().zip(self.planes.iter())
    }

    /// Number of enabled planes.
    pub fn enabled_count(&self) -> usize {
        self.planes.iter().filter(|s| s.enabled).count()
    }

    /// Returns true if any plane is enabled.
    pub fn any_enabled(&self) -> bool {
        self.planes.iter().any(|s| s.enabled)
    }
}

impl Index<AnatomicalPlane> for ClippingStates {
    type Output = ClippingState;

    #[inline]
    fn index(&self, plane: AnatomicalPlane) -> &ClippingState {
        &self.planes[plane.index()]
    }
}

impl IndexMut<AnatomicalPlane> for ClippingStates {
    #[inline]
    fn index_mut(&mut self, plane: AnatomicalPlane) -> &mut ClippingState {
        &mut self.planes[plane.index()]
    }
}

/// Owns the live clipping state of one viewer.
#[derive(Debug, Clone, Default)]
pub struct ClippingStateStore {
    states: ClippingStates,
}

impl ClippingStateStore {
    /// Creates a store with every plane disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current state.
    #[inline]
    pub fn states(&self) -> ClippingStates {
        self.states
    }

    /// Flips `enabled` for one plane.
    pub fn toggle_enabled(&mut self, plane: AnatomicalPlane) {
        let state = &mut self.states[plane];
        state.set_enabled(!state.enabled());
    }

    /// Stores the clamped position for one plane.
    pub fn set_position(&mut self, plane: AnatomicalPlane, value: f32) {
        self.states[plane].set_position(value);
    }

    /// Flips `inverted` for one plane.
    pub fn toggle_inverted(&mut self, plane: AnatomicalPlane) {
        let state = &mut self.states[plane];
        state.set_inverted(!state.inverted());
    }

    /// Replaces the whole state in one write.
    pub fn replace(&mut self, states: ClippingStates) {
        self.states = states;
    }
}
