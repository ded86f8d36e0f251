//! Cross-section clipping for anatomical 3D viewers.
//!
//! Three axis-aligned planes (sagittal, coronal, axial) can each be enabled,
//! moved along a normalized `[-1, 1]` slider and inverted. Their state is
//! compiled against the model's bounding box into world-space half-space
//! equations and handed to a host-owned render sink. Named presets animate the
//! planes into standard anatomical views.
//!
//! # Architecture
//!
//! - [`ClippingController`]: one viewer's public API; wires everything below
//! - [`ClippingStateStore`]: the live per-plane state
//! - [`TransitionAnimator`]: eased preset transitions driven by a [`TickSource`]
//! - [`compile`]: state + bounds into an ordered list of [`CompiledPlane`]s
//! - [`map_position`]: slider position into a world coordinate
//! - [`RenderClippingPort`]: the sink receiving the compiled planes
//! - [`preset`]: the built-in presets
//! - [`plane_indicator`]: the translucent guide quad of an active plane

mod anatomy;
mod animator;
mod bounds;
mod clock;
mod compiler;
mod controller;
mod indicator;
mod plane;
pub mod preset;
mod sink;
mod state;

pub use anatomy::{AnatomicalPlane, Axis, PlaneConfig};
pub use animator::{
    TRANSITION_DURATION, Transition, TransitionAnimator, ease_out_cubic, interpolate,
};
pub use bounds::{BoundingBox, BoundsError, map_position};
pub use clock::{ManualClock, SystemClock, TickSource, TimerId};
pub use compiler::{CompiledClipping, compile};
pub use controller::ClippingController;
pub use indicator::{
    INDICATOR_MARGIN, IndicatorCache, PlaneIndicator, Rectangle, plane_indicator,
};
pub use plane::{CompiledPlane, PLANE_EPSILON, PlaneSide};
pub use preset::Preset;
pub use sink::{PortCall, RecordingPort, RenderClippingPort};
pub use state::{
    ClippingState, ClippingStateStore, ClippingStates, POSITION_MAX, POSITION_MIN, clamp_position,
};
