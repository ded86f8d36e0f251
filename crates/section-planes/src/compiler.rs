//! Compilation of clipping state into world-space plane equations.

use nalgebra::Point3;

use crate::{AnatomicalPlane, BoundingBox, ClippingStates, CompiledPlane};

/// The compiled plane set handed to the render sink.
///
/// Planes appear in the order sagittal, coronal, axial, restricted to enabled
/// planes only.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledClipping {
    planes: Vec<CompiledPlane>,
}

impl CompiledClipping {
    /// The output with no active planes: the model is shown unclipped.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn planes(&self) -> &[CompiledPlane] {
        &self.planes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Whether GPU clipping must be enabled at all.
    #[inline]
    pub fn any_enabled(&self) -> bool {
        !self.planes.is_empty()
    }

    /// Returns true if every half-space keeps the point.
    pub fn retains(&self, point: Point3<f32>) -> bool {
        self.planes.iter().all(|plane| plane.retains(point))
    }
}

/// Compiles the enabled planes of `states` against the model bounds.
///
/// Missing or invalid bounds fall back to the unit cube.
pub fn compile(states: &ClippingStates, bounds: Option<&BoundingBox>) -> CompiledClipping {
    let bounds = BoundingBox::resolve(bounds.copied());
    let planes = AnatomicalPlane::ALL
        .into_iter()
        .filter(|&plane| states[plane].enabled())
        .map(|plane| CompiledPlane::for_anatomical(plane, &states[plane], &bounds))
        .collect();
    CompiledClipping { planes }
}
