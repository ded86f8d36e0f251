//! Translucent plane indicators.
//!
//! An indicator is a quad drawn where an active clip plane cuts the model. It
//! is derived entirely from the plane's state and the model bounds and holds
//! no state of its own.

use std::f32::consts::FRAC_PI_2;

use nalgebra::{Point3, Rotation3, Vector3};

use crate::{AnatomicalPlane, Axis, BoundingBox, map_position};

/// Padding added on each side of the indicator beyond the model bounds.
pub const INDICATOR_MARGIN: f32 = 0.1;

/// A rectangle (quad) in 3D space, defined by a corner and two edge vectors.
///
/// The four vertices are:
/// - `origin`
/// - `origin + u`
/// - `origin + u + v`
/// - `origin + v`
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    origin: Point3<f32>,
    u: Vector3<f32>,
    v: Vector3<f32>,
}

impl Rectangle {
    /// Creates a new rectangle from an origin corner and two edge vectors.
    pub fn new(origin: Point3<f32>, u: Vector3<f32>, v: Vector3<f32>) -> Self {
        Self { origin, u, v }
    }

    /// Returns the four vertices of the rectangle.
    ///
    /// Order: origin, origin+u, origin+u+v, origin+v (counter-clockwise).
    pub fn vertices(&self) -> [Point3<f32>; 4] {
        [
            self.origin,
            self.origin + self.u,
            self.origin + self.u + self.v,
            self.origin + self.v,
        ]
    }

    /// Computes the unit normal vector of the rectangle (u × v).
    ///
    /// Returns `None` if the rectangle is degenerate (zero area).
    pub fn unit_normal(&self) -> Option<Vector3<f32>> {
        let n = self.u.cross(&self.v);
        let len = n.norm();
        if len > f32::EPSILON {
            Some(n / len)
        } else {
            None
        }
    }
}

/// Where and how large to draw the guide quad of one active plane.
///
/// The quad is modelled as lying in the local XY plane facing +Z, then turned
/// by `rotation` so it faces along the plane's axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneIndicator {
    pub plane: AnatomicalPlane,
    pub center: Point3<f32>,
    pub rotation: Rotation3<f32>,
    pub width: f32,
    pub height: f32,
}

impl PlaneIndicator {
    /// The indicator quad in world space.
    pub fn rectangle(&self) -> Rectangle {
        let u = self.rotation * Vector3::new(self.width, 0.0, 0.0);
        let v = self.rotation * Vector3::new(0.0, self.height, 0.0);
        Rectangle::new(self.center - (u + v) * 0.5, u, v)
    }

    /// Display color of the plane.
    pub fn color(&self) -> [u8; 3] {
        self.plane.config().color
    }
}

/// Fixed orientation of the indicator quad and the world axes spanned by its
/// local X and Y edges.
fn orientation(axis: Axis) -> (Rotation3<f32>, Axis, Axis) {
    match axis {
        Axis::X => (
            Rotation3::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2),
            Axis::Z,
            Axis::Y,
        ),
        Axis::Y => (
            Rotation3::from_axis_angle(&Vector3::x_axis(), -FRAC_PI_2),
            Axis::X,
            Axis::Z,
        ),
        Axis::Z => (Rotation3::identity(), Axis::X, Axis::Y),
    }
}

/// Computes the indicator of one plane, or `None` while the plane is disabled.
///
/// Missing or invalid bounds fall back to the unit cube.
pub fn plane_indicator(
    plane: AnatomicalPlane,
    position: f32,
    enabled: bool,
    bounds: Option<&BoundingBox>,
) -> Option<PlaneIndicator> {
    if !enabled {
        return None;
    }

    let bounds = BoundingBox::resolve(bounds.copied());
    let axis = plane.axis();
    let mut center = bounds.center();
    center[axis.index()] = map_position(plane, position, Some(&bounds));

    let (rotation, width_axis, height_axis) = orientation(axis);
    Some(PlaneIndicator {
        plane,
        center,
        rotation,
        width: bounds.extent_on(width_axis) + 2.0 * INDICATOR_MARGIN,
        height: bounds.extent_on(height_axis) + 2.0 * INDICATOR_MARGIN,
    })
}

#[derive(Debug, Clone, PartialEq)]
struct IndicatorKey {
    position: f32,
    enabled: bool,
    bounds: Option<BoundingBox>,
}

/// Memoizes [`plane_indicator`] for a single plane.
///
/// The indicator is recomputed only when one of its inputs changes.
#[derive(Debug, Clone)]
pub struct IndicatorCache {
    plane: AnatomicalPlane,
    key: Option<IndicatorKey>,
    value: Option<PlaneIndicator>,
    computations: usize,
}

impl IndicatorCache {
    pub fn new(plane: AnatomicalPlane) -> Self {
        Self {
            plane,
            key: None,
            value: None,
            computations: 0,
        }
    }

    /// Returns the indicator for the given inputs, recomputing only on change.
    pub fn get(
        &mut self,
        position: f32,
        enabled: bool,
        bounds: Option<&BoundingBox>,
    ) -> Option<&PlaneIndicator> {
        let key = IndicatorKey {
            position,
            enabled,
            bounds: bounds.copied(),
        };
        if self.key.as_ref() != Some(&key) {
            self.value = plane_indicator(self.plane, position, enabled, bounds);
            self.key = Some(key);
            self.computations += 1;
        }
        self.value.as_ref()
    }

    /// How many times the indicator has been computed.
    pub fn computations(&self) -> usize {
        self.computations
    }
}
