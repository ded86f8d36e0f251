//! Half-space clip plane equations.

use nalgebra::{Point3, Vector3};

use crate::{AnatomicalPlane, BoundingBox, ClippingState, map_position};

/// Default epsilon for plane classification.
/// Points within this distance of the plane are considered "on" the plane.
pub const PLANE_EPSILON: f32 = 1e-5;

/// Which side of a clip plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Retained side (positive side of normal)
    Front,
    /// Clipped side (negative side of normal)
    Back,
    /// On the plane, within epsilon tolerance. Retained.
    OnPlane,
}

/// A clip plane `normal · p = constant` ready for a GPU clipping pipeline.
///
/// A point `p` is retained when `normal · p - constant >= 0` and discarded
/// otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompiledPlane {
    normal: Vector3<f32>,
    constant: f32,
}

impl CompiledPlane {
    /// Creates a plane from a normal vector and constant.
    /// The normal will be normalized automatically.
    ///
    /// # Panics
    /// Panics if the normal vector has zero length.
    pub fn new(normal: Vector3<f32>, constant: f32) -> Self {
        let norm = normal.norm();
        assert!(norm > f32::EPSILON, "Plane normal cannot be zero");
        Self {
            normal: normal / norm,
            constant: constant / norm,
        }
    }

    /// Builds the clip plane for one anatomical plane.
    ///
    /// The constant is the mapped world coordinate of `state.position` along
    /// the plane's axis. Inverting flips the normal while keeping the
    /// constant, so the retained side switches but the cut stays in place
    /// for a cut through the origin.
    pub fn for_anatomical(
        plane: AnatomicalPlane,
        state: &ClippingState,
        bounds: &BoundingBox,
    ) -> Self {
        let base = plane.config().base_normal();
        Self {
            normal: if state.inverted() { -base } else { base },
            constant: map_position(plane, state.position(), Some(bounds)),
        }
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> Vector3<f32> {
        self.normal
    }

    /// Returns the plane constant.
    #[inline]
    pub fn constant(&self) -> f32 {
        self.constant
    }

    /// Computes the signed distance from a point to the plane.
    /// - Positive: point is retained
    /// - Negative: point is clipped away
    #[inline]
    pub fn signed_distance(&self, point: Point3<f32>) -> f32 {
        self.normal.dot(&point.coords) - self.constant
    }

    /// Returns true if the GPU pipeline keeps this point.
    #[inline]
    pub fn retains(&self, point: Point3<f32>) -> bool {
        self.signed_distance(point) >= 0.0
    }

    /// Classifies which side of the plane a point lies on.
    /// Uses the default `PLANE_EPSILON` tolerance.
    pub fn classify_point(&self, point: Point3<f32>) -> PlaneSide {
        let dist = self.signed_distance(point);
        if dist > PLANE_EPSILON {
            PlaneSide::Front
        } else if dist < -PLANE_EPSILON {
            PlaneSide::Back
        } else {
            PlaneSide::OnPlane
        }
    }

    /// Computes the intersection of a line segment with the plane.
    ///
    /// Returns `Some((t, point))` where `t` is the interpolation parameter
    /// along the segment, or `None` if the segment is parallel to the plane or
    /// doesn't reach it.
    pub fn intersect_segment(
        &self,
        start: Point3<f32>,
        end: Point3<f32>,
    ) -> Option<(f32, Point3<f32>)> {
        let direction = end - start;
        let denom = self.normal.dot(&direction);

        if denom.abs() < f32::EPSILON {
            return None;
        }

        let t = (self.constant - self.normal.dot(&start.coords)) / denom;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        Some((t, start + direction * t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_normalizes() {
        let plane = CompiledPlane::new(Vector3::new(0.0, 2.0, 0.0), 4.0);
        assert_relative_eq!(plane.normal(), Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(plane.constant(), 2.0);
    }

    #[test]
    #[should_panic(expected = "Plane normal cannot be zero")]
    fn new_rejects_zero_normal() {
        CompiledPlane::new(Vector3::zeros(), 1.0);
    }

    #[test]
    fn retains_positive_side_and_plane() {
        let plane = CompiledPlane::new(Vector3::x(), 0.5);
        assert!(plane.retains(Point3::new(1.0, 0.0, 0.0)));
        assert!(plane.retains(Point3::new(0.5, 3.0, -2.0)));
        assert!(!plane.retains(Point3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn classify_point_sides() {
        let plane = CompiledPlane::new(Vector3::z(), 0.0);
        assert_eq!(plane.classify_point(Point3::new(0.0, 0.0, 1.0)), PlaneSide::Front);
        assert_eq!(plane.classify_point(Point3::new(0.0, 0.0, -1.0)), PlaneSide::Back);
        assert_eq!(plane.classify_point(Point3::new(4.0, 2.0, 0.0)), PlaneSide::OnPlane);
    }

    #[test]
    fn intersect_segment_crossing() {
        let plane = CompiledPlane::new(Vector3::x(), 1.0);
        let (t, point) = plane
            .intersect_segment(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 0.0))
            .unwrap();
        assert_relative_eq!(t, 0.5);
        assert_relative_eq!(point, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn intersect_segment_parallel_or_short() {
        let plane = CompiledPlane::new(Vector3::x(), 1.0);
        assert!(plane
            .intersect_segment(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 5.0, 0.0))
            .is_none());
        assert!(plane
            .intersect_segment(Point3::new(0.0, 0.0, 0.0), Point3::new(0.5, 0.0, 0.0))
            .is_none());
    }

    #[test]
    fn for_anatomical_inverts_normal_only() {
        let bounds = BoundingBox::unit();
        let plain = ClippingState::new(true, 0.5, false);
        let inverted = ClippingState::new(true, 0.5, true);
        for plane in AnatomicalPlane::ALL {
            let base = plane.config().base_normal();
            let a = CompiledPlane::for_anatomical(plane, &plain, &bounds);
            let b = CompiledPlane::for_anatomical(plane, &inverted, &bounds);
            assert_eq!(a.normal(), base);
            assert_eq!(b.normal(), -base);
            assert_eq!(a.constant(), b.constant());
        }
    }
}
