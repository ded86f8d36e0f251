//! CPU half-space clipping of model faces.
//!
//! macroquad exposes no user clip planes, so the demo host applies the
//! published planes to its polygons before drawing them.

use nalgebra::{Point3, Vector3};
use section_planes::{CompiledPlane, PlaneSide, RenderClippingPort};

/// A convex polygon in 3D space, defined by an ordered list of vertices.
///
/// Vertices should be coplanar and in counter-clockwise winding order
/// when viewed from the front.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3<f32>>,
}

impl Polygon {
    /// Creates a new polygon from a list of vertices.
    ///
    /// # Panics (debug builds only)
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Point3<f32>>) -> Self {
        debug_assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    /// Unit normal from the first three vertices, or `None` if they are collinear.
    pub fn unit_normal(&self) -> Option<Vector3<f32>> {
        let n = (self.vertices[1] - self.vertices[0]).cross(&(self.vertices[2] - self.vertices[0]));
        let len = n.norm();
        if len > f32::EPSILON {
            Some(n / len)
        } else {
            None
        }
    }

    /// Computes the centroid (average of the vertices).
    pub fn centroid(&self) -> Point3<f32> {
        let sum: Vector3<f32> = self.vertices.iter().map(|p| p.coords).sum();
        Point3::from(sum / self.vertices.len() as f32)
    }
}

/// Keeps the part of a polygon on the retained side of one plane.
///
/// Walks the edges Sutherland-Hodgman style, keeping front and on-plane
/// vertices and inserting the crossing point of every edge that changes side.
/// Returns `None` when nothing with positive area is retained.
pub fn clip_to_half_space(polygon: &Polygon, plane: &CompiledPlane) -> Option<Polygon> {
    let vertices = polygon.vertices();
    let n = vertices.len();
    let sides: Vec<PlaneSide> = vertices.iter().map(|v| plane.classify_point(*v)).collect();

    if sides.iter().all(|s| *s != PlaneSide::Back) {
        return Some(polygon.clone());
    }
    if sides.iter().all(|s| *s != PlaneSide::Front) {
        return None;
    }

    let mut kept = Vec::with_capacity(n + 1);
    for i in 0..n {
        let next = (i + 1) % n;
        if sides[i] != PlaneSide::Back {
            kept.push(vertices[i]);
        }

        let crosses = matches!(
            (sides[i], sides[next]),
            (PlaneSide::Front, PlaneSide::Back) | (PlaneSide::Back, PlaneSide::Front)
        );
        if crosses {
            if let Some((_, point)) = plane.intersect_segment(vertices[i], vertices[next]) {
                kept.push(point);
            }
        }
    }

    (kept.len() >= 3).then(|| Polygon::new(kept))
}

/// Clips a polygon against every plane in turn.
pub fn clip_to_planes(polygon: &Polygon, planes: &[CompiledPlane]) -> Option<Polygon> {
    planes
        .iter()
        .try_fold(polygon.clone(), |current, plane| clip_to_half_space(&current, plane))
}

/// Render sink that clips model faces on the CPU.
#[derive(Debug, Clone, Default)]
pub struct CpuClipPort {
    planes: Vec<CompiledPlane>,
    enabled: bool,
}

impl CpuClipPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn planes(&self) -> &[CompiledPlane] {
        &self.planes
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// The visible part of a polygon under the current clipping.
    pub fn clip(&self, polygon: &Polygon) -> Option<Polygon> {
        if self.enabled {
            clip_to_planes(polygon, &self.planes)
        } else {
            Some(polygon.clone())
        }
    }
}

impl RenderClippingPort for CpuClipPort {
    fn set_clipping_planes(&mut self, planes: Vec<CompiledPlane>) {
        self.planes = planes;
    }

    fn set_clipping_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square_z0() -> Polygon {
        Polygon::new(vec![
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(1.0, -1.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(-1.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn fully_retained_is_unchanged() {
        let plane = CompiledPlane::new(Vector3::x(), -2.0);
        assert_eq!(clip_to_half_space(&unit_square_z0(), &plane), Some(unit_square_z0()));
    }

    #[test]
    fn fully_clipped_is_none() {
        let plane = CompiledPlane::new(Vector3::x(), 2.0);
        assert!(clip_to_half_space(&unit_square_z0(), &plane).is_none());
    }

    #[test]
    fn spanning_keeps_front_half() {
        let plane = CompiledPlane::new(Vector3::x(), 0.0);
        let kept = clip_to_half_space(&unit_square_z0(), &plane).unwrap();
        assert_eq!(kept.vertices().len(), 4);
        assert!(kept.vertices().iter().all(|v| v.x >= -1e-6));
        assert_relative_eq!(kept.centroid(), Point3::new(0.5, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn coplanar_polygon_is_retained() {
        let plane = CompiledPlane::new(Vector3::z(), 0.0);
        assert!(clip_to_half_space(&unit_square_z0(), &plane).is_some());
    }

    #[test]
    fn two_planes_keep_a_quarter() {
        let planes = [
            CompiledPlane::new(Vector3::x(), 0.0),
            CompiledPlane::new(-Vector3::y(), 0.0),
        ];
        let kept = clip_to_planes(&unit_square_z0(), &planes).unwrap();
        assert_relative_eq!(kept.centroid(), Point3::new(0.5, -0.5, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn port_passes_through_when_disabled() {
        let mut port = CpuClipPort::new();
        port.set_clipping_planes(vec![CompiledPlane::new(Vector3::x(), 5.0)]);
        assert_eq!(port.clip(&unit_square_z0()), Some(unit_square_z0()));

        port.set_clipping_enabled(true);
        assert!(port.clip(&unit_square_z0()).is_none());

        port.clear();
        assert!(port.planes().is_empty());
        assert!(!port.enabled());
    }
}
