//! Model bounding boxes and the mapping from slider positions to world coordinates.

use nalgebra::{Point3, Vector3};

use crate::{AnatomicalPlane, Axis};

/// Why a bounding box cannot be used for position mapping.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum BoundsError {
    /// `max - min` is zero or negative along an axis.
    #[error("degenerate bounds on {axis:?}: min {min} is not below max {max}")]
    Degenerate { axis: Axis, min: f32, max: f32 },
    /// A coordinate is NaN or infinite.
    #[error("non-finite bounds on {axis:?}")]
    NonFinite { axis: Axis },
}

/// An axis-aligned bounding box of the displayed model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: Point3<f32>,
    max: Point3<f32>,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::unit()
    }
}

impl BoundingBox {
    /// Creates a bounding box without validating it.
    ///
    /// Use [`BoundingBox::try_new`] or [`BoundingBox::validate`] when the
    /// extents come from an untrusted source such as a freshly loaded model.
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// Creates a bounding box, rejecting degenerate or non-finite extents.
    pub fn try_new(min: Point3<f32>, max: Point3<f32>) -> Result<Self, BoundsError> {
        let bounds = Self { min, max };
        bounds.validate()?;
        Ok(bounds)
    }

    /// The cube `(-1,-1,-1)..(1,1,1)`, used whenever no usable bounds exist.
    pub fn unit() -> Self {
        Self {
            min: Point3::new(-1.0, -1.0, -1.0),
            max: Point3::new(1.0, 1.0, 1.0),
        }
    }

    /// Resolves optional host bounds into a box that is safe to map against.
    ///
    /// Missing bounds silently become the unit cube. Invalid bounds also
    /// become the unit cube, and the condition is logged as a warning.
    pub fn resolve(bounds: Option<BoundingBox>) -> BoundingBox {
        match bounds {
            None => Self::unit(),
            Some(bounds) => match bounds.validate() {
                Ok(()) => bounds,
                Err(err) => {
                    log::warn!("{err}; falling back to unit bounds");
                    Self::unit()
                }
            },
        }
    }

    /// Checks that every axis has finite coordinates and a positive extent.
    pub fn validate(&self) -> Result<(), BoundsError> {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let (min, max) = (self.min_on(axis), self.max_on(axis));
            if !min.is_finite() || !max.is_finite() {
                return Err(BoundsError::NonFinite { axis });
            }
            if !(max - min > 0.0) {
                return Err(BoundsError::Degenerate { axis, min, max });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn min(&self) -> Point3<f32> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point3<f32> {
        self.max
    }

    #[inline]
    pub fn min_on(&self, axis: Axis) -> f32 {
        self.min[axis.index()]
    }

    #[inline]
    pub fn max_on(&self, axis: Axis) -> f32 {
        self.max[axis.index()]
    }

    /// Extent of the box along one axis.
    #[inline]
    pub fn extent_on(&self, axis: Axis) -> f32 {
        self.max_on(axis) - self.min_on(axis)
    }

    /// Size of the box along every axis.
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// Center point of the box.
    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns true if `point` lies inside or on the boundary of the box.
    pub fn contains(&self, point: Point3<f32>) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }
}

/// Maps a normalized slider position in `[-1, 1]` onto the plane's world axis.
///
/// `-1` lands exactly on `bounds.min`, `1` exactly on `bounds.max` and `0` on
/// the midpoint. When `bounds` is `None` the unit cube is used.
pub fn map_position(plane: AnatomicalPlane, position: f32, bounds: Option<&BoundingBox>) -> f32 {
    let unit = BoundingBox::unit();
    let bounds = bounds.unwrap_or(&unit);
    let axis = plane.axis();
    let t = (position + 1.0) / 2.0;
    // Weighted form keeps both endpoints exact in floating point.
    bounds.min_on(axis) * (1.0 - t) + bounds.max_on(axis) * t
}
