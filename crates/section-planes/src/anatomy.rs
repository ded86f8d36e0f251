//! Anatomical planes and their static per-axis configuration.

use std::fmt;

use nalgebra::Vector3;

/// A world axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index of this axis in a 3-vector.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two axes orthogonal to this one, in increasing index order.
    #[inline]
    pub const fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Unit vector pointing along the positive direction of this axis.
    #[inline]
    pub fn unit(self) -> Vector3<f32> {
        Vector3::ith(self.index(), 1.0)
    }
}

/// One of the three orthogonal sectioning planes of the body.
///
/// The set is closed: every per-plane collection in this crate holds exactly
/// one entry for each variant, in the order given by [`AnatomicalPlane::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnatomicalPlane {
    /// Divides left from right.
    Sagittal,
    /// Divides front from back.
    Coronal,
    /// Divides top from bottom.
    Axial,
}

impl AnatomicalPlane {
    /// All planes, in compilation order.
    pub const ALL: [AnatomicalPlane; 3] = [
        AnatomicalPlane::Sagittal,
        AnatomicalPlane::Coronal,
        AnatomicalPlane::Axial,
    ];

    /// Position of this plane in [`AnatomicalPlane::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            AnatomicalPlane::Sagittal => 0,
            AnatomicalPlane::Coronal => 1,
            AnatomicalPlane::Axial => 2,
        }
    }

    /// Returns the static configuration of this plane.
    #[inline]
    pub fn config(self) -> &'static PlaneConfig {
        PlaneConfig::of(self)
    }

    /// The world axis this plane clips along.
    #[inline]
    pub fn axis(self) -> Axis {
        self.config().axis
    }

    /// Lowercase identifier, e.g. `"sagittal"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            AnatomicalPlane::Sagittal => "sagittal",
            AnatomicalPlane::Coronal => "coronal",
            AnatomicalPlane::Axial => "axial",
        }
    }
}

impl fmt::Display for AnatomicalPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable per-plane configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneConfig {
    /// The world axis the plane is perpendicular to.
    pub axis: Axis,
    /// Human-readable name for control panels.
    pub label: &'static str,
    /// Short description of what the plane separates.
    pub description: &'static str,
    /// Display color (sRGB).
    pub color: [u8; 3],
}

static REGISTRY: [PlaneConfig; 3] = [
    PlaneConfig {
        axis: Axis::X,
        label: "Sagittal",
        description: "Left / Right",
        color: [0xef, 0x44, 0x44],
    },
    PlaneConfig {
        axis: Axis::Z,
        label: "Coronal",
        description: "Front / Back",
        color: [0x22, 0xc5, 0x5e],
    },
    PlaneConfig {
        axis: Axis::Y,
        label: "Axial",
        description: "Top / Bottom",
        color: [0x3b, 0x82, 0xf6],
    },
];

impl PlaneConfig {
    /// Looks up the configuration of a plane.
    #[inline]
    pub fn of(plane: AnatomicalPlane) -> &'static PlaneConfig {
        &REGISTRY[plane.index()]
    }

    /// The default (non-inverted) unit normal of the plane.
    #[inline]
    pub fn base_normal(&self) -> Vector3<f32> {
        self.axis.unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_axes() {
        assert_eq!(AnatomicalPlane::Sagittal.axis(), Axis::X);
        assert_eq!(AnatomicalPlane::Coronal.axis(), Axis::Z);
        assert_eq!(AnatomicalPlane::Axial.axis(), Axis::Y);
    }

    #[test]
    fn base_normals_are_unit_axis_vectors() {
        for plane in AnatomicalPlane::ALL {
            let normal = plane.config().base_normal();
            assert_eq!(normal.norm(), 1.0);
            assert_eq!(normal[plane.axis().index()], 1.0);
        }
    }

    #[test]
    fn index_matches_all_order() {
        for (i, plane) in AnatomicalPlane::ALL.iter().enumerate() {
            assert_eq!(plane.index(), i);
        }
    }

    #[test]
    fn other_axes_exclude_self() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let (a, b) = axis.others();
            assert_ne!(a, axis);
            assert_ne!(b, axis);
            assert!(a.index() < b.index());
        }
    }

    #[test]
    fn display_uses_lowercase_tag() {
        assert_eq!(AnatomicalPlane::Coronal.to_string(), "coronal");
    }
}
