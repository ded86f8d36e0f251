//! Built-in viewing presets.
//!
//! A preset names a partial target: it lists only the planes it cares about.
//! Every plane a preset omits is disabled, centered and not inverted when the
//! preset is applied. Omission never means "leave unchanged".

use crate::{AnatomicalPlane, ClippingState, ClippingStates};

/// A named partial target configuration of the three planes.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    targets: &'static [(AnatomicalPlane, ClippingState)],
}

impl Preset {
    /// Creates a preset. A plane listed twice takes its last entry.
    pub const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        targets: &'static [(AnatomicalPlane, ClippingState)],
    ) -> Self {
        Self {
            id,
            name,
            description,
            targets,
        }
    }

    /// The planes this preset specifies explicitly.
    pub fn targets(&self) -> &'static [(AnatomicalPlane, ClippingState)] {
        self.targets
    }

    /// Overlays the partial target onto the disabled baseline.
    pub fn materialize(&self) -> ClippingStates {
        let mut states = ClippingStates::BASELINE;
        for &(plane, state) in self.targets {
            states[plane] = state;
        }
        states
    }
}

pub const NONE: Preset = Preset::new("none", "None", "Show the complete model", &[]);

pub const MIDSAGITTAL: Preset = Preset::new(
    "midsagittal",
    "Midsagittal",
    "Split down the midline into left and right halves",
    &[(AnatomicalPlane::Sagittal, ClippingState::new(true, 0.0, false))],
);

pub const FRONTAL: Preset = Preset::new(
    "frontal",
    "Frontal",
    "Remove the front half to look into the body",
    &[(AnatomicalPlane::Coronal, ClippingState::new(true, 0.0, true))],
);

pub const TRANSVERSE: Preset = Preset::new(
    "transverse",
    "Transverse",
    "Horizontal cut just above the middle",
    &[(AnatomicalPlane::Axial, ClippingState::new(true, 0.2, true))],
);

pub const QUARTER: Preset = Preset::new(
    "quarter",
    "Quarter",
    "Remove one front quarter",
    &[
        (AnatomicalPlane::Sagittal, ClippingState::new(true, 0.0, false)),
        (AnatomicalPlane::Coronal, ClippingState::new(true, 0.0, true)),
    ],
);

/// Every built-in preset, in display order.
pub static ALL: [Preset; 5] = [NONE, MIDSAGITTAL, FRONTAL, TRANSVERSE, QUARTER];

/// Looks up a built-in preset by id.
pub fn find(id: &str) -> Option<&'static Preset> {
    ALL.iter().find(|preset| preset.id == id)
}
