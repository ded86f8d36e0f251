//! The render-side clipping sink.
//!
//! The host owns the GPU clipping state. Each viewer receives its own port, so
//! several viewers can clip independently.

use crate::{CompiledClipping, CompiledPlane};

/// Host-owned receiver of compiled clip planes.
///
/// `set_clipping_planes` always receives a complete replacement list, never
/// a delta.
pub trait RenderClippingPort {
    /// Replaces the whole list of active clip planes.
    fn set_clipping_planes(&mut self, planes: Vec<CompiledPlane>);

    /// Turns GPU clipping on or off.
    fn set_clipping_enabled(&mut self, enabled: bool);

    /// Publishes a compiled output: the plane list first, then the flag.
    fn publish(&mut self, compiled: &CompiledClipping) {
        self.set_clipping_planes(compiled.planes().to_vec());
        self.set_clipping_enabled(compiled.any_enabled());
    }

    /// Removes all clipping, restoring the full model.
    fn clear(&mut self) {
        self.set_clipping_planes(Vec::new());
        self.set_clipping_enabled(false);
    }
}

impl<P: RenderClippingPort + ?Sized> RenderClippingPort for &mut P {
    fn set_clipping_planes(&mut self, planes: Vec<CompiledPlane>) {
        (**self).set_clipping_planes(planes);
    }

    fn set_clipping_enabled(&mut self, enabled: bool) {
        (**self).set_clipping_enabled(enabled);
    }
}

impl<P: RenderClippingPort + ?Sized> RenderClippingPort for Box<P> {
    fn set_clipping_planes(&mut self, planes: Vec<CompiledPlane>) {
        (**self).set_clipping_planes(planes);
    }

    fn set_clipping_enabled(&mut self, enabled: bool) {
        (**self).set_clipping_enabled(enabled);
    }
}

/// One call received by a [`RecordingPort`].
#[derive(Debug, Clone, PartialEq)]
pub enum PortCall {
    Planes(Vec<CompiledPlane>),
    Enabled(bool),
}

/// A port that records every call and mirrors the resulting sink state.
#[derive(Debug, Clone, Default)]
pub struct RecordingPort {
    calls: Vec<PortCall>,
    planes: Vec<CompiledPlane>,
    enabled: bool,
}

impl RecordingPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call in the order received.
    pub fn calls(&self) -> &[PortCall] {
        &self.calls
    }

    /// The current plane list.
    pub fn planes(&self) -> &[CompiledPlane] {
        &self.planes
    }

    /// The current clipping flag.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Number of complete publishes (plane list plus flag).
    pub fn publish_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, PortCall::Enabled(_)))
            .count()
    }

    /// The final `(planes, enabled)` pair, if anything was published.
    pub fn last_publish(&self) -> Option<(&[CompiledPlane], bool)> {
        match self.calls.as_slice() {
            [.., PortCall::Planes(planes), PortCall::Enabled(enabled)] => {
                Some((planes.as_slice(), *enabled))
            }
            _ => None,
        }
    }
}

impl RenderClippingPort for RecordingPort {
    fn set_clipping_planes(&mut self, planes: Vec<CompiledPlane>) {
        self.planes = planes.clone();
        self.calls.push(PortCall::Planes(planes));
    }

    fn set_clipping_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.calls.push(PortCall::Enabled(enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compile, preset};

    #[test]
    fn publish_sends_planes_then_flag() {
        let mut port = RecordingPort::new();
        let compiled = compile(&preset::MIDSAGITTAL.materialize(), None);
        port.publish(&compiled);

        assert_eq!(
            port.calls(),
            &[
                PortCall::Planes(compiled.planes().to_vec()),
                PortCall::Enabled(true)
            ]
        );
        assert_eq!(port.planes(), compiled.planes());
        assert!(port.enabled());
    }

    #[test]
    fn clear_empties_and_disables() {
        let mut port = RecordingPort::new();
        port.publish(&compile(&preset::QUARTER.materialize(), None));
        port.clear();

        assert_eq!(port.last_publish(), Some((&[][..], false)));
        assert!(port.planes().is_empty());
        assert_eq!(port.publish_count(), 2);
    }

    fn publish_frontal<P: RenderClippingPort>(mut port: P) {
        port.publish(&compile(&preset::FRONTAL.materialize(), None));
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut port = RecordingPort::new();
        publish_frontal(&mut port);
        assert_eq!(port.planes().len(), 1);
        assert!(port.enabled());
    }

    #[test]
    fn boxed_port_forwards() {
        let mut port = RecordingPort::new();
        let boxed: Box<dyn RenderClippingPort + '_> = Box::new(&mut port);
        publish_frontal(boxed);
        assert_eq!(port.publish_count(), 1);
    }

    #[test]
    fn last_publish_requires_complete_pair() {
        let mut port = RecordingPort::new();
        assert!(port.last_publish().is_none());
        port.set_clipping_planes(Vec::new());
        assert!(port.last_publish().is_none());
    }
}
