use crate::model::{Axis, PanelGeometry};

/// Receives commands only; owns no decision logic.
pub trait PanelPresenter {
    /// Translation from the panel's open position, in pixels.
    fn set_offset(&mut self, axis: Axis, pixels: f64);
    fn set_transition_enabled(&mut self, enabled: bool);
    fn set_active(&mut self, active: bool);
}

/// Reports the travel distance of a panel; re-read on layout and resize.
pub trait GeometryProvider {
    fn extent(&self) -> f64;

    fn geometry(&self) -> PanelGeometry {
        PanelGeometry {
            extent: self.extent(),
        }
    }
}

/// Presenter that remembers what it was told. Used by tests.
#[cfg(test)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingPresenter {
    pub extent: f64,
    pub offset: Option<f64>,
    pub transition: Option<bool>,
    pub active: Option<bool>,
    pub commands: usize,
}

#[cfg(test)]
impl PanelPresenter for RecordingPresenter {
    fn set_offset(&mut self, _axis: Axis, pixels: f64) {
        self.offset = Some(pixels);
        self.commands += 1;
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        self.transition = Some(enabled);
        self.commands += 1;
    }

    fn set_active(&mut self, active: bool) {
        self.active = Some(active);
        self.commands += 1;
    }
}

#[cfg(test)]
impl GeometryProvider for RecordingPresenter {
    fn extent(&self) -> f64 {
        self.extent
    }
}
