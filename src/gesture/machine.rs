//! Per-panel gesture state machine: Idle -> Dragging -> (Committed | Cancelled) -> Idle.
//!
//! Offsets are measured from the panel's open position: `0` is fully revealed,
//! `extent` is fully hidden. Both panels open by dragging toward decreasing
//! coordinates (left for the emergency panel, up for the PIN sheet) and close by
//! dragging the other way.

use log::debug;

use super::presenter::{GeometryProvider, PanelPresenter};
use crate::model::{Activation, Axis, Direction, DragSample, GestureId, PanelGeometry};
use crate::state::GestureSession;

/// Fixed parameters of one sliding panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelSpec {
    pub id: GestureId,
    pub axis: Axis,
    /// Fraction of the extent a drag must exceed to commit.
    pub distance_ratio: f64,
    /// Pixels per millisecond a release must exceed to commit.
    pub velocity_threshold: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTrack {
    pub origin: DragSample,
    pub last: DragSample,
    pub axis: Axis,
    pub direction: Direction,
    pub committed: bool,
}

impl GestureTrack {
    fn new(origin: DragSample, axis: Axis, direction: Direction) -> Self {
        Self {
            origin,
            last: origin,
            axis,
            direction,
            committed: false,
        }
    }

    pub fn delta(&self) -> f64 {
        self.last.along(self.axis) - self.origin.along(self.axis)
    }

    pub fn elapsed(&self) -> f64 {
        self.last.t - self.origin.t
    }

    /// Travel toward the gesture's intent; negative when moving against it.
    pub fn progress(&self) -> f64 {
        match self.direction {
            Direction::Open => -self.delta(),
            Direction::Close => self.delta(),
        }
    }

    /// Pixels per millisecond toward the intent, zero when there is no
    /// progress. A release with no measurable duration counts as infinitely fast.
    pub fn velocity(&self) -> f64 {
        let progress = self.progress();
        if progress <= 0.0 {
            return 0.0;
        }
        let elapsed = self.elapsed();
        if elapsed <= 0.0 {
            f64::INFINITY
        } else {
            progress / elapsed
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Dragging(GestureTrack),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseOutcome {
    pub id: GestureId,
    pub direction: Direction,
    pub committed: bool,
    pub distance: f64,
    pub velocity: f64,
}

impl ReleaseOutcome {
    /// State the panel settled in.
    pub fn open(&self) -> bool {
        match self.direction {
            Direction::Open => self.committed,
            Direction::Close => !self.committed,
        }
    }
}

pub struct GestureController<P> {
    spec: PanelSpec,
    geometry: PanelGeometry,
    presenter: P,
    phase: Phase,
}

impl<P: PanelPresenter> GestureController<P> {
    pub fn new(spec: PanelSpec, presenter: P) -> Self {
        Self {
            spec,
            geometry: PanelGeometry::default(),
            presenter,
            phase: Phase::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    #[cfg(test)]
    pub fn spec(&self) -> &PanelSpec {
        &self.spec
    }

    #[cfg(test)]
    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    #[cfg(test)]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[cfg(test)]
    pub fn set_geometry(&mut self, geometry: PanelGeometry) {
        self.geometry = geometry;
    }

    /// New extent after layout or resize; an idle panel is re-parked at its rest offset.
    pub fn resize(&mut self, geometry: PanelGeometry, session: &GestureSession) {
        self.geometry = geometry;
        if !self.is_dragging() {
            let offset = self.rest_offset(session.is_open(self.spec.id));
            self.presenter.set_offset(self.spec.axis, offset);
        }
    }

    fn rest_offset(&self, open: bool) -> f64 {
        if open { 0.0 } else { self.geometry.extent }
    }

    /// Idle -> Dragging. Returns `false` (and changes nothing) when the sample is
    /// outside the activation region or the session refuses the gesture.
    pub fn begin(
        &mut self,
        session: &mut GestureSession,
        sample: DragSample,
        activation: &Activation,
    ) -> bool {
        if self.is_dragging() {
            return false;
        }
        let open = session.is_open(self.spec.id);
        let region = if open {
            activation.when_open
        } else {
            activation.when_closed
        };
        if !region.contains(sample.x, sample.y) {
            return false;
        }
        if !session.try_begin(self.spec.id) {
            return false;
        }
        let direction = if open {
            Direction::Close
        } else {
            Direction::Open
        };
        self.phase = Phase::Dragging(GestureTrack::new(sample, self.spec.axis, direction));
        self.presenter.set_transition_enabled(false);
        debug!(
            "gesture start {:?} {:?} at ({:.0}, {:.0})",
            self.spec.id, direction, sample.x, sample.y
        );
        true
    }

    /// Dragging -> Dragging. Returns the offset pushed to the presenter.
    pub fn drag(&mut self, sample: DragSample) -> Option<f64> {
        let extent = self.geometry.extent;
        let Phase::Dragging(track) = &mut self.phase else {
            return None;
        };
        track.last = sample;
        let delta = track.delta();
        // Movement against the gesture's intent pins the panel at its starting offset.
        let offset = match track.direction {
            Direction::Open if delta < 0.0 => (extent + delta).max(0.0),
            Direction::Open => extent,
            Direction::Close if delta > 0.0 => delta.min(extent),
            Direction::Close => 0.0,
        };
        self.presenter.set_offset(self.spec.axis, offset);
        Some(offset)
    }

    /// Dragging -> Committed | Cancelled -> Idle. A release while idle is a no-op.
    pub fn release(
        &mut self,
        session: &mut GestureSession,
        sample: Option<DragSample>,
    ) -> Option<ReleaseOutcome> {
        let Phase::Dragging(mut track) = std::mem::replace(&mut self.phase, Phase::Idle) else {
            return None;
        };
        if let Some(s) = sample {
            track.last = s;
        }
        let distance = track.progress();
        let velocity = track.velocity();
        track.committed = distance > self.spec.distance_ratio * self.geometry.extent
            || velocity > self.spec.velocity_threshold;
        let outcome = ReleaseOutcome {
            id: self.spec.id,
            direction: track.direction,
            committed: track.committed,
            distance,
            velocity,
        };
        debug!(
            "gesture {} {:?} {:?}: distance {:.1}px, velocity {:.3}px/ms",
            if outcome.committed { "commit" } else { "cancel" },
            outcome.id,
            outcome.direction,
            outcome.distance,
            outcome.velocity
        );
        self.settle(outcome.open());
        session.finish(self.spec.id, outcome.open());
        Some(outcome)
    }

    /// Put the panel in `open` state directly, bypassing any drag. Abandons a
    /// drag in progress.
    pub fn snap(&mut self, session: &mut GestureSession, open: bool) {
        self.phase = Phase::Idle;
        self.settle(open);
        session.finish(self.spec.id, open);
    }

    fn settle(&mut self, open: bool) {
        self.presenter.set_transition_enabled(true);
        let offset = self.rest_offset(open);
        self.presenter.set_offset(self.spec.axis, offset);
        self.presenter.set_active(open);
    }
}

impl<P: PanelPresenter + GeometryProvider> GestureController<P> {
    /// Re-read the extent from the presenter itself.
    pub fn relayout(&mut self, session: &GestureSession) {
        let geometry = self.presenter.geometry();
        self.resize(geometry, session);
    }
}
