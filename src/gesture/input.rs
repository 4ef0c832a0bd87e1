use crate::model::{DragSample, InputSource};

/// One capability: yield a coordinate + timestamp sample, or nothing.
pub trait SampleSource {
    fn source(&self) -> InputSource;
    fn sample(&self) -> Option<DragSample>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
    Other,
}

impl PointerKind {
    pub fn from_type(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => PointerKind::Mouse,
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub x: f64,
    pub y: f64,
    pub t: f64,
    pub kind: PointerKind,
}

/// Touch event reduced to its contact list, primary contact first.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchInput {
    pub contacts: Vec<(f64, f64)>,
    pub t: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseInput {
    pub x: f64,
    pub y: f64,
    pub t: f64,
}

impl SampleSource for PointerInput {
    fn source(&self) -> InputSource {
        InputSource::Pointer
    }

    // Only mouse and finger pointers drive panels.
    fn sample(&self) -> Option<DragSample> {
        match self.kind {
            PointerKind::Mouse | PointerKind::Touch => Some(DragSample::new(self.x, self.y, self.t)),
            PointerKind::Pen | PointerKind::Other => None,
        }
    }
}

impl SampleSource for TouchInput {
    fn source(&self) -> InputSource {
        InputSource::Touch
    }

    fn sample(&self) -> Option<DragSample> {
        self.contacts
            .first()
            .map(|&(x, y)| DragSample::new(x, y, self.t))
    }
}

impl SampleSource for MouseInput {
    fn source(&self) -> InputSource {
        InputSource::Mouse
    }

    fn sample(&self) -> Option<DragSample> {
        Some(DragSample::new(self.x, self.y, self.t))
    }
}

/// Raw event as it arrives at the boundary, tagged by family.
#[derive(Clone, Debug, PartialEq)]
pub enum RawInput {
    Pointer(PointerInput),
    Touch(TouchInput),
    Mouse(MouseInput),
}

impl RawInput {
    fn adapter(&self) -> &dyn SampleSource {
        match self {
            RawInput::Pointer(p) => p,
            RawInput::Touch(t) => t,
            RawInput::Mouse(m) => m,
        }
    }

    pub fn source(&self) -> InputSource {
        self.adapter().source()
    }

    pub fn normalize(&self) -> Option<DragSample> {
        self.adapter().sample()
    }
}

/// Pins a running gesture to the family that started it, so a device that
/// fires both pointer and legacy events cannot feed one drag twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputArbiter {
    owner: Option<InputSource>,
}

impl InputArbiter {
    #[cfg(test)]
    pub fn owner(&self) -> Option<InputSource> {
        self.owner
    }

    pub fn is_idle(&self) -> bool {
        self.owner.is_none()
    }

    pub fn claim(&mut self, source: InputSource) {
        self.owner = Some(source);
    }

    /// Moves and releases only count from the owning family (or anyone when idle).
    pub fn admits(&self, source: InputSource) -> bool {
        self.owner.map_or(true, |o| o == source)
    }

    pub fn release(&mut self) {
        self.owner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_uses_primary_contact() {
        let raw = RawInput::Touch(TouchInput {
            contacts: vec![(12.0, 40.0), (200.0, 300.0)],
            t: 5.0,
        });
        assert_eq!(raw.source(), InputSource::Touch);
        assert_eq!(raw.normalize(), Some(DragSample::new(12.0, 40.0, 5.0)));
    }

    #[test]
    fn touch_without_contacts_yields_nothing() {
        let raw = RawInput::Touch(TouchInput {
            contacts: Vec::new(),
            t: 5.0,
        });
        assert_eq!(raw.normalize(), None);
    }

    #[test]
    fn pointer_and_mouse_pass_position_through() {
        let p = RawInput::Pointer(PointerInput {
            x: 3.0,
            y: 4.0,
            t: 9.0,
            kind: PointerKind::from_type("touch"),
        });
        assert_eq!(p.normalize(), Some(DragSample::new(3.0, 4.0, 9.0)));
        let m = RawInput::Mouse(MouseInput {
            x: 7.0,
            y: 8.0,
            t: 1.0,
        });
        assert_eq!(m.source(), InputSource::Mouse);
        assert_eq!(m.normalize(), Some(DragSample::new(7.0, 8.0, 1.0)));
    }

    #[test]
    fn pen_pointers_are_ignored() {
        let p = RawInput::Pointer(PointerInput {
            x: 3.0,
            y: 4.0,
            t: 9.0,
            kind: PointerKind::from_type("pen"),
        });
        assert_eq!(p.normalize(), None);
    }

    #[test]
    fn arbiter_keeps_gesture_on_one_family() {
        let mut arb = InputArbiter::default();
        assert!(arb.admits(InputSource::Mouse));
        arb.claim(InputSource::Pointer);
        assert!(!arb.is_idle());
        assert!(arb.admits(InputSource::Pointer));
        assert!(!arb.admits(InputSource::Mouse));
        assert!(!arb.admits(InputSource::Touch));
        arb.release();
        assert_eq!(arb.owner(), None);
        assert!(arb.admits(InputSource::Touch));
    }
}
