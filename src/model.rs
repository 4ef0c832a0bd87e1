use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureId {
    /// Emergency contacts panel, slides in from the right.
    EmergencyPanel,
    /// PIN entry sheet, slides up from the bottom.
    PinSheet,
}

/// What a gesture is trying to do to its panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Open,
    Close,
}

/// Event family a sample came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputSource {
    Pointer,
    Touch,
    Mouse,
}

/// One normalized input sample in client pixels, `t` in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    pub x: f64,
    pub y: f64,
    pub t: f64,
}

impl DragSample {
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self { x, y, t }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Travel distance of a sliding panel along its axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelGeometry {
    pub extent: f64,
}

/// Axis-aligned client rectangle (mirrors `DOMRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Inclusive on every edge, like the bounds check on the trigger button.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }
}

/// Where a gesture may begin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Region {
    Nowhere,
    Within(Rect),
    /// The lower `fraction` of the rectangle.
    BottomBand { rect: Rect, fraction: f64 },
    /// The upper `fraction` of the rectangle.
    TopBand { rect: Rect, fraction: f64 },
}

impl Region {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match *self {
            Region::Nowhere => false,
            Region::Within(r) => r.contains(x, y),
            Region::BottomBand { rect, fraction } => {
                rect.contains(x, y) && y >= rect.top + rect.height * (1.0 - fraction)
            }
            Region::TopBand { rect, fraction } => {
                rect.contains(x, y) && y <= rect.top + rect.height * fraction
            }
        }
    }
}

/// Activation regions for one controller, picked by the panel's current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Activation {
    pub when_closed: Region,
    pub when_open: Region,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub number: String,
    pub icon: String,
    /// Scene video played while this contact is being called.
    pub video: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_bounds_are_inclusive() {
        let r = Rect::new(10.0, 20.0, 50.0, 40.0);
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(60.0, 60.0));
        assert!(!r.contains(60.5, 30.0));
        assert!(!r.contains(30.0, 19.0));
    }

    #[test]
    fn bands_split_the_rect_by_fraction() {
        let screen = Rect::new(0.0, 100.0, 300.0, 500.0);
        let bottom = Region::BottomBand {
            rect: screen,
            fraction: 0.4,
        };
        assert!(bottom.contains(5.0, 401.0));
        assert!(!bottom.contains(5.0, 399.0));
        let top = Region::TopBand {
            rect: screen,
            fraction: 0.3,
        };
        assert!(top.contains(5.0, 249.0));
        assert!(!top.contains(5.0, 252.0));
        assert!(!Region::Nowhere.contains(0.0, 0.0));
    }
}
