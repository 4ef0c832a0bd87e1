use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, MouseEvent, PointerEvent, TouchEvent};
use yew::NodeRef;

use crate::gesture::input::{MouseInput, PointerInput, PointerKind, TouchInput};
use crate::gesture::{GeometryProvider, PanelPresenter, RawInput};
use crate::model::{Axis, Rect};

pub const PANEL_TRANSITION: &str = "transform 0.3s cubic-bezier(0.4, 0, 0.2, 1)";
pub const SHEET_TRANSITION: &str = "transform 0.4s cubic-bezier(0.4, 0, 0.2, 1)";

/// Presenter backed by a mounted element: inline `transform`/`transition`
/// styles plus an `active` class.
pub struct DomPanel {
    node: NodeRef,
    axis: Axis,
    transition: &'static str,
}

impl DomPanel {
    pub fn new(node: NodeRef, axis: Axis, transition: &'static str) -> Self {
        Self {
            node,
            axis,
            transition,
        }
    }

    fn element(&self) -> Option<HtmlElement> {
        self.node.cast::<HtmlElement>()
    }
}

impl PanelPresenter for DomPanel {
    fn set_offset(&mut self, axis: Axis, pixels: f64) {
        let Some(el) = self.element() else { return };
        let transform = match axis {
            Axis::Horizontal => format!("translateX({}px)", pixels),
            Axis::Vertical => format!("translateY({}px)", pixels),
        };
        let _ = el.style().set_property("transform", &transform);
    }

    fn set_transition_enabled(&mut self, enabled: bool) {
        let Some(el) = self.element() else { return };
        let value = if enabled { self.transition } else { "none" };
        let _ = el.style().set_property("transition", value);
    }

    fn set_active(&mut self, active: bool) {
        let Some(el) = self.element() else { return };
        let classes = el.class_list();
        let _ = if active {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
    }
}

impl GeometryProvider for DomPanel {
    fn extent(&self) -> f64 {
        self.element().map_or(0.0, |el| match self.axis {
            Axis::Horizontal => el.offset_width() as f64,
            Axis::Vertical => el.offset_height() as f64,
        })
    }
}

pub fn rect_of(node: &NodeRef) -> Rect {
    node.cast::<Element>()
        .map(|el| {
            let r = el.get_bounding_client_rect();
            Rect::new(r.left(), r.top(), r.width(), r.height())
        })
        .unwrap_or_default()
}

pub fn pointer_input(e: &PointerEvent) -> RawInput {
    RawInput::Pointer(PointerInput {
        x: e.client_x() as f64,
        y: e.client_y() as f64,
        t: e.time_stamp(),
        kind: PointerKind::from_type(&e.pointer_type()),
    })
}

pub fn touch_input(e: &TouchEvent) -> RawInput {
    let touches = e.touches();
    let contacts = (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| (t.client_x() as f64, t.client_y() as f64))
        .collect();
    RawInput::Touch(TouchInput {
        contacts,
        t: e.time_stamp(),
    })
}

pub fn mouse_input(e: &MouseEvent) -> RawInput {
    RawInput::Mouse(MouseInput {
        x: e.client_x() as f64,
        y: e.client_y() as f64,
        t: e.time_stamp(),
    })
}

/// Did the event land on (or inside) a button?
pub fn on_control(e: &Event) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("button").ok().flatten())
        .is_some()
}

pub fn supports_pointer_events() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("PointerEvent")).unwrap_or(false))
        .unwrap_or(false)
}

pub fn is_touch_device() -> bool {
    web_sys::window()
        .map(|w| {
            js_sys::Reflect::has(&w, &JsValue::from_str("ontouchstart")).unwrap_or(false)
                || w.navigator().max_touch_points() > 0
        })
        .unwrap_or(false)
}
