use crate::model::GestureId;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GestureSession {
    panel_open: bool,
    pin_screen_open: bool,
    active_gesture: Option<GestureId>,
}

impl GestureSession {
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn pin_screen_open(&self) -> bool {
        self.pin_screen_open
    }

    pub fn active_gesture(&self) -> Option<GestureId> {
        self.active_gesture
    }

    pub fn is_open(&self, id: GestureId) -> bool {
        match id {
            GestureId::EmergencyPanel => self.panel_open,
            GestureId::PinSheet => self.pin_screen_open,
        }
    }

    /// Would a gesture on `id` be allowed to start right now?
    pub fn may_begin(&self, id: GestureId) -> bool {
        if self.active_gesture.is_some() {
            return false;
        }
        match id {
            GestureId::EmergencyPanel => !self.pin_screen_open,
            // Swipe-down on an open sheet is fine; swipe-up needs the panel shut.
            GestureId::PinSheet => self.pin_screen_open || !self.panel_open,
        }
    }

    /// Check and take the gesture slot in one step.
    pub fn try_begin(&mut self, id: GestureId) -> bool {
        if !self.may_begin(id) {
            return false;
        }
        self.active_gesture = Some(id);
        true
    }

    /// Record the settled state of `id` and free the slot if `id` held it.
    pub fn finish(&mut self, id: GestureId, open: bool) {
        if self.active_gesture == Some(id) {
            self.active_gesture = None;
        }
        self.set_open(id, open);
    }

    pub fn set_open(&mut self, id: GestureId, open: bool) {
        match id {
            GestureId::EmergencyPanel => self.panel_open = open,
            GestureId::PinSheet => self.pin_screen_open = open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_gesture_at_a_time() {
        let mut s = GestureSession::default();
        assert!(s.try_begin(GestureId::EmergencyPanel));
        assert!(!s.try_begin(GestureId::PinSheet));
        assert!(!s.try_begin(GestureId::EmergencyPanel));
        assert_eq!(s.active_gesture(), Some(GestureId::EmergencyPanel));
        s.finish(GestureId::EmergencyPanel, true);
        assert_eq!(s.active_gesture(), None);
        assert!(s.panel_open());
    }

    #[test]
    fn swipe_up_blocked_while_panel_open() {
        let mut s = GestureSession::default();
        s.set_open(GestureId::EmergencyPanel, true);
        assert!(!s.may_begin(GestureId::PinSheet));
        assert!(s.may_begin(GestureId::EmergencyPanel));
    }

    #[test]
    fn panel_blocked_while_sheet_open() {
        let mut s = GestureSession::default();
        s.set_open(GestureId::PinSheet, true);
        assert!(!s.try_begin(GestureId::EmergencyPanel));
        assert!(s.try_begin(GestureId::PinSheet));
    }

    #[test]
    fn finish_by_non_owner_keeps_slot() {
        let mut s = GestureSession::default();
        assert!(s.try_begin(GestureId::PinSheet));
        s.finish(GestureId::EmergencyPanel, false);
        assert_eq!(s.active_gesture(), Some(GestureId::PinSheet));
    }
}
