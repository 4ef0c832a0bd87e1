// Ordered calling: contact `n` can only be called after calls `0..n` finished.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallSequencer {
    contacts: usize,
    completed: usize,
    active: Option<usize>,
}

impl CallSequencer {
    pub fn new(contacts: usize) -> Self {
        Self {
            contacts,
            completed: 0,
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    #[cfg(test)]
    pub fn is_finished(&self, index: usize) -> bool {
        index < self.completed
    }

    /// Next contact that may be called, if any.
    pub fn next(&self) -> Option<usize> {
        (self.active.is_none() && self.completed < self.contacts).then_some(self.completed)
    }

    /// Out-of-order, repeated or overlapping attempts return `false` and change nothing.
    pub fn start(&mut self, index: usize) -> bool {
        if self.next() != Some(index) {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// The active call's media finished. Returns the finished index; `None` when
    /// nothing was active, so duplicate end signals are harmless.
    pub fn finish(&mut self) -> Option<usize> {
        let index = self.active.take()?;
        self.completed += 1;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_go_in_order() {
        let mut seq = CallSequencer::new(3);
        assert!(!seq.start(1));
        assert!(seq.start(0));
        assert_eq!(seq.finish(), Some(0));
        assert!(seq.start(1));
        assert_eq!(seq.finish(), Some(1));
        assert!(!seq.start(0));
        assert!(seq.is_finished(1));
        assert!(!seq.is_finished(2));
    }

    #[test]
    fn no_second_call_while_active() {
        let mut seq = CallSequencer::new(3);
        assert!(seq.start(0));
        assert!(!seq.start(0));
        assert!(!seq.start(1));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn duplicate_end_signal_is_ignored() {
        let mut seq = CallSequencer::new(3);
        assert!(seq.start(0));
        assert_eq!(seq.finish(), Some(0));
        assert_eq!(seq.finish(), None);
        assert_eq!(seq.completed(), 1);
    }

    #[test]
    fn nothing_past_the_last_contact() {
        let mut seq = CallSequencer::new(1);
        assert!(seq.start(0));
        seq.finish();
        assert_eq!(seq.next(), None);
        assert!(!seq.start(1));
    }
}
