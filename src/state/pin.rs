// PIN keypad bookkeeping: a bounded digit buffer compared to a fixed secret.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinPhase {
    Entry,
    /// Buffer full, waiting for the verification delay.
    Verifying,
    /// Wrong PIN shown; no input until cleared.
    Error { message_visible: bool },
    /// Terminal.
    Unlocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Accepted,
    /// The buffer just reached full length.
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinPad {
    secret: String,
    length: usize,
    buffer: String,
    phase: PinPhase,
}

impl PinPad {
    pub fn new(secret: impl Into<String>, length: usize) -> Self {
        Self {
            secret: secret.into(),
            length,
            buffer: String::with_capacity(length),
            phase: PinPhase::Entry,
        }
    }

    pub fn phase(&self) -> PinPhase {
        self.phase
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn filled(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_unlocked(&self) -> bool {
        self.phase == PinPhase::Unlocked
    }

    pub fn in_error(&self) -> bool {
        matches!(self.phase, PinPhase::Error { .. })
    }

    pub fn press(&mut self, digit: char) -> KeyOutcome {
        if self.phase != PinPhase::Entry || !digit.is_ascii_digit() {
            return KeyOutcome::Ignored;
        }
        if self.buffer.len() >= self.length {
            return KeyOutcome::Ignored;
        }
        self.buffer.push(digit);
        if self.buffer.len() == self.length {
            self.phase = PinPhase::Verifying;
            KeyOutcome::Complete
        } else {
            KeyOutcome::Accepted
        }
    }

    pub fn delete(&mut self) -> bool {
        if self.phase != PinPhase::Entry {
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Compare the full buffer with the secret. `None` unless a check is due.
    pub fn verify(&mut self) -> Option<Verdict> {
        if self.phase != PinPhase::Verifying {
            return None;
        }
        if self.buffer == self.secret {
            self.phase = PinPhase::Unlocked;
            self.buffer.clear();
            Some(Verdict::Accepted)
        } else {
            self.phase = PinPhase::Error {
                message_visible: false,
            };
            Some(Verdict::Rejected)
        }
    }

    pub fn show_error_message(&mut self) {
        if let PinPhase::Error { .. } = self.phase {
            self.phase = PinPhase::Error {
                message_visible: true,
            };
        }
    }

    /// End of the error display: empty buffer, keypad live again.
    pub fn clear_error(&mut self) {
        if self.in_error() {
            self.buffer.clear();
            self.phase = PinPhase::Entry;
        }
    }

    /// Sheet closed: drop partial input and any error. Unlocking sticks.
    pub fn reset(&mut self) {
        if self.is_unlocked() {
            return;
        }
        self.buffer.clear();
        self.phase = PinPhase::Entry;
    }
}
