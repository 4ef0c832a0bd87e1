use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Task {
    VerifyPin,
    ShowPinError,
    ClearPinError,
    RevealUnlocked,
    IntroFade,
    ScenePlay,
    SceneFallback,
    PressFeedback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskToken {
    pub task: Task,
    pub epoch: u64,
}

/// A task to run after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deferred {
    pub token: TaskToken,
    pub delay_ms: u32,
}

/// Issuing a newer token for a task, or cancelling it, makes older tokens stale.
#[derive(Clone, Debug, Default)]
pub struct TaskClock {
    next_epoch: u64,
    current: HashMap<Task, u64>,
}

impl TaskClock {
    pub fn schedule(&mut self, task: Task, delay_ms: u32) -> Deferred {
        self.next_epoch += 1;
        self.current.insert(task, self.next_epoch);
        Deferred {
            token: TaskToken {
                task,
                epoch: self.next_epoch,
            },
            delay_ms,
        }
    }

    pub fn cancel(&mut self, task: Task) {
        self.current.remove(&task);
    }

    pub fn is_pending(&self, task: Task) -> bool {
        self.current.contains_key(&task)
    }

    /// Consume `token` if it is still the live one for its task.
    pub fn take(&mut self, token: TaskToken) -> bool {
        if self.current.get(&token.task) == Some(&token.epoch) {
            self.current.remove(&token.task);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_schedule_makes_old_token_stale() {
        let mut clock = TaskClock::default();
        let first = clock.schedule(Task::ClearPinError, 1500);
        let second = clock.schedule(Task::ClearPinError, 1500);
        assert!(!clock.take(first.token));
        assert!(clock.take(second.token));
        assert!(!clock.take(second.token));
    }

    #[test]
    fn cancel_invalidates() {
        let mut clock = TaskClock::default();
        let d = clock.schedule(Task::SceneFallback, 3000);
        assert!(clock.is_pending(Task::SceneFallback));
        clock.cancel(Task::SceneFallback);
        assert!(!clock.is_pending(Task::SceneFallback));
        assert!(!clock.take(d.token));
    }

    #[test]
    fn tasks_are_independent() {
        let mut clock = TaskClock::default();
        let a = clock.schedule(Task::ShowPinError, 300);
        let b = clock.schedule(Task::ClearPinError, 1500);
        clock.cancel(Task::ShowPinError);
        assert!(!clock.take(a.token));
        assert!(clock.take(b.token));
    }
}
