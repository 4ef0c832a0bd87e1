use log::{info, warn};

use super::calls::CallSequencer;
use super::intro::IntroFlow;
use super::pin::{KeyOutcome, PinPad, PinPhase, Verdict};
use super::schedule::{Deferred, Task, TaskClock, TaskToken};
use super::session::GestureSession;
use crate::config::Config;
use crate::gesture::{
    GeometryProvider, GestureController, InputArbiter, PanelPresenter, PanelSpec, RawInput,
};
use crate::media::PlaybackError;
use crate::model::{Activation, Axis, Contact, GestureId, Rect, Region};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaCommand {
    PlayIntro,
    /// Jump to just before the end so the natural `ended` signal fires.
    SkipIntro,
    /// Pause and rewind.
    StopIntro,
    LoadScene { src: String },
    PlayScene,
    StopScene,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Schedule(Deferred),
    Cancel(Task),
    Media(MediaCommand),
}

pub type Effects = Vec<Effect>;

/// Client rectangles of the hit targets at the moment of a press.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitRegions {
    pub trigger: Rect,
    pub panel: Rect,
    pub lock_screen: Rect,
    pub pin_sheet: Rect,
    /// The press landed on a button (keypad, cancel, contact).
    pub on_control: bool,
}

/// Everything the views render, copied out of the coordinator.
#[derive(Clone, Debug, PartialEq)]
pub struct LockView {
    pub start_screen: bool,
    pub intro_overlay: bool,
    pub intro_fading: bool,
    pub panel_open: bool,
    pub pin_screen_open: bool,
    pub calling: Option<Contact>,
    pub completed_calls: usize,
    pub pressed_contact: Option<usize>,
    pub pin_filled: usize,
    pub pin_length: usize,
    pub pin_error: bool,
    pub pin_error_message: bool,
    pub unlocked: bool,
}

/// Every operation returns the effects the runtime must carry out.
pub struct LockScreen<P> {
    config: Config,
    session: GestureSession,
    arbiter: InputArbiter,
    panel: GestureController<P>,
    sheet: GestureController<P>,
    calls: CallSequencer,
    pin: PinPad,
    intro: IntroFlow,
    clock: TaskClock,
    unlocked_revealed: bool,
    pressed_contact: Option<usize>,
}

const PIN_TASKS: [Task; 3] = [Task::VerifyPin, Task::ShowPinError, Task::ClearPinError];

impl<P: PanelPresenter> LockScreen<P> {
    pub fn new(config: Config, panel_presenter: P, sheet_presenter: P) -> Self {
        let panel = GestureController::new(
            PanelSpec {
                id: GestureId::EmergencyPanel,
                axis: Axis::Horizontal,
                distance_ratio: config.commit_distance_ratio,
                velocity_threshold: config.panel_velocity_threshold,
            },
            panel_presenter,
        );
        let sheet = GestureController::new(
            PanelSpec {
                id: GestureId::PinSheet,
                axis: Axis::Vertical,
                distance_ratio: config.commit_distance_ratio,
                velocity_threshold: config.sheet_velocity_threshold,
            },
            sheet_presenter,
        );
        Self {
            calls: CallSequencer::new(config.contacts.len()),
            pin: PinPad::new(config.pin_secret.clone(), config.pin_length),
            config,
            session: GestureSession::default(),
            arbiter: InputArbiter::default(),
            panel,
            sheet,
            intro: IntroFlow::default(),
            clock: TaskClock::default(),
            unlocked_revealed: false,
            pressed_contact: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    #[cfg(test)]
    pub fn panel(&self) -> &GestureController<P> {
        &self.panel
    }

    #[cfg(test)]
    pub fn sheet(&self) -> &GestureController<P> {
        &self.sheet
    }

    pub fn view(&self) -> LockView {
        let (pin_error, pin_error_message) = match self.pin.phase() {
            PinPhase::Error { message_visible } => (true, message_visible),
            _ => (false, false),
        };
        LockView {
            start_screen: self.intro.start_screen_visible(),
            intro_overlay: self.intro.overlay_visible(),
            intro_fading: self.intro.is_fading(),
            panel_open: self.session.panel_open(),
            pin_screen_open: self.session.pin_screen_open(),
            calling: self
                .calls
                .active()
                .and_then(|i| self.config.contacts.get(i).cloned()),
            completed_calls: self.calls.completed(),
            pressed_contact: self.pressed_contact,
            pin_filled: self.pin.filled(),
            pin_length: self.pin.length(),
            pin_error,
            pin_error_message,
            unlocked: self.unlocked_revealed,
        }
    }

    // ---- gestures ----

    /// Press. Tries the emergency panel first, then the PIN sheet. Returns
    /// whether a gesture started.
    pub fn pointer_down(&mut self, input: &RawInput, hits: &HitRegions) -> bool {
        if !self.arbiter.is_idle() || self.pin.is_unlocked() || self.unlocked_revealed {
            return false;
        }
        let Some(sample) = input.normalize() else {
            return false;
        };
        let panel_zones = Activation {
            when_closed: Region::Within(hits.trigger),
            when_open: Region::Within(hits.panel),
        };
        let sheet_zones = Activation {
            when_closed: Region::BottomBand {
                rect: hits.lock_screen,
                fraction: self.config.swipe_up_zone,
            },
            when_open: if hits.on_control {
                Region::Nowhere
            } else {
                Region::TopBand {
                    rect: hits.pin_sheet,
                    fraction: self.config.swipe_down_zone,
                }
            },
        };
        let started = self.panel.begin(&mut self.session, sample, &panel_zones)
            || self.sheet.begin(&mut self.session, sample, &sheet_zones);
        if started {
            self.arbiter.claim(input.source());
        }
        started
    }

    /// Move. Returns whether a gesture consumed it.
    pub fn pointer_move(&mut self, input: &RawInput) -> bool {
        if self.arbiter.is_idle() || !self.arbiter.admits(input.source()) {
            return false;
        }
        let Some(sample) = input.normalize() else {
            return false;
        };
        self.panel.drag(sample).is_some() || self.sheet.drag(sample).is_some()
    }

    /// Release (or cancel). A release with no gesture in flight does nothing.
    pub fn pointer_up(&mut self, input: &RawInput) -> Effects {
        if self.arbiter.is_idle() || !self.arbiter.admits(input.source()) {
            return Vec::new();
        }
        self.arbiter.release();
        let sample = input.normalize();
        if self.panel.release(&mut self.session, sample).is_some() {
            return Vec::new();
        }
        match self.sheet.release(&mut self.session, sample) {
            Some(outcome) if outcome.committed && outcome.open() => {
                self.force_close_panel();
                Vec::new()
            }
            Some(outcome) if outcome.committed => self.reset_pin(),
            _ => Vec::new(),
        }
    }

    /// Window resized or first layout done.
    pub fn layout(&mut self)
    where
        P: GeometryProvider,
    {
        self.panel.relayout(&self.session);
        self.sheet.relayout(&self.session);
    }

    fn force_close_panel(&mut self) {
        if self.session.panel_open() || self.panel.is_dragging() {
            if self.panel.is_dragging() {
                self.arbiter.release();
            }
            self.panel.snap(&mut self.session, false);
        }
    }

    // ---- PIN sheet ----

    /// Open the sheet without a drag; shuts the emergency panel first.
    pub fn open_pin_sheet(&mut self) -> Effects {
        if self.session.pin_screen_open()
            || self.pin.is_unlocked()
            || self.session.active_gesture() == Some(GestureId::PinSheet)
        {
            return Vec::new();
        }
        self.force_close_panel();
        self.sheet.snap(&mut self.session, true);
        Vec::new()
    }

    pub fn close_pin_sheet(&mut self) -> Effects {
        if self.session.pin_screen_open() || self.sheet.is_dragging() {
            if self.sheet.is_dragging() {
                self.arbiter.release();
            }
            self.sheet.snap(&mut self.session, false);
        }
        self.reset_pin()
    }

    fn reset_pin(&mut self) -> Effects {
        self.pin.reset();
        let mut effects = Vec::new();
        for task in PIN_TASKS {
            if self.clock.is_pending(task) {
                self.clock.cancel(task);
                effects.push(Effect::Cancel(task));
            }
        }
        effects
    }

    pub fn press_digit(&mut self, digit: char) -> Effects {
        if !self.session.pin_screen_open() {
            return Vec::new();
        }
        match self.pin.press(digit) {
            KeyOutcome::Complete => vec![Effect::Schedule(
                self.clock.schedule(Task::VerifyPin, self.config.verify_delay_ms),
            )],
            KeyOutcome::Accepted | KeyOutcome::Ignored => Vec::new(),
        }
    }

    pub fn delete_digit(&mut self) -> bool {
        self.session.pin_screen_open() && self.pin.delete()
    }

    fn verify_pin(&mut self) -> Effects {
        match self.pin.verify() {
            Some(Verdict::Accepted) => {
                info!("PIN accepted, unlocking");
                let mut effects = self.close_pin_sheet();
                effects.push(Effect::Schedule(self.clock.schedule(
                    Task::RevealUnlocked,
                    self.config.unlock_reveal_delay_ms,
                )));
                effects
            }
            Some(Verdict::Rejected) => {
                info!("PIN rejected");
                vec![
                    Effect::Schedule(
                        self.clock
                            .schedule(Task::ShowPinError, self.config.error_message_delay_ms),
                    ),
                    Effect::Schedule(
                        self.clock
                            .schedule(Task::ClearPinError, self.config.error_clear_delay_ms),
                    ),
                ]
            }
            None => Vec::new(),
        }
    }

    // ---- calls ----

    /// Contact tapped. Ignored unless it is the next contact in order and no
    /// call is running.
    pub fn start_call(&mut self, index: usize) -> Effects {
        if !self.calls.start(index) {
            return Vec::new();
        }
        let Some(contact) = self.config.contacts.get(index) else {
            return Vec::new();
        };
        info!("calling {} (contact {})", contact.name, index);
        let src = contact.video.clone();
        self.force_close_panel();
        self.pressed_contact = Some(index);
        vec![
            Effect::Schedule(
                self.clock
                    .schedule(Task::PressFeedback, self.config.press_feedback_ms),
            ),
            Effect::Media(MediaCommand::LoadScene { src }),
            Effect::Schedule(
                self.clock
                    .schedule(Task::ScenePlay, self.config.scene_start_delay_ms),
            ),
        ]
    }

    pub fn scene_playback_rejected(&mut self, err: &PlaybackError) -> Effects {
        if self.calls.active().is_none() {
            return Vec::new();
        }
        warn!("scene playback failed: {}; ending call after fallback delay", err);
        vec![Effect::Schedule(
            self.clock
                .schedule(Task::SceneFallback, self.config.scene_fallback_ms),
        )]
    }

    pub fn scene_ended(&mut self) -> Effects {
        self.end_call()
    }

    fn end_call(&mut self) -> Effects {
        let Some(index) = self.calls.finish() else {
            return Vec::new();
        };
        info!("call {} finished", index);
        let mut effects = Vec::new();
        for task in [Task::ScenePlay, Task::SceneFallback] {
            if self.clock.is_pending(task) {
                self.clock.cancel(task);
                effects.push(Effect::Cancel(task));
            }
        }
        effects.push(Effect::Media(MediaCommand::StopScene));
        effects
    }

    // ---- intro ----

    pub fn start_intro(&mut self) -> Effects {
        if self.intro.start() {
            vec![Effect::Media(MediaCommand::PlayIntro)]
        } else {
            Vec::new()
        }
    }

    pub fn skip_intro(&mut self) -> Effects {
        if self.intro.overlay_visible() && !self.intro.is_fading() {
            vec![Effect::Media(MediaCommand::SkipIntro)]
        } else {
            Vec::new()
        }
    }

    pub fn intro_ended(&mut self) -> Effects {
        if self.intro.playback_finished() {
            vec![Effect::Schedule(
                self.clock.schedule(Task::IntroFade, self.config.intro_fade_ms),
            )]
        } else {
            Vec::new()
        }
    }

    pub fn intro_playback_rejected(&mut self, err: &PlaybackError) -> Effects {
        warn!("intro playback failed: {}; skipping intro", err);
        self.intro_ended()
    }

    /// Whether key presses should be swallowed (intro overlay up).
    pub fn blocks_keys(&self) -> bool {
        self.intro.overlay_visible()
    }

    // ---- deferred work ----

    /// A timer armed from an earlier [`Effect::Schedule`] elapsed. Stale tokens
    /// are ignored.
    pub fn fire(&mut self, token: TaskToken) -> Effects {
        if !self.clock.take(token) {
            return Vec::new();
        }
        match token.task {
            Task::VerifyPin => self.verify_pin(),
            Task::ShowPinError => {
                self.pin.show_error_message();
                Vec::new()
            }
            Task::ClearPinError => {
                self.pin.clear_error();
                Vec::new()
            }
            Task::RevealUnlocked => {
                self.unlocked_revealed = true;
                Vec::new()
            }
            Task::IntroFade => {
                if self.intro.fade_complete() {
                    vec![Effect::Media(MediaCommand::StopIntro)]
                } else {
                    Vec::new()
                }
            }
            Task::ScenePlay => {
                if self.calls.active().is_some() {
                    vec![Effect::Media(MediaCommand::PlayScene)]
                } else {
                    Vec::new()
                }
            }
            Task::SceneFallback => self.end_call(),
            Task::PressFeedback => {
                self.pressed_contact = None;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::input::{MouseInput, PointerInput, PointerKind, TouchInput};
    use crate::gesture::presenter::RecordingPresenter;

    const W: f64 = 320.0;
    const H: f64 = 640.0;

    fn lock() -> LockScreen<RecordingPresenter> {
        let mut lock = LockScreen::new(
            Config::default(),
            RecordingPresenter {
                extent: W,
                ..Default::default()
            },
            RecordingPresenter {
                extent: H,
                ..Default::default()
            },
        );
        lock.layout();
        lock
    }

    fn hits() -> HitRegions {
        HitRegions {
            trigger: Rect::new(20.0, 560.0, 48.0, 48.0),
            panel: Rect::new(0.0, 0.0, W, H),
            lock_screen: Rect::new(0.0, 0.0, W, H),
            pin_sheet: Rect::new(0.0, 0.0, W, H),
            on_control: false,
        }
    }

    fn ptr(x: f64, y: f64, t: f64) -> RawInput {
        RawInput::Pointer(PointerInput {
            x,
            y,
            t,
            kind: PointerKind::Touch,
        })
    }

    fn token(effects: &Effects, task: Task) -> TaskToken {
        effects
            .iter()
            .find_map(|e| match e {
                Effect::Schedule(d) if d.token.task == task => Some(d.token),
                _ => None,
            })
            .expect("task scheduled")
    }

    fn open_panel(lock: &mut LockScreen<RecordingPresenter>) {
        assert!(lock.pointer_down(&ptr(40.0, 580.0, 0.0), &hits()));
        assert!(lock.pointer_move(&ptr(40.0 - 0.5 * W, 580.0, 400.0)));
        lock.pointer_up(&ptr(40.0 - 0.5 * W, 580.0, 800.0));
        assert!(lock.session().panel_open());
    }

    fn enter(lock: &mut LockScreen<RecordingPresenter>, pin: &str) -> Effects {
        pin.chars().flat_map(|c| lock.press_digit(c)).collect()
    }

    #[test]
    fn opening_pin_sheet_snaps_panel_closed() {
        let mut lock = lock();
        open_panel(&mut lock);
        assert_eq!(lock.panel().presenter().offset, Some(0.0));
        lock.open_pin_sheet();
        assert!(!lock.session().panel_open());
        assert!(lock.session().pin_screen_open());
        assert_eq!(lock.panel().presenter().offset, Some(W));
        assert_eq!(lock.panel().presenter().active, Some(false));
        assert_eq!(lock.sheet().presenter().active, Some(true));
    }

    #[test]
    fn swipe_up_blocked_while_panel_open() {
        let mut lock = lock();
        open_panel(&mut lock);
        let mut h = hits();
        h.panel = Rect::new(W * 0.5, 0.0, W * 0.5, H);
        assert!(!lock.pointer_down(&ptr(10.0, 600.0, 1000.0), &h));
        assert_eq!(lock.session().active_gesture(), None);
    }

    #[test]
    fn swipe_up_then_swipe_down() {
        let mut lock = lock();
        assert!(lock.pointer_down(&ptr(160.0, 600.0, 0.0), &hits()));
        lock.pointer_move(&ptr(160.0, 300.0, 600.0));
        lock.pointer_up(&ptr(160.0, 300.0, 700.0));
        assert!(lock.session().pin_screen_open());
        assert!(lock.view().pin_screen_open);

        lock.press_digit('1');
        assert!(lock.pointer_down(&ptr(160.0, 50.0, 1000.0), &hits()));
        lock.pointer_move(&ptr(160.0, 400.0, 1600.0));
        lock.pointer_up(&ptr(160.0, 400.0, 1700.0));
        assert!(!lock.session().pin_screen_open());
        assert_eq!(lock.view().pin_filled, 0);
    }

    #[test]
    fn swipe_down_not_started_on_keypad_button() {
        let mut lock = lock();
        lock.open_pin_sheet();
        let mut h = hits();
        h.on_control = true;
        assert!(!lock.pointer_down(&ptr(160.0, 50.0, 0.0), &h));
    }

    #[test]
    fn other_input_families_cannot_hijack_a_drag() {
        let mut lock = lock();
        assert!(lock.pointer_down(&ptr(40.0, 580.0, 0.0), &hits()));
        let mouse = RawInput::Mouse(MouseInput {
            x: 40.0 - W,
            y: 580.0,
            t: 100.0,
        });
        assert!(!lock.pointer_move(&mouse));
        assert!(!lock.pointer_down(&mouse, &hits()));
        assert!(lock.pointer_up(&mouse).is_empty());
        assert_eq!(
            lock.session().active_gesture(),
            Some(GestureId::EmergencyPanel)
        );
        // released back at the origin: nothing to commit
        let end = RawInput::Pointer(PointerInput {
            x: 40.0,
            y: 580.0,
            t: 900.0,
            kind: PointerKind::Touch,
        });
        lock.pointer_up(&end);
        assert_eq!(lock.session().active_gesture(), None);
        assert!(!lock.session().panel_open());
    }

    #[test]
    fn touch_release_without_contacts_uses_last_move() {
        let mut lock = lock();
        let touch = |x: f64, t: f64| {
            RawInput::Touch(TouchInput {
                contacts: vec![(x, 580.0)],
                t,
            })
        };
        assert!(lock.pointer_down(&touch(40.0, 0.0), &hits()));
        lock.pointer_move(&touch(40.0 - 0.6 * W, 500.0));
        lock.pointer_up(&RawInput::Touch(TouchInput {
            contacts: Vec::new(),
            t: 510.0,
        }));
        assert!(lock.session().panel_open());
    }

    #[test]
    fn correct_pin_unlocks_after_delays() {
        let mut lock = lock();
        lock.open_pin_sheet();
        let effects = enter(&mut lock, "2830");
        let verify = token(&effects, Task::VerifyPin);
        let effects = lock.fire(verify);
        assert!(!lock.session().pin_screen_open());
        assert!(!lock.view().unlocked);
        let reveal = token(&effects, Task::RevealUnlocked);
        lock.fire(reveal);
        assert!(lock.view().unlocked);
        assert!(lock.open_pin_sheet().is_empty());
        assert!(!lock.session().pin_screen_open());
    }

    #[test]
    fn no_gestures_while_unlock_is_being_revealed() {
        let mut lock = lock();
        lock.open_pin_sheet();
        let effects = enter(&mut lock, "2830");
        let effects = lock.fire(token(&effects, Task::VerifyPin));
        assert!(!lock.session().pin_screen_open());

        assert!(!lock.pointer_down(&ptr(160.0, 600.0, 0.0), &hits()));
        assert!(!lock.pointer_move(&ptr(160.0, 300.0, 150.0)));
        assert!(lock.pointer_up(&ptr(160.0, 300.0, 150.0)).is_empty());
        assert!(!lock.pointer_down(&ptr(40.0, 580.0, 200.0), &hits()));
        assert_eq!(lock.session().active_gesture(), None);

        lock.fire(token(&effects, Task::RevealUnlocked));
        assert!(lock.view().unlocked);
        assert!(!lock.session().pin_screen_open());
        assert!(!lock.session().panel_open());
    }

    #[test]
    fn wrong_pin_shows_error_then_allows_retry() {
        let mut lock = lock();
        lock.open_pin_sheet();
        let effects = enter(&mut lock, "1234");
        let effects = lock.fire(token(&effects, Task::VerifyPin));
        assert!(lock.view().pin_error);
        assert!(!lock.view().pin_error_message);
        assert!(enter(&mut lock, "2830").is_empty());
        lock.fire(token(&effects, Task::ShowPinError));
        assert!(lock.view().pin_error_message);
        lock.fire(token(&effects, Task::ClearPinError));
        let view = lock.view();
        assert!(!view.pin_error);
        assert_eq!(view.pin_filled, 0);

        let effects = enter(&mut lock, "2830");
        let effects = lock.fire(token(&effects, Task::VerifyPin));
        lock.fire(token(&effects, Task::RevealUnlocked));
        assert!(lock.view().unlocked);
    }

    #[test]
    fn closing_sheet_voids_pending_error_clear() {
        let mut lock = lock();
        lock.open_pin_sheet();
        let effects = enter(&mut lock, "0000");
        let effects = lock.fire(token(&effects, Task::VerifyPin));
        let clear = token(&effects, Task::ClearPinError);
        let closed = lock.close_pin_sheet();
        assert!(closed.contains(&Effect::Cancel(Task::ClearPinError)));
        assert!(lock.fire(clear).is_empty());
        lock.open_pin_sheet();
        enter(&mut lock, "28");
        assert_eq!(lock.view().pin_filled, 2);
    }

    #[test]
    fn calls_run_in_order() {
        let mut lock = lock();
        assert!(lock.start_call(1).is_empty());
        let effects = lock.start_call(0);
        assert!(effects.contains(&Effect::Media(MediaCommand::LoadScene {
            src: "assets/video/scene2_video.mp4".into()
        })));
        assert_eq!(lock.view().calling.map(|c| c.name), Some("Lina".to_string()));
        assert!(lock.start_call(1).is_empty());
        let play = lock.fire(token(&effects, Task::ScenePlay));
        assert_eq!(play, vec![Effect::Media(MediaCommand::PlayScene)]);
        let ended = lock.scene_ended();
        assert!(ended.contains(&Effect::Media(MediaCommand::StopScene)));
        assert!(lock.view().calling.is_none());
        assert!(lock.start_call(0).is_empty());
        assert!(!lock.start_call(1).is_empty());
    }

    #[test]
    fn call_closes_open_panel() {
        let mut lock = lock();
        open_panel(&mut lock);
        lock.start_call(0);
        assert!(!lock.session().panel_open());
        assert_eq!(lock.view().pressed_contact, Some(0));
    }

    #[test]
    fn rejected_scene_falls_back_once() {
        let mut lock = lock();
        lock.start_call(0);
        let effects = lock.scene_playback_rejected(&PlaybackError::Rejected("NotAllowedError".into()));
        let fallback = token(&effects, Task::SceneFallback);
        let ended = lock.fire(fallback);
        assert!(ended.contains(&Effect::Media(MediaCommand::StopScene)));
        assert_eq!(lock.view().completed_calls, 1);
        assert!(lock.scene_ended().is_empty());
        assert_eq!(lock.view().completed_calls, 1);
    }

    #[test]
    fn stale_fallback_after_natural_end_is_ignored() {
        let mut lock = lock();
        lock.start_call(0);
        let effects = lock.scene_playback_rejected(&PlaybackError::MissingElement);
        let fallback = token(&effects, Task::SceneFallback);
        let ended = lock.scene_ended();
        assert!(ended.contains(&Effect::Cancel(Task::SceneFallback)));
        lock.start_call(1);
        assert!(lock.fire(fallback).is_empty());
        assert_eq!(lock.view().calling.map(|c| c.name), Some("Maya".to_string()));
    }

    #[test]
    fn intro_flow_and_skip() {
        let mut lock = lock();
        assert!(lock.skip_intro().is_empty());
        assert_eq!(
            lock.start_intro(),
            vec![Effect::Media(MediaCommand::PlayIntro)]
        );
        assert!(lock.blocks_keys());
        assert_eq!(lock.skip_intro(), vec![Effect::Media(MediaCommand::SkipIntro)]);
        let effects = lock.intro_ended();
        assert!(lock.view().intro_fading);
        assert!(lock.skip_intro().is_empty());
        let stop = lock.fire(token(&effects, Task::IntroFade));
        assert_eq!(stop, vec![Effect::Media(MediaCommand::StopIntro)]);
        assert!(!lock.view().intro_overlay);
        assert!(!lock.blocks_keys());
    }

    #[test]
    fn rejected_intro_still_fades_out() {
        let mut lock = lock();
        lock.start_intro();
        let effects = lock.intro_playback_rejected(&PlaybackError::Rejected("x".into()));
        assert_eq!(token(&effects, Task::IntroFade).task, Task::IntroFade);
    }

    #[test]
    fn active_gesture_only_between_start_and_release() {
        let mut lock = lock();
        assert_eq!(lock.session().active_gesture(), None);
        lock.pointer_down(&ptr(160.0, 600.0, 0.0), &hits());
        assert_eq!(lock.session().active_gesture(), Some(GestureId::PinSheet));
        lock.pointer_move(&ptr(160.0, 590.0, 100.0));
        assert_eq!(lock.session().active_gesture(), Some(GestureId::PinSheet));
        lock.pointer_up(&ptr(160.0, 590.0, 400.0));
        assert_eq!(lock.session().active_gesture(), None);
        assert!(lock.pointer_up(&ptr(160.0, 590.0, 500.0)).is_empty());
        assert_eq!(lock.session().active_gesture(), None);
    }
}
