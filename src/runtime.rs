use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo::timers::callback::Timeout;
use log::debug;
use web_sys::Event;
use yew::{Callback, NodeRef};

use crate::config::Config;
use crate::dom::{self, DomPanel, PANEL_TRANSITION, SHEET_TRANSITION};
use crate::gesture::RawInput;
use crate::media::{MediaPlayer, VideoHandle};
use crate::model::Axis;
use crate::state::{Effect, HitRegions, LockScreen, LockView, MediaCommand, Task};

/// Elements the runtime needs to reach.
#[derive(Clone, Default, PartialEq)]
pub struct ShellRefs {
    pub phone: NodeRef,
    pub lock_screen: NodeRef,
    pub trigger: NodeRef,
    pub panel: NodeRef,
    pub pin_sheet: NodeRef,
    pub intro_video: NodeRef,
    pub scene_video: NodeRef,
}

pub struct Shell {
    lock: RefCell<LockScreen<DomPanel>>,
    // Fired timeouts stay here until replaced or cancelled; dropping one from
    // inside its own callback would free the running closure.
    timers: RefCell<HashMap<Task, Timeout>>,
    refs: ShellRefs,
    intro_video: VideoHandle,
    scene_video: VideoHandle,
    redraw: Callback<()>,
}

impl Shell {
    pub fn new(config: Config, refs: ShellRefs, redraw: Callback<()>) -> Self {
        let panel = DomPanel::new(refs.panel.clone(), Axis::Horizontal, PANEL_TRANSITION);
        let sheet = DomPanel::new(refs.pin_sheet.clone(), Axis::Vertical, SHEET_TRANSITION);
        Self {
            lock: RefCell::new(LockScreen::new(config, panel, sheet)),
            timers: RefCell::new(HashMap::new()),
            intro_video: VideoHandle::new(refs.intro_video.clone()),
            scene_video: VideoHandle::new(refs.scene_video.clone()),
            refs,
            redraw,
        }
    }

    pub fn view(&self) -> LockView {
        self.lock.borrow().view()
    }

    pub fn config(&self) -> Config {
        self.lock.borrow().config().clone()
    }

    pub fn blocks_keys(&self) -> bool {
        self.lock.borrow().blocks_keys()
    }

    /// Run one coordinator operation, execute its effects and re-render.
    pub fn update(self: &Rc<Self>, op: impl FnOnce(&mut LockScreen<DomPanel>) -> Vec<Effect>) {
        let effects = op(&mut self.lock.borrow_mut());
        self.run(effects);
        self.redraw.emit(());
    }

    pub fn relayout(&self) {
        self.lock.borrow_mut().layout();
    }

    pub fn press(&self, input: RawInput, event: &Event) {
        let hits = HitRegions {
            trigger: dom::rect_of(&self.refs.trigger),
            panel: dom::rect_of(&self.refs.panel),
            lock_screen: dom::rect_of(&self.refs.lock_screen),
            pin_sheet: dom::rect_of(&self.refs.pin_sheet),
            on_control: dom::on_control(event),
        };
        let started = self.lock.borrow_mut().pointer_down(&input, &hits);
        // Buttons still need their click.
        if started && !hits.on_control {
            event.prevent_default();
        }
    }

    pub fn drag(&self, input: RawInput, event: &Event) {
        if self.lock.borrow_mut().pointer_move(&input) {
            event.prevent_default();
        }
    }

    pub fn release(self: &Rc<Self>, input: RawInput) {
        let dragging = self.lock.borrow().session().active_gesture().is_some();
        if dragging {
            self.update(|lock| lock.pointer_up(&input));
        }
    }

    fn run(self: &Rc<Self>, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Schedule(deferred) => {
                    let weak = Rc::downgrade(self);
                    let token = deferred.token;
                    let timeout = Timeout::new(deferred.delay_ms, move || {
                        if let Some(shell) = weak.upgrade() {
                            shell.update(|lock| lock.fire(token));
                        }
                    });
                    self.timers.borrow_mut().insert(token.task, timeout);
                }
                Effect::Cancel(task) => {
                    if let Some(timeout) = self.timers.borrow_mut().remove(&task) {
                        timeout.cancel();
                    }
                }
                Effect::Media(command) => self.media(command),
            }
        }
    }

    fn media(self: &Rc<Self>, command: MediaCommand) {
        debug!("media {:?}", command);
        match command {
            MediaCommand::PlayIntro => {
                self.intro_video.prepare();
                let weak = Rc::downgrade(self);
                self.intro_video.play(Box::new(move |err| {
                    with_shell(&weak, |shell| {
                        shell.update(|lock| lock.intro_playback_rejected(&err))
                    })
                }));
            }
            MediaCommand::SkipIntro => self.intro_video.skip_to_end(),
            MediaCommand::StopIntro => self.intro_video.stop(),
            MediaCommand::LoadScene { src } => self.scene_video.load(&src),
            MediaCommand::PlayScene => {
                let weak = Rc::downgrade(self);
                self.scene_video.play(Box::new(move |err| {
                    with_shell(&weak, |shell| {
                        shell.update(|lock| lock.scene_playback_rejected(&err))
                    })
                }));
            }
            MediaCommand::StopScene => self.scene_video.stop(),
        }
    }
}

fn with_shell(weak: &Weak<Shell>, f: impl FnOnce(&Rc<Shell>)) {
    if let Some(shell) = weak.upgrade() {
        f(&shell);
    }
}
