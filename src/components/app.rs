use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, MouseEvent, PointerEvent, TouchEvent};
use yew::prelude::*;

use crate::components::calling_screen::CallingScreen;
use crate::components::emergency_panel::EmergencyPanel;
use crate::components::help_tooltip::HelpTooltip;
use crate::components::intro_overlay::IntroOverlay;
use crate::components::lock_screen::LockScreen;
use crate::components::pin_screen::PinScreen;
use crate::components::start_screen::StartScreen;
use crate::components::unlocked_screen::UnlockedScreen;
use crate::config::Config;
use crate::dom;
use crate::runtime::{Shell, ShellRefs};

/// Keys the intro overlay swallows so the video cannot be paused or
/// fullscreened from the keyboard.
const BLOCKED_KEYS: [&str; 6] = ["Space", "ArrowLeft", "ArrowRight", "ArrowUp", "ArrowDown", "KeyF"];

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<Config>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let refs = use_memo((), |_| ShellRefs::default());
    let force = use_force_update();
    let shell = {
        let refs = (*refs).clone();
        let config = (*props.config).clone();
        use_memo((), move |_| {
            let redraw = Callback::from(move |_: ()| force.force_update());
            Shell::new(config, refs, redraw)
        })
    };

    // Input, resize and keyboard wiring.
    {
        let shell = shell.clone();
        let refs = refs.clone();
        use_effect_with((), move |_| {
            let document = gloo::utils::document();
            let window = gloo::utils::window();
            let active = EventListenerOptions::enable_prevent_default();
            let mut listeners: Vec<EventListener> = Vec::new();

            if let Some(phone) = refs.phone.cast::<web_sys::HtmlElement>() {
                if dom::supports_pointer_events() {
                    info!("input: pointer events");
                    let s = shell.clone();
                    listeners.push(EventListener::new_with_options(&phone, "pointerdown", active, move |e| {
                        if let Some(pe) = e.dyn_ref::<PointerEvent>() {
                            s.press(dom::pointer_input(pe), e);
                        }
                    }));
                    let s = shell.clone();
                    listeners.push(EventListener::new_with_options(&document, "pointermove", active, move |e| {
                        if let Some(pe) = e.dyn_ref::<PointerEvent>() {
                            s.drag(dom::pointer_input(pe), e);
                        }
                    }));
                    for name in ["pointerup", "pointercancel"] {
                        let s = shell.clone();
                        listeners.push(EventListener::new(&document, name, move |e| {
                            if let Some(pe) = e.dyn_ref::<PointerEvent>() {
                                s.release(dom::pointer_input(pe));
                            }
                        }));
                    }
                } else {
                    info!("input: mouse and touch events");
                    let s = shell.clone();
                    listeners.push(EventListener::new(&phone, "mousedown", move |e| {
                        if let Some(me) = e.dyn_ref::<MouseEvent>() {
                            s.press(dom::mouse_input(me), e);
                        }
                    }));
                    let s = shell.clone();
                    listeners.push(EventListener::new(&document, "mousemove", move |e| {
                        if let Some(me) = e.dyn_ref::<MouseEvent>() {
                            s.drag(dom::mouse_input(me), e);
                        }
                    }));
                    let s = shell.clone();
                    listeners.push(EventListener::new(&document, "mouseup", move |e| {
                        if let Some(me) = e.dyn_ref::<MouseEvent>() {
                            s.release(dom::mouse_input(me));
                        }
                    }));
                    let s = shell.clone();
                    listeners.push(EventListener::new_with_options(&phone, "touchstart", active, move |e| {
                        if let Some(te) = e.dyn_ref::<TouchEvent>() {
                            s.press(dom::touch_input(te), e);
                        }
                    }));
                    let s = shell.clone();
                    listeners.push(EventListener::new_with_options(&document, "touchmove", active, move |e| {
                        if let Some(te) = e.dyn_ref::<TouchEvent>() {
                            s.drag(dom::touch_input(te), e);
                        }
                    }));
                    for name in ["touchend", "touchcancel"] {
                        let s = shell.clone();
                        listeners.push(EventListener::new(&document, name, move |e| {
                            if let Some(te) = e.dyn_ref::<TouchEvent>() {
                                s.release(dom::touch_input(te));
                            }
                        }));
                    }
                }
            }

            let s = shell.clone();
            let capture = EventListenerOptions {
                phase: EventListenerPhase::Capture,
                passive: false,
            };
            listeners.push(EventListener::new_with_options(&document, "keydown", capture, move |e| {
                let Some(ke) = e.dyn_ref::<KeyboardEvent>() else { return };
                if s.blocks_keys() && BLOCKED_KEYS.contains(&ke.code().as_str()) {
                    e.prevent_default();
                    e.stop_propagation();
                }
            }));

            let s = shell.clone();
            listeners.push(EventListener::new(&window, "resize", move |_| s.relayout()));

            shell.relayout();

            move || drop(listeners)
        });
    }

    let view = shell.view();
    let config = shell.config();

    let on_start = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.update(|lock| lock.start_intro()))
    };
    let on_skip = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.update(|lock| lock.skip_intro()))
    };
    let on_intro_ended = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.update(|lock| lock.intro_ended()))
    };
    let on_hint = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.update(|lock| lock.open_pin_sheet()))
    };
    let on_call = {
        let shell = shell.clone();
        Callback::from(move |i: usize| shell.update(|lock| lock.start_call(i)))
    };
    let on_scene_ended = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.update(|lock| lock.scene_ended()))
    };
    let on_digit = {
        let shell = shell.clone();
        Callback::from(move |d: char| shell.update(|lock| lock.press_digit(d)))
    };
    let on_delete = {
        let shell = shell.clone();
        Callback::from(move |_: ()| {
            shell.update(|lock| {
                lock.delete_digit();
                Vec::new()
            })
        })
    };
    let on_cancel = {
        let shell = shell.clone();
        Callback::from(move |_: ()| shell.update(|lock| lock.close_pin_sheet()))
    };
    let no_menu = Callback::from(|e: MouseEvent| e.prevent_default());

    html! {
        <div class="app">
            <StartScreen show={view.start_screen} on_start={on_start} />
            <IntroOverlay
                show={view.intro_overlay}
                fading={view.intro_fading}
                src={AttrValue::from(config.intro_video.clone())}
                video_ref={refs.intro_video.clone()}
                on_skip={on_skip}
                on_ended={on_intro_ended}
            />
            <div class={classes!("phone-container", view.calling.is_some().then_some("phone-slide-left"))}
                ref={refs.phone.clone()}
                oncontextmenu={no_menu}>
                <LockScreen
                    node={refs.lock_screen.clone()}
                    trigger={refs.trigger.clone()}
                    hint_hidden={view.pin_screen_open}
                    on_hint={on_hint}
                />
                <EmergencyPanel
                    node={refs.panel.clone()}
                    contacts={config.contacts.clone()}
                    completed={view.completed_calls}
                    pressed={view.pressed_contact}
                    on_call={on_call}
                />
                <PinScreen
                    node={refs.pin_sheet.clone()}
                    filled={view.pin_filled}
                    length={view.pin_length}
                    error={view.pin_error}
                    error_message={view.pin_error_message}
                    on_digit={on_digit}
                    on_delete={on_delete}
                    on_cancel={on_cancel}
                />
                <UnlockedScreen show={view.unlocked} />
            </div>
            <CallingScreen
                contact={view.calling.clone()}
                video_ref={refs.scene_video.clone()}
                on_ended={on_scene_ended}
            />
            <HelpTooltip />
        </div>
    }
}
