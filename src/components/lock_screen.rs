use yew::prelude::*;

use crate::util::format_clock;

#[derive(Properties, PartialEq, Clone)]
pub struct LockScreenProps {
    pub node: NodeRef,
    pub trigger: NodeRef,
    pub hint_hidden: bool,
    pub on_hint: Callback<()>,
}

/// The static lock screen: clock, the emergency trigger strip on the right
/// edge and the swipe-up hint.
#[function_component(LockScreen)]
pub fn lock_screen(props: &LockScreenProps) -> Html {
    let now = js_sys::Date::new_0();
    let clock = format_clock(now.get_hours(), now.get_minutes());
    let hint_click = {
        let cb = props.on_hint.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="lock-screen" ref={props.node.clone()}>
            <div class="lock-time">{clock}</div>
            <div class="lock-date">{"Swipe left from the edge for emergency calls"}</div>
            <div class="emergency-trigger" ref={props.trigger.clone()}>
                <span class="emergency-trigger-grip"></span>
            </div>
            <div class={classes!("swipe-up-hint", props.hint_hidden.then_some("hidden"))}
                onclick={hint_click}>
                <span class="swipe-up-arrow">{"⌃"}</span>
                <span>{"Swipe up to unlock"}</span>
            </div>
        </div>
    }
}
