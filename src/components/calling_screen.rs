use yew::prelude::*;

use crate::model::Contact;

#[derive(Properties, PartialEq, Clone)]
pub struct CallingScreenProps {
    pub contact: Option<Contact>,
    pub video_ref: NodeRef,
    pub on_ended: Callback<()>,
}

/// Caller card plus the scene video. Both stay mounted; `active` toggles them.
#[function_component(CallingScreen)]
pub fn calling_screen(props: &CallingScreenProps) -> Html {
    let active = props.contact.is_some();
    let (icon, name, number) = props
        .contact
        .as_ref()
        .map(|c| (c.icon.clone(), c.name.clone(), c.number.clone()))
        .unwrap_or_default();
    let ended = {
        let cb = props.on_ended.clone();
        Callback::from(move |_: Event| cb.emit(()))
    };
    let no_menu = Callback::from(|e: MouseEvent| e.prevent_default());
    html! {
        <>
            <div id="callingScreen" class={classes!("calling-screen", active.then_some("active"))}>
                <div id="callingAvatar" class="calling-avatar">{icon}</div>
                <div id="callingName" class="calling-name">{name}</div>
                <div id="callingNumber" class="calling-number">{number}</div>
                <div class="calling-status">{"calling..."}</div>
            </div>
            <div id="sceneVideoOverlay"
                class={classes!("scene-video-overlay", active.then_some("active"))}
                oncontextmenu={no_menu.clone()}>
                <video id="sceneVideo"
                    ref={props.video_ref.clone()}
                    playsinline=true
                    preload="auto"
                    onended={ended}
                    oncontextmenu={no_menu}/>
            </div>
        </>
    }
}
