use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IntroOverlayProps {
    pub show: bool,
    pub fading: bool,
    pub src: AttrValue,
    pub video_ref: NodeRef,
    pub on_skip: Callback<()>,
    pub on_ended: Callback<()>,
}

/// Full-screen intro video. Stays mounted so the video element is always there
/// to receive play/seek commands; only its visibility changes.
#[function_component(IntroOverlay)]
pub fn intro_overlay(props: &IntroOverlayProps) -> Html {
    let swallow = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        e.stop_propagation();
    });
    let no_menu = Callback::from(|e: MouseEvent| e.prevent_default());
    let skip_btn = {
        let cb = props.on_skip.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            cb.emit(());
        })
    };
    let ended = {
        let cb = props.on_ended.clone();
        Callback::from(move |_: Event| cb.emit(()))
    };
    let display = if props.show { "display:flex;" } else { "display:none;" };
    html! {
        <div id="videoOverlay"
            class={classes!("video-overlay", props.fading.then_some("fade-out"))}
            style={display}
            onclick={swallow.clone()}
            oncontextmenu={no_menu.clone()}>
            <video id="introVideo"
                ref={props.video_ref.clone()}
                src={props.src.clone()}
                playsinline=true
                preload="auto"
                onended={ended}
                onclick={swallow}
                oncontextmenu={no_menu}/>
            <button id="skipIntroButton" class="skip-intro-button" onclick={skip_btn}>{"Skip intro"}</button>
        </div>
    }
}
