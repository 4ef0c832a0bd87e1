use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StartScreenProps {
    pub show: bool,
    pub on_start: Callback<()>,
}

#[function_component(StartScreen)]
pub fn start_screen(props: &StartScreenProps) -> Html {
    if !props.show {
        return html! {};
    }
    let start_btn = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div id="startScreen" class="start-screen">
            <h1 class="start-title">{"Emergency"}</h1>
            <p class="start-subtitle">{"Turn the sound on. Swipe, call, unlock."}</p>
            <button id="startButton" class="start-button" onclick={start_btn}>{"Start"}</button>
        </div>
    }
}
