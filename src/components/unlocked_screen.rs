use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct UnlockedScreenProps {
    pub show: bool,
}

#[function_component(UnlockedScreen)]
pub fn unlocked_screen(props: &UnlockedScreenProps) -> Html {
    html! {
        <div id="unlockedScreen" class={classes!("unlocked-screen", props.show.then_some("active"))}>
            <div class="unlocked-icon">{"🔓"}</div>
            <div class="unlocked-title">{"Unlocked"}</div>
        </div>
    }
}
