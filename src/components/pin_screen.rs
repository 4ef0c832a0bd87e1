use yew::prelude::*;

const KEYS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

#[derive(Properties, PartialEq, Clone)]
pub struct PinScreenProps {
    pub node: NodeRef,
    pub filled: usize,
    pub length: usize,
    pub error: bool,
    pub error_message: bool,
    pub on_digit: Callback<char>,
    pub on_delete: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(PinScreen)]
pub fn pin_screen(props: &PinScreenProps) -> Html {
    let key = |digit: char| {
        let cb = props.on_digit.clone();
        let onclick = Callback::from(move |_| cb.emit(digit));
        html! {
            <button class="pin-key" data-number={digit.to_string()} disabled={props.error} {onclick}>
                {digit.to_string()}
            </button>
        }
    };
    let delete_btn = {
        let cb = props.on_delete.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cancel_btn = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div id="pinScreen" class="pin-screen" ref={props.node.clone()}>
            <div class={classes!("pin-body", props.error.then_some("error-state"))}>
                <div class="pin-grabber"></div>
                <div class="pin-title">{"Enter Passcode"}</div>
                <div id="pinDotsContainer" class={classes!("pin-dots", props.error.then_some("shake"))}>
                    { for (0..props.length).map(|i| html! {
                        <span class={classes!("pin-dot", (i < props.filled).then_some("filled"))}></span>
                    }) }
                </div>
                <div id="pinErrorMessage"
                    class={classes!("pin-error-message", props.error_message.then_some("show"))}>
                    {"Wrong passcode"}
                </div>
                <div class="pin-keypad">
                    { for KEYS.iter().map(|d| key(*d)) }
                    <button id="cancelButton" class="pin-key pin-action" onclick={cancel_btn}>{"Cancel"}</button>
                    { key('0') }
                    <button id="deleteButton" class="pin-key pin-action"
                        disabled={props.error} onclick={delete_btn}>{"Delete"}</button>
                </div>
            </div>
        </div>
    }
}
