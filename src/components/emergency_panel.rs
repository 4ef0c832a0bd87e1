use yew::prelude::*;

use crate::model::Contact;

#[derive(Properties, PartialEq, Clone)]
pub struct EmergencyPanelProps {
    pub node: NodeRef,
    pub contacts: Vec<Contact>,
    pub completed: usize,
    pub pressed: Option<usize>,
    pub on_call: Callback<usize>,
}

#[function_component(EmergencyPanel)]
pub fn emergency_panel(props: &EmergencyPanelProps) -> Html {
    // The root keeps a fixed class list; the presenter owns `active`.
    html! {
        <div id="emergencyPanel" class="emergency-panel" ref={props.node.clone()}>
            <div class="emergency-header">{"Emergency"}</div>
            <div class="emergency-list">
                { for props.contacts.iter().enumerate().map(|(i, c)| {
                    let on_click = {
                        let cb = props.on_call.clone();
                        Callback::from(move |_| cb.emit(i))
                    };
                    let class = classes!(
                        "emergency-item",
                        (i < props.completed).then_some("completed"),
                        (props.pressed == Some(i)).then_some("pressed"),
                    );
                    html! {
                        <button class={class} onclick={on_click}>
                            <span class="emergency-icon">{c.icon.clone()}</span>
                            <span class="emergency-name">{c.name.clone()}</span>
                            <span class="emergency-number">{c.number.clone()}</span>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
