use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use crate::dom;

/// Help bubble. Hover-only on desktop; on touch devices a tap toggles it and
/// a tap anywhere else closes it.
#[function_component(HelpTooltip)]
pub fn help_tooltip() -> Html {
    let touch = *use_memo((), |_| dom::is_touch_device());
    let visible = use_state(|| false);
    let container = use_node_ref();

    {
        let visible = visible.clone();
        let container = container.clone();
        use_effect_with(*visible, move |shown| {
            let listener = (touch && *shown).then(move || {
                let document = gloo::utils::document();
                EventListener::new(&document, "click", move |e| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = container
                        .cast::<Node>()
                        .is_some_and(|c| c.contains(target.as_ref()));
                    if !inside {
                        visible.set(false);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let toggle = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            if touch {
                visible.set(!*visible);
            }
        })
    };

    html! {
        <div id="helpIconContainer"
            class={classes!("help-icon-container", touch.then_some("touch"))}
            ref={container}
            onclick={toggle}>
            <span class="help-icon">{"?"}</span>
            <div id="helpTooltip" class={classes!("help-tooltip", (*visible).then_some("show"))}>
                <p>{"Swipe left from the right edge to open emergency contacts."}</p>
                <p>{"Call them in order, then swipe up to enter the passcode."}</p>
            </div>
        </div>
    }
}
