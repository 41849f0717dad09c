use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;
use yew::TargetCast;

use crate::modal::CloseTrigger;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    pub on_trigger: Callback<CloseTrigger>,
    pub children: Children,
}

/// Overlay dialog. Mounting it is "open": the ESC listener lives exactly as
/// long as the component does.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let backdrop = use_node_ref();

    {
        let on_trigger = props.on_trigger.clone();
        use_effect_with(on_trigger, |on_trigger| {
            let on_trigger = on_trigger.clone();
            let listener = EventListener::new(&gloo::utils::document(), "keydown", move |event| {
                let trigger = event
                    .dyn_ref::<KeyboardEvent>()
                    .and_then(|e| CloseTrigger::from_key(&e.key()));
                if let Some(trigger) = trigger {
                    on_trigger.emit(trigger);
                }
            });
            move || drop(listener)
        });
    }

    let onclick = {
        let backdrop = backdrop.clone();
        let on_trigger = props.on_trigger.clone();
        Callback::from(move |e: MouseEvent| {
            let target: Option<Node> = e.target_dyn_into();
            let on_backdrop = matches!((target, backdrop.get()), (Some(t), Some(b)) if t == b);
            on_trigger.emit(CloseTrigger::Click { on_backdrop });
        })
    };
    let on_close_button = {
        let on_trigger = props.on_trigger.clone();
        Callback::from(move |_: MouseEvent| on_trigger.emit(CloseTrigger::Button))
    };

    html! {
        <div id={props.id.clone()} class="modal" style="display: block;" ref={backdrop} {onclick}>
            <div class="modal-content">
                <span class="close" onclick={on_close_button} aria-label="Закрыть">{"×"}</span>
                { if let Some(title) = &props.title {
                    html!{ <h2>{ title.clone() }</h2> }
                } else { html!{} }}
                { for props.children.iter() }
            </div>
        </div>
    }
}
