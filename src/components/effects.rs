//! Hooks wiring the cosmetic styles in `crate::effects` to pointer and focus
//! events.

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::effects::{self, Pointer, Surface};

#[derive(Clone, PartialEq)]
pub struct Hover {
    pub style: String,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
    pub onmousedown: Callback<MouseEvent>,
    pub onmouseup: Callback<MouseEvent>,
}

#[hook]
pub fn use_hover(surface: Surface) -> Hover {
    let pointer = use_state(Pointer::default);
    let step = |f: fn(Pointer) -> Pointer| {
        let pointer = pointer.clone();
        Callback::from(move |_: MouseEvent| pointer.set(f(*pointer)))
    };
    Hover {
        style: effects::pointer_style(surface, *pointer),
        onmouseenter: step(Pointer::on_enter),
        onmouseleave: step(Pointer::on_leave),
        onmousedown: step(Pointer::on_down),
        onmouseup: step(Pointer::on_up),
    }
}

/// Fade-in style for the `index`-th animated element on the page.
#[hook]
pub fn use_appear(index: usize) -> &'static str {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with(index, move |index| {
            let timeout = Timeout::new(effects::appear_delay_ms(*index), move || visible.set(true));
            move || drop(timeout)
        });
    }
    effects::appear_style(*visible)
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wrapper for a label + input pair that lifts while focused.
#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    let focused = use_state(|| false);
    let onfocusin = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onfocusout = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };

    html! {
        <div class={classes!("form-group", props.class.clone())}
             style={effects::focus_style(*focused)}
             {onfocusin}
             {onfocusout}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
    #[prop_or(Surface::NavLink)]
    pub surface: Surface,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

#[function_component(HoverLink)]
pub fn hover_link(props: &HoverLinkProps) -> Html {
    let hover = use_hover(props.surface);
    let onclick = props.onclick.clone();

    html! {
        <a href={props.href.clone()}
           class={props.class.clone()}
           style={hover.style}
           onmouseenter={hover.onmouseenter}
           onmouseleave={hover.onmouseleave}
           onmousedown={hover.onmousedown}
           onmouseup={hover.onmouseup}
           onclick={onclick}>
            { props.label.clone() }
        </a>
    }
}
