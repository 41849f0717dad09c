use chrono::Utc;
use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::app::Session;
use crate::timer::Countdown;

#[derive(Properties, PartialEq)]
pub struct RaceTimerProps {
    pub start_time: AttrValue,
}

/// Countdown to a race start, refreshed on the configured interval.
#[function_component(RaceTimer)]
pub fn race_timer(props: &RaceTimerProps) -> Html {
    let now = use_state(Utc::now);
    let refresh_ms = use_context::<Session>()
        .map(|s| s.config.timer_refresh_ms)
        .unwrap_or(60_000);
    {
        let now = now.clone();
        use_effect_with(refresh_ms, move |ms| {
            let interval = Interval::new(*ms, move || now.set(Utc::now()));
            move || drop(interval)
        });
    }

    match Countdown::from_attr(&props.start_time, *now) {
        Some(countdown) => html! {
            <span class={countdown.css_class()} data-start-time={props.start_time.clone()}>
                { countdown.label() }
            </span>
        },
        None => html! {},
    }
}
