use serde::Deserialize;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew::TargetCast;

use crate::app::Session;
use crate::components::balance::use_balance;
use crate::components::effects::Field;
use crate::components::messages::use_notifier;
use crate::model::Race;
use crate::payout;
use crate::validation::{self, StakeClamp};

/// How the horse list is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Picker {
    #[default]
    Dropdown,
    Radio,
}

#[derive(Properties, PartialEq)]
pub struct BetFormProps {
    pub races: Vec<Race>,
    pub action: AttrValue,
    /// Race fixed by the page; the race selector is hidden.
    #[prop_or_default]
    pub race_id: Option<u64>,
    #[prop_or_default]
    pub picker: Picker,
}

/// `.bet-form`: a regular POST form whose submission is cancelled when the
/// client-side checks fail.
#[function_component(BetForm)]
pub fn bet_form(props: &BetFormProps) -> Html {
    let session = use_context::<Session>().unwrap_or_default();
    let notifier = use_notifier();
    let balance = use_balance();
    let race_id = use_state(|| props.race_id.or_else(|| props.races.first().map(|r| r.id)));
    let horse_id = use_state(|| None::<u64>);
    let amount = use_state(String::new);

    let race = (*race_id).and_then(|id| props.races.iter().find(|r| r.id == id));
    let horse = race.zip(*horse_id).and_then(|(r, id)| r.horse(id));
    let stake = payout::parse_amount(&amount);
    let odds = horse.map_or(1.0, |h| h.odds);
    let win = payout::potential_payout(stake, odds);
    let win_style = if payout::is_emphasized(stake, win) {
        "color: #27ae60; font-weight: bold;"
    } else {
        ""
    };
    let min_stake = session.config.min_stake;

    let on_race_change = {
        let race_id = race_id.clone();
        let horse_id = horse_id.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            race_id.set(target.value().parse::<u64>().ok());
            horse_id.set(None);
        })
    };
    let on_horse_change = {
        let horse_id = horse_id.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            horse_id.set(target.value().parse::<u64>().ok());
        })
    };
    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            amount.set(target.value());
        })
    };
    let on_amount_blur = {
        let amount = amount.clone();
        let notifier = notifier.clone();
        let max = balance.amount;
        Callback::from(move |e: FocusEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            if target.value().trim().is_empty() {
                return;
            }
            let clamp = validation::clamp_stake(payout::parse_amount(&target.value()), min_stake, max);
            if let StakeClamp::RaisedTo(v) | StakeClamp::LoweredTo(v) = clamp {
                amount.set(v.to_string());
            }
            if let Some(msg) = clamp.message() {
                notifier.error(msg);
            }
        })
    };
    let onsubmit = {
        let notifier = notifier.clone();
        let horse_selected = horse.is_some();
        let balance = balance.amount;
        Callback::from(move |e: SubmitEvent| {
            if let Err(err) = validation::validate_bet(horse_selected, stake, balance, min_stake) {
                e.prevent_default();
                notifier.error(err.to_string());
            }
        })
    };

    let horse_picker = match (props.picker, race) {
        (_, None) => html! { <p class="hint">{"Нет доступных забегов"}</p> },
        (Picker::Dropdown, Some(race)) => html! {
            <select id="horse" name="horse_id" class="form-input" onchange={on_horse_change}>
                <option value="" selected={horse_id.is_none()}>{"-- Выберите лошадь --"}</option>
                { for race.horses.iter().map(|h| html! {
                    <option value={h.id.to_string()}
                            data-odds={h.odds.to_string()}
                            selected={*horse_id == Some(h.id)}>
                        { format!("{} (Коэффициент: {})", h.name, h.odds) }
                    </option>
                }) }
            </select>
        },
        (Picker::Radio, Some(race)) => html! {
            <div class="horse-options">
                { for race.horses.iter().map(|h| {
                    let horse_id = horse_id.clone();
                    let id = h.id;
                    html! {
                        <label class={classes!("horse-option", (*horse_id == Some(id)).then_some("selected"))}>
                            <input type="radio" name="horse_id"
                                   value={id.to_string()}
                                   data-odds={h.odds.to_string()}
                                   checked={*horse_id == Some(id)}
                                   onchange={Callback::from(move |_: Event| horse_id.set(Some(id)))} />
                            <span class="horse-name">{ &h.name }</span>
                            <span class="horse-odds">{ format!("{:.2}", h.odds) }</span>
                        </label>
                    }
                }) }
            </div>
        },
    };

    html! {
        <form class="bet-form" method="post" action={props.action.clone()} {onsubmit}>
            <input type="hidden" name="csrfmiddlewaretoken" value={session.csrf_token.clone()} />
            { match props.race_id {
                Some(id) => html!{ <input type="hidden" id="race" name="race" value={id.to_string()} /> },
                None => html!{
                    <Field>
                        <label for="race">{"Забег"}</label>
                        <select id="race" name="race" class="form-input" onchange={on_race_change}>
                            { for props.races.iter().map(|r| html! {
                                <option value={r.id.to_string()} selected={*race_id == Some(r.id)}>{ &r.title }</option>
                            }) }
                        </select>
                    </Field>
                },
            }}
            <Field>
                <label for="horse">{"Лошадь"}</label>
                { horse_picker }
            </Field>
            <Field>
                <label for="amount">{"Сумма ставки (₽)"}</label>
                <input
                    type="number"
                    id="amount"
                    name="amount"
                    class="form-input"
                    min={min_stake.to_string()}
                    max={balance.amount.map(|b| b.to_string())}
                    step="10"
                    value={(*amount).clone()}
                    oninput={on_amount_input}
                    onblur={on_amount_blur} />
            </Field>
            <div class="hint">
                {"Потенциальный выигрыш: "}
                <strong id="potentialWin" class="potential-win" style={win_style}>{ payout::format_money(win) }</strong>
            </div>
            <button type="submit" class="btn btn-primary">{"Сделать ставку"}</button>
        </form>
    }
}
