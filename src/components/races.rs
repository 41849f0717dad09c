use yew::prelude::*;

use crate::app::Session;
use crate::components::bet_modal::BetModal;
use crate::components::effects::{use_appear, use_hover, HoverLink};
use crate::components::messages::use_notifier;
use crate::components::race_timer::RaceTimer;
use crate::effects::Surface;
use crate::modal::{self, BetSlip, CloseTrigger, ModalAction, ModalState};
use crate::model::{Horse, Race, Selection};

#[derive(Properties, PartialEq)]
pub struct RaceBoardProps {
    pub races: Vec<Race>,
}

/// Race list with per-card horse selection and the shared bet dialog.
#[function_component(RaceBoard)]
pub fn race_board(props: &RaceBoardProps) -> Html {
    let session = use_context::<Session>().unwrap_or_default();
    let dialog = use_reducer(ModalState::<BetSlip>::default);
    let notifier = use_notifier();

    let on_bet = {
        let dialog = dialog.dispatcher();
        Callback::from(move |(race_id, selection): (u64, Option<Selection>)| {
            match modal::open_bet(race_id, selection.as_ref(), "") {
                Ok(ModalState::Open(slip)) => dialog.dispatch(ModalAction::Open(slip)),
                Ok(ModalState::Closed) => {}
                Err(err) => notifier.error(err.to_string()),
            }
        })
    };
    let on_trigger = {
        let dialog = dialog.dispatcher();
        Callback::from(move |t: CloseTrigger| dialog.dispatch(ModalAction::Trigger(t)))
    };

    html! {
        <>
            <div class="cta-buttons">
                <HoverLink href={session.config.dashboard_url.clone()} label="Личный кабинет"
                    class={classes!("btn")} surface={Surface::HeroButton} />
                <HoverLink href={session.config.history_url.clone()} label="История ставок"
                    class={classes!("btn")} surface={Surface::HeroButton} />
            </div>
            <div class="race-list">
                { for props.races.iter().enumerate().map(|(i, race)| html! {
                    <RaceCard key={race.id} index={i} race={race.clone()} on_bet={on_bet.clone()} />
                }) }
            </div>
            { if let Some(slip) = dialog.payload() {
                html!{ <BetModal key={slip.draft.race_id} slip={slip.clone()} on_trigger={on_trigger.clone()} /> }
            } else { html!{} }}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct RaceCardProps {
    pub index: usize,
    pub race: Race,
    pub on_bet: Callback<(u64, Option<Selection>)>,
}

#[function_component(RaceCard)]
pub fn race_card(props: &RaceCardProps) -> Html {
    let selected = use_state(|| None::<u64>);
    let hover = use_hover(Surface::Card);
    let appear = use_appear(props.index);
    let race = &props.race;

    let selection = (*selected)
        .and_then(|id| race.horse(id))
        .map(Selection::from);
    let bet_label = match &selection {
        Some(s) => format!("Ставка на {}", s.horse_name),
        None => "Сделать ставку".to_string(),
    };
    let on_bet_click = {
        let on_bet = props.on_bet.clone();
        let race_id = race.id;
        Callback::from(move |_: MouseEvent| on_bet.emit((race_id, selection.clone())))
    };

    html! {
        <div class="race-card"
             style={format!("{} {}", hover.style, appear)}
             onmouseenter={hover.onmouseenter}
             onmouseleave={hover.onmouseleave}
             onmousedown={hover.onmousedown}
             onmouseup={hover.onmouseup}>
            <div class="race-header">
                <h3>{ &race.title }</h3>
                <RaceTimer start_time={race.start_time.clone()} />
            </div>
            <div class="race-meta">
                <span class="race-status">{ race.status.label() }</span>
                { if let Some(d) = race.distance {
                    html!{ <span class="race-distance">{ format!("{} м", d) }</span> }
                } else { html!{} }}
            </div>
            <div class="horses">
                { for race.horses.iter().map(|horse| {
                    let selected = selected.clone();
                    let id = horse.id;
                    html! {
                        <HorseCard key={horse.id}
                            horse={horse.clone()}
                            selected={*selected == Some(id)}
                            on_select={Callback::from(move |_| selected.set(Some(id)))} />
                    }
                }) }
            </div>
            { if race.status.accepts_bets() {
                html!{ <button class="btn btn-bet" onclick={on_bet_click}>{ bet_label }</button> }
            } else { html!{} }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HorseCardProps {
    pub horse: Horse,
    pub selected: bool,
    pub on_select: Callback<()>,
}

#[function_component(HorseCard)]
pub fn horse_card(props: &HorseCardProps) -> Html {
    let hover = use_hover(Surface::Card);
    let horse = &props.horse;
    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(()))
    };

    html! {
        <div class={classes!("horse-card", props.selected.then_some("selected"))}
             data-horse-id={horse.id.to_string()}
             data-horse-name={horse.name.clone()}
             data-odds={horse.odds.to_string()}
             style={hover.style}
             onmouseenter={hover.onmouseenter}
             onmouseleave={hover.onmouseleave}
             onmousedown={hover.onmousedown}
             onmouseup={hover.onmouseup}
             {onclick}>
            <div class="horse-name">{ &horse.name }</div>
            <div class="horse-odds">{ format!("{:.2}", horse.odds) }</div>
        </div>
    }
}
