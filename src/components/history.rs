use yew::prelude::*;

use crate::components::effects::{use_appear, use_hover};
use crate::effects::Surface;
use crate::model::BetRecord;
use crate::payout::{format_currency, format_timestamp};

#[derive(Properties, PartialEq)]
pub struct BetHistoryProps {
    pub bets: Vec<BetRecord>,
}

#[function_component(BetHistory)]
pub fn bet_history(props: &BetHistoryProps) -> Html {
    if props.bets.is_empty() {
        return html! { <p class="hint">{"У вас пока нет ставок"}</p> };
    }
    html! {
        <div class="bet-list">
            { for props.bets.iter().enumerate().map(|(i, bet)| html! {
                <BetItem key={bet.id} index={i} bet={bet.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BetItemProps {
    pub index: usize,
    pub bet: BetRecord,
}

/// One past bet; clicking toggles the details row.
#[function_component(BetItem)]
pub fn bet_item(props: &BetItemProps) -> Html {
    let expanded = use_state(|| false);
    let hover = use_hover(Surface::BetItem);
    let appear = use_appear(props.index);
    let bet = &props.bet;

    let onclick = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    html! {
        <div class={classes!("bet-item", expanded.then_some("expanded"))}
             style={format!("{} {}", hover.style, appear)}
             onmouseenter={hover.onmouseenter}
             onmouseleave={hover.onmouseleave}
             onmousedown={hover.onmousedown}
             onmouseup={hover.onmouseup}
             {onclick}>
            <div class="bet-summary">
                <span class="bet-race">{ &bet.race_title }</span>
                <span class="bet-horse">{ &bet.horse_name }</span>
                <span class="bet-amount">{ format_currency(bet.amount) }</span>
                <span class={classes!("bet-status", format!("status-{}", bet.status))}>{ &bet.status }</span>
            </div>
            { if *expanded {
                html! {
                    <div class="bet-details">
                        <p>{"Коэффициент: "}{ format!("{:.2}", bet.odds) }</p>
                        <p>{"Возможный выигрыш: "}{ format_currency(bet.potential_win) }</p>
                        <p>{"Дата: "}{ format_timestamp(&bet.created_at) }</p>
                    </div>
                }
            } else { html!{} }}
        </div>
    }
}
