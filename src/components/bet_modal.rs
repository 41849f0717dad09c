use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::api::{self, BetRequest};
use crate::app::Session;
use crate::busy::{self, BusyGuard};
use crate::components::balance::use_balance;
use crate::components::effects::Field;
use crate::components::messages::use_notifier;
use crate::components::modal::Modal;
use crate::modal::{BetSlip, CloseTrigger};
use crate::model::BetDraft;
use crate::payout;

const SUBMIT_LABEL: &str = "Сделать ставку";
const SUBMITTING_LABEL: &str = "Размещение...";

#[derive(Properties, PartialEq)]
pub struct BetModalProps {
    pub slip: BetSlip,
    pub on_trigger: Callback<CloseTrigger>,
}

/// `#betModal`: stake entry for the horse picked on a race card, posted to the
/// bet endpoint without leaving the page.
#[function_component(BetModal)]
pub fn bet_modal(props: &BetModalProps) -> Html {
    let session = use_context::<Session>().unwrap_or_default();
    let notifier = use_notifier();
    let balance = use_balance();
    let amount = use_state(|| props.slip.draft.amount.clone());
    let busy = use_state(|| false);

    let min_stake = session.config.min_stake.to_string();
    let slip = BetSlip {
        draft: BetDraft { amount: (*amount).clone(), ..props.slip.draft.clone() },
        selection: props.slip.selection.clone(),
    };
    let win = slip.payout();

    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            amount.set(target.value());
        })
    };

    let onsubmit = {
        let draft = slip.draft.clone();
        let busy = busy.clone();
        let on_trigger = props.on_trigger.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match BetRequest::from_draft(&draft) {
                Ok(r) => r,
                Err(err) => {
                    gloo::dialogs::alert(&err.to_string());
                    return;
                }
            };
            let session = session.clone();
            let notifier = notifier.clone();
            let balance = balance.clone();
            let busy = busy.clone();
            let on_trigger = on_trigger.clone();
            spawn_local(async move {
                let _guard = BusyGuard::engage(
                    { let busy = busy.clone(); move || busy.set(true) },
                    move || busy.set(false),
                );
                match api::place_bet(&session.config.bet_endpoint, &session.csrf_token, &request).await {
                    Ok(receipt) => {
                        if let Some(new_balance) = receipt.new_balance {
                            balance.set(new_balance);
                        }
                        notifier.success(api::BET_PLACED);
                        on_trigger.emit(CloseTrigger::Button);
                        let dashboard = session.config.dashboard_url.clone();
                        Timeout::new(session.config.redirect_delay_ms, move || {
                            if let Err(e) = gloo::utils::window().location().set_href(&dashboard) {
                                gloo::console::error!("[paddock] redirect failed", e);
                            }
                        })
                        .forget();
                    }
                    Err(err) => {
                        gloo::console::error!(format!("[paddock] bet on race {} failed: {}", request.race_id, err));
                        notifier.error(err.to_string());
                    }
                }
            });
        })
    };

    let selection = &slip.selection;
    html! {
        <Modal id="betModal" title="Размещение ставки" on_trigger={props.on_trigger.clone()}>
            <div id="selected-horse-info">
                <h3>{ &selection.horse_name }</h3>
                <p>{"Коэффициент: "}<strong>{ format!("{:.2}", selection.odds) }</strong></p>
            </div>
            <form id="betForm" {onsubmit}>
                <input type="hidden" id="modal-race-id" value={props.slip.draft.race_id.to_string()} />
                <input type="hidden" id="modal-horse-id"
                    value={props.slip.draft.horse_id.map(|id| id.to_string()).unwrap_or_default()} />
                <Field>
                    <label for="bet-amount">{"Сумма ставки (₽)"}</label>
                    <input
                        type="number"
                        id="bet-amount"
                        class="form-input"
                        min={min_stake}
                        step="10"
                        value={(*amount).clone()}
                        oninput={on_amount_input}
                        aria-label="Сумма ставки" />
                </Field>
                <div class="hint">
                    {"Потенциальный выигрыш: "}
                    <strong id="potential-win">{ payout::format_money(win) }</strong>
                </div>
                <button type="submit" class="btn btn-primary" disabled={*busy}>
                    { if *busy { html!{ <div class="loading"></div> } } else { html!{} } }
                    { busy::button_label(*busy, SUBMIT_LABEL, SUBMITTING_LABEL) }
                </button>
            </form>
        </Modal>
    }
}
