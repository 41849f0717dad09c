use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::app::Session;
use crate::components::balance::BalanceDisplay;
use crate::components::effects::Field;
use crate::components::messages::use_notifier;
use crate::model::TransactionKind;
use crate::payout;
use crate::validation;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub kind: TransactionKind,
    pub action: AttrValue,
    #[prop_or_default]
    pub min_amount: Option<f64>,
}

/// `.transaction-form` for deposits and withdrawals. Only the amount's own
/// minimum is checked; withdrawals also ask for confirmation.
#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let session = use_context::<Session>().unwrap_or_default();
    let notifier = use_notifier();
    let amount = use_state(String::new);

    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            amount.set(target.value());
        })
    };
    let onsubmit = {
        let kind = props.kind;
        let min = props.min_amount;
        let value = payout::parse_amount(&amount);
        Callback::from(move |e: SubmitEvent| {
            if let Err(err) = validation::validate_transaction(value, min) {
                e.prevent_default();
                notifier.error(err.to_string());
                return;
            }
            if kind == TransactionKind::Withdraw
                && !gloo::dialogs::confirm(&validation::withdraw_prompt(value))
            {
                e.prevent_default();
            }
        })
    };

    html! {
        <div class="card">
            <h2>{ props.kind.title() }</h2>
            <p class="hint">{"Текущий баланс: "}<BalanceDisplay /></p>
            <form class="transaction-form" method="post" action={props.action.clone()} {onsubmit}>
                <input type="hidden" name="csrfmiddlewaretoken" value={session.csrf_token.clone()} />
                <Field>
                    <label for="amount">{"Сумма (₽)"}</label>
                    <input
                        type="number"
                        id="amount"
                        name="amount"
                        class="form-input"
                        min={props.min_amount.map(|m| m.to_string())}
                        step="0.01"
                        value={(*amount).clone()}
                        oninput={on_amount_input} />
                </Field>
                <button type="submit" class="btn btn-primary">
                    { match props.kind {
                        TransactionKind::Deposit => "Пополнить",
                        TransactionKind::Withdraw => "Вывести",
                    }}
                </button>
            </form>
        </div>
    }
}
