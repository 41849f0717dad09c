use yew::prelude::*;

use crate::payout::format_money;

/// Displayed balance plus a setter, provided by the page shell. The value is
/// only what the server last told us.
#[derive(Clone, PartialEq, Default)]
pub struct Balance {
    pub amount: Option<f64>,
    pub update: Callback<f64>,
}

impl Balance {
    pub fn set(&self, amount: f64) { self.update.emit(amount) }
}

#[hook]
pub fn use_balance() -> Balance {
    use_context::<Balance>().unwrap_or_default()
}

#[function_component(BalanceDisplay)]
pub fn balance_display() -> Html {
    let balance = use_balance();
    match balance.amount {
        Some(amount) => html! { <span class="user-balance">{ format_money(amount) }</span> },
        None => html! {},
    }
}
