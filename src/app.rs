//! Page shell and bootstrap.
//!
//! The server renders an empty host element plus a JSON payload describing
//! which page this is and the data it needs:
//!
//! ```html
//! <div id="paddock-root" data-min-stake="10"></div>
//! <script id="paddock-data" type="application/json">
//!   {"page": "races", "balance": 1500.0, "races": [...]}
//! </script>
//! ```

use std::rc::Rc;

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::auth::{LoginForm, RegisterForm};
use crate::components::balance::{Balance, BalanceDisplay};
use crate::components::bet_form::{BetForm, Picker};
use crate::components::effects::HoverLink;
use crate::components::history::BetHistory;
use crate::components::messages::MessageCenter;
use crate::components::races::RaceBoard;
use crate::components::transaction::TransactionForm;
use crate::config::UiConfig;
use crate::error::BootstrapError;
use crate::model::{BetRecord, Race, TransactionKind};
use crate::validation::LOGOUT_PROMPT;

pub const ROOT_ID: &str = "paddock-root";
pub const DATA_ID: &str = "paddock-data";

/// Per-page settings every component can read.
#[derive(Clone, PartialEq, Default)]
pub struct Session {
    pub config: Rc<UiConfig>,
    pub csrf_token: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Races {
        races: Vec<Race>,
    },
    PlaceBet {
        races: Vec<Race>,
        action: String,
        #[serde(default)]
        race_id: Option<u64>,
        #[serde(default)]
        picker: Picker,
    },
    Register {
        action: String,
    },
    Login {
        action: String,
    },
    History {
        bets: Vec<BetRecord>,
    },
    Transaction {
        kind: TransactionKind,
        action: String,
        #[serde(default)]
        min_amount: Option<f64>,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavItem {
    pub href: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PagePayload {
    #[serde(flatten)]
    pub page: Page,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default)]
    pub nav: Vec<NavItem>,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub session: Session,
    pub payload: Rc<PagePayload>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let balance = use_state(|| props.payload.balance);
    let balance_ctx = Balance {
        amount: *balance,
        update: {
            let balance = balance.clone();
            Callback::from(move |v: f64| balance.set(Some(v)))
        },
    };

    let on_logout = Callback::from(|e: MouseEvent| {
        if !gloo::dialogs::confirm(LOGOUT_PROMPT) {
            e.prevent_default();
        }
    });

    html! {
        <ContextProvider<Session> context={props.session.clone()}>
            <ContextProvider<Balance> context={balance_ctx}>
                <header class="site-header">
                    <nav class="nav">
                        { for props.payload.nav.iter().map(|item| html! {
                            <HoverLink href={item.href.clone()} label={item.label.clone()} class={classes!("nav-link")} />
                        }) }
                        <BalanceDisplay />
                        <HoverLink href={props.session.config.logout_url.clone()}
                            label="Выход" class={classes!("nav-link", "logout")} onclick={on_logout} />
                    </nav>
                </header>
                <main class="main-content">
                    <MessageCenter>
                        { render_page(&props.payload.page) }
                    </MessageCenter>
                </main>
            </ContextProvider<Balance>>
        </ContextProvider<Session>>
    }
}

fn render_page(page: &Page) -> Html {
    match page {
        Page::Races { races } => html! { <RaceBoard races={races.clone()} /> },
        Page::PlaceBet { races, action, race_id, picker } => html! {
            <div class="card">
                <h2>{"Новая ставка"}</h2>
                <BetForm races={races.clone()} action={action.clone()} race_id={*race_id} picker={*picker} />
            </div>
        },
        Page::Register { action } => html! {
            <div class="auth-card">
                <h2>{"Регистрация"}</h2>
                <RegisterForm action={action.clone()} />
            </div>
        },
        Page::Login { action } => html! {
            <div class="auth-card">
                <h2>{"Вход"}</h2>
                <LoginForm action={action.clone()} />
            </div>
        },
        Page::History { bets } => html! {
            <div class="card">
                <h2>{"История ставок"}</h2>
                <BetHistory bets={bets.clone()} />
            </div>
        },
        Page::Transaction { kind, action, min_amount } => html! {
            <TransactionForm kind={*kind} action={action.clone()} min_amount={*min_amount} />
        },
    }
}

/// Reads the host element and payload, then renders `App` into the host.
pub fn mount() -> Result<(), BootstrapError> {
    let document = gloo::utils::document();
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or(BootstrapError::MissingElement(ROOT_ID))?;
    let data = document
        .get_element_by_id(DATA_ID)
        .ok_or(BootstrapError::MissingElement(DATA_ID))?;
    let payload: PagePayload = serde_json::from_str(&data.text_content().unwrap_or_default())?;

    let (config, rejected) =
        UiConfig::from_attributes(|name| root.get_attribute(&format!("data-{}", name)));
    for err in &rejected {
        gloo::console::warn!(format!("[paddock] ignoring override: {}", err));
    }

    let csrf_token = payload
        .csrf_token
        .clone()
        .or_else(form_csrf_token)
        .unwrap_or_default();
    if csrf_token.is_empty() {
        gloo::console::warn!("[paddock] no CSRF token on page; bet requests will be rejected");
    }

    let props = AppProps {
        session: Session { config: Rc::new(config), csrf_token },
        payload: Rc::new(payload),
    };
    yew::Renderer::<App>::with_root_and_props(root, props).render();
    gloo::console::log!("[paddock] betting UI initialised");
    Ok(())
}

/// Token from a server-rendered `{% csrf_token %}` field, if the page has one.
fn form_csrf_token() -> Option<String> {
    gloo::utils::document()
        .query_selector("[name=csrfmiddlewaretoken]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn races_payload_carries_shell_fields() {
        let payload: PagePayload = serde_json::from_str(
            r#"{
                "page": "races",
                "balance": 1500.5,
                "csrf_token": "abc",
                "nav": [{"href": "/", "label": "Главная"}],
                "races": [{
                    "id": 1,
                    "title": "Весенний кубок",
                    "start_time": "2025-04-01T12:00:00+03:00",
                    "horses": [{"id": 4, "name": "Гром", "odds": 3.2}]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(payload.balance, Some(1500.5));
        assert_eq!(payload.csrf_token.as_deref(), Some("abc"));
        assert_eq!(payload.nav.len(), 1);
        match payload.page {
            Page::Races { races } => {
                assert_eq!(races.len(), 1);
                assert_eq!(races[0].horses[0].name, "Гром");
            }
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn optional_page_fields_default() {
        let payload: PagePayload = serde_json::from_str(
            r#"{"page": "place_bet", "action": "/bet/new/", "races": []}"#,
        )
        .unwrap();
        assert_eq!(payload.balance, None);
        assert!(payload.nav.is_empty());
        assert_eq!(
            payload.page,
            Page::PlaceBet {
                races: vec![],
                action: "/bet/new/".into(),
                race_id: None,
                picker: Picker::Dropdown,
            }
        );

        let payload: PagePayload = serde_json::from_str(
            r#"{"page": "transaction", "kind": "withdraw", "action": "/withdraw/", "min_amount": 100}"#,
        )
        .unwrap();
        assert_eq!(
            payload.page,
            Page::Transaction {
                kind: TransactionKind::Withdraw,
                action: "/withdraw/".into(),
                min_amount: Some(100.0),
            }
        );
    }

    #[test]
    fn unknown_page_is_rejected() {
        let err = serde_json::from_str::<PagePayload>(r#"{"page": "casino"}"#).unwrap_err();
        let err = BootstrapError::from(err);
        assert!(err.to_string().starts_with("invalid page payload"));
    }
}
