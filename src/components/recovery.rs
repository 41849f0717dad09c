use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::api;
use crate::app::Session;
use crate::busy::{self, BusyGuard};
use crate::components::effects::Field;
use crate::components::messages::use_notifier;
use crate::components::modal::Modal;
use crate::modal::{CloseTrigger, ModalAction, ModalState};
use crate::validation;

const SEND_LABEL: &str = "Отправить";
const SENDING_LABEL: &str = "Отправка...";

/// "Forgot password" link plus the dialog it opens.
#[function_component(PasswordRecovery)]
pub fn password_recovery() -> Html {
    let dialog = use_reducer(ModalState::<()>::default);

    let onclick = {
        let dialog = dialog.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dialog.dispatch(ModalAction::Open(()));
        })
    };
    let on_trigger = {
        let dialog = dialog.dispatcher();
        Callback::from(move |t: CloseTrigger| dialog.dispatch(ModalAction::Trigger(t)))
    };

    html! {
        <>
            <div class="forgot-password">
                <a href="#" {onclick}>{"Забыли пароль?"}</a>
            </div>
            { if dialog.is_open() {
                html!{ <RecoveryDialog {on_trigger} /> }
            } else { html!{} }}
        </>
    }
}

#[derive(Properties, PartialEq)]
struct RecoveryDialogProps {
    on_trigger: Callback<CloseTrigger>,
}

#[function_component(RecoveryDialog)]
fn recovery_dialog(props: &RecoveryDialogProps) -> Html {
    let session = use_context::<Session>().unwrap_or_default();
    let notifier = use_notifier();
    let email = use_state(String::new);
    let busy = use_state(|| false);
    let input = use_node_ref();

    {
        let input = input.clone();
        use_effect_with(session.config.focus_delay_ms, move |delay| {
            let timeout = Timeout::new(*delay, move || {
                if let Some(input) = input.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            });
            move || drop(timeout)
        });
    }

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            email.set(target.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let busy = busy.clone();
        let notifier = notifier.clone();
        let on_trigger = props.on_trigger.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = match validation::recovery_email(&email) {
                Ok(address) => address.to_string(),
                Err(err) => {
                    notifier.error(err.to_string());
                    return;
                }
            };
            let session = session.clone();
            let notifier = notifier.clone();
            let email = email.clone();
            let busy = busy.clone();
            let on_trigger = on_trigger.clone();
            spawn_local(async move {
                let _guard = BusyGuard::engage(
                    { let busy = busy.clone(); move || busy.set(true) },
                    move || busy.set(false),
                );
                let sent = match &session.config.recovery_endpoint {
                    Some(endpoint) => api::request_recovery(endpoint, &session.csrf_token, &address).await,
                    None => {
                        TimeoutFuture::new(session.config.recovery_delay_ms).await;
                        Ok(())
                    }
                };
                match sent {
                    Ok(()) => {
                        notifier.success(validation::recovery_sent_message(&address));
                        email.set(String::new());
                        on_trigger.emit(CloseTrigger::Button);
                    }
                    Err(err) => {
                        gloo::console::error!(format!("[paddock] password recovery failed: {}", err));
                        notifier.error(err.to_string());
                    }
                }
            });
        })
    };

    html! {
        <Modal id="passwordRecoveryModal" title="Восстановление пароля" on_trigger={props.on_trigger.clone()}>
            <p class="hint">{"Введите email, указанный при регистрации."}</p>
            <form id="recoveryForm" {onsubmit}>
                <Field>
                    <label for="recovery-email">{"Email"}</label>
                    <input
                        type="email"
                        id="recovery-email"
                        class="form-input"
                        autocomplete="email"
                        value={(*email).clone()}
                        ref={input}
                        {oninput} />
                </Field>
                <button type="submit" class="btn btn-primary btn-block" disabled={*busy}>
                    { busy::button_label(*busy, SEND_LABEL, SENDING_LABEL) }
                </button>
            </form>
        </Modal>
    }
}
