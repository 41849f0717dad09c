use gloo::timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew::TargetCast;

use crate::app::Session;
use crate::components::effects::{use_hover, Field};
use crate::components::recovery::PasswordRecovery;
use crate::effects::Surface;
use crate::password::{Criteria, PasswordMatch, Strength, Visibility};

#[derive(Properties, PartialEq)]
pub struct PasswordInputProps {
    pub id: AttrValue,
    pub name: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

/// Password field with a show/hide toggle.
#[function_component(PasswordInput)]
pub fn password_input(props: &PasswordInputProps) -> Html {
    let visibility = use_state(Visibility::default);
    let on_toggle = {
        let visibility = visibility.clone();
        Callback::from(move |_: MouseEvent| visibility.set(visibility.toggled()))
    };
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            cb.emit(target.value());
        })
    };

    html! {
        <Field>
            <label for={props.id.clone()}>{ props.label.clone() }</label>
            <div class="password-wrapper">
                <input
                    type={visibility.input_type()}
                    id={props.id.clone()}
                    name={props.name.clone()}
                    class="form-input"
                    autocomplete={props.autocomplete.clone()}
                    required=true
                    {oninput} />
                <button type="button"
                        class="password-toggle"
                        data-target={props.id.clone()}
                        aria-label={visibility.aria_label()}
                        onclick={on_toggle}>
                    { visibility.icon() }
                </button>
            </div>
        </Field>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub busy: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    let hover = use_hover(Surface::Button);
    let (text, loading) = if props.busy { ("none", "flex") } else { ("flex", "none") };
    html! {
        <button type="submit"
                id={props.id.clone()}
                class="btn btn-primary btn-block"
                disabled={props.busy}
                style={hover.style}
                onmouseenter={hover.onmouseenter}
                onmouseleave={hover.onmouseleave}
                onmousedown={hover.onmousedown}
                onmouseup={hover.onmouseup}>
            <span class="btn-text" style={format!("display: {};", text)}>{ props.label.clone() }</span>
            <span class="btn-loading" style={format!("display: {};", loading)}>
                <div class="loading-spinner"></div>{"Загрузка..."}
            </span>
        </button>
    }
}

/// Busy flag for a full-page form post. The page normally navigates away;
/// if it has not after the configured delay the button comes back.
#[hook]
fn use_busy_submit() -> (bool, Callback<SubmitEvent>) {
    let busy = use_state(|| false);
    let revert = use_mut_ref(|| None::<Timeout>);
    let delay = use_context::<Session>()
        .map(|s| s.config.busy_revert_ms)
        .unwrap_or(5_000);

    let onsubmit = {
        let busy = busy.clone();
        Callback::from(move |_: SubmitEvent| {
            busy.set(true);
            let busy = busy.clone();
            *revert.borrow_mut() = Some(Timeout::new(delay, move || busy.set(false)));
        })
    };
    (*busy, onsubmit)
}

/// Focuses the referenced input once, after mount.
#[hook]
fn use_autofocus() -> NodeRef {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with((), move |_| {
            if let Some(input) = node.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        });
    }
    node
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub action: AttrValue,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &AuthFormProps) -> Html {
    let session = use_context::<Session>().unwrap_or_default();
    let password1 = use_state(String::new);
    let password2 = use_state(String::new);
    let (busy, onsubmit) = use_busy_submit();
    let first = use_autofocus();

    let criteria = Criteria::evaluate(&password1);
    let strength = Strength::of(&password1);
    let matched = PasswordMatch::check(&password1, &password2);

    let on_password1 = {
        let password1 = password1.clone();
        Callback::from(move |v: String| password1.set(v))
    };
    let on_password2 = {
        let password2 = password2.clone();
        Callback::from(move |v: String| password2.set(v))
    };

    html! {
        <form id="registerForm" class="auth-form" method="post" action={props.action.clone()} {onsubmit}>
            <input type="hidden" name="csrfmiddlewaretoken" value={session.csrf_token.clone()} />
            <Field>
                <label for="username">{"Имя пользователя"}</label>
                <input type="text" id="username" name="username" class="form-input"
                       autocomplete="username" required=true ref={first} />
            </Field>
            <Field>
                <label for="email">{"Email"}</label>
                <input type="email" id="email" name="email" class="form-input" autocomplete="email" required=true />
            </Field>
            <PasswordInput id="password1" name="password1" label="Пароль"
                autocomplete="new-password" oninput={on_password1} />
            <div class="password-strength">
                <div class="strength-bar">
                    <div id="passwordStrength" class={classes!("strength-fill", strength.css_class())}></div>
                </div>
                <span id="passwordText" style={format!("color: {};", strength.color())}>{ strength.label() }</span>
            </div>
            <ul class="password-requirements">
                { for criteria.checklist().into_iter().map(|(id, label, met)| html! {
                    <li {id} class={classes!("requirement", met.then_some("met"))}>
                        { format!("{} {}", if met { "✓" } else { "✗" }, label) }
                    </li>
                }) }
            </ul>
            <PasswordInput id="password2" name="password2" label="Подтверждение пароля"
                autocomplete="new-password" oninput={on_password2} />
            <div id="passwordMatch" style={format!("color: {};", matched.color())}>{ matched.text() }</div>
            <SubmitButton id="registerSubmitBtn" label="Зарегистрироваться" {busy} />
        </form>
    }
}

#[function_component(LoginForm)]
pub fn login_form(props: &AuthFormProps) -> Html {
    let session = use_context::<Session>().unwrap_or_default();
    let (busy, onsubmit) = use_busy_submit();
    let first = use_autofocus();

    html! {
        <>
            <form id="loginForm" class="auth-form" method="post" action={props.action.clone()} {onsubmit}>
                <input type="hidden" name="csrfmiddlewaretoken" value={session.csrf_token.clone()} />
                <Field>
                    <label for="username">{"Имя пользователя"}</label>
                    <input type="text" id="username" name="username" class="form-input"
                           autocomplete="username" required=true ref={first} />
                </Field>
                <PasswordInput id="password" name="password" label="Пароль" autocomplete="current-password" />
                <SubmitButton id="loginSubmitBtn" label="Войти" {busy} />
            </form>
            <PasswordRecovery />
        </>
    }
}
