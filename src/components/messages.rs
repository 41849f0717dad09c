//! Transient flash messages shown at the top of the main content.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::app::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    fn css(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u32,
    pub text: String,
    pub kind: MessageKind,
}

/// Newest message first.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MessageQueue {
    next_id: u32,
    pub items: Vec<Message>,
}

pub enum MessageAction {
    Push { text: String, kind: MessageKind },
    Dismiss(u32),
}

impl MessageQueue {
    fn apply(&mut self, action: MessageAction) {
        match action {
            MessageAction::Push { text, kind } => {
                let id = self.next_id;
                self.next_id = self.next_id.wrapping_add(1);
                self.items.insert(0, Message { id, text, kind });
            }
            MessageAction::Dismiss(id) => self.items.retain(|m| m.id != id),
        }
    }
}

impl Reducible for MessageQueue {
    type Action = MessageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Handle components use to post messages. Outside a `MessageCenter` it only
/// logs to the console.
#[derive(Clone, PartialEq, Default)]
pub struct Notifier {
    dispatcher: Option<UseReducerDispatcher<MessageQueue>>,
}

impl Notifier {
    pub fn push(&self, text: impl Into<String>, kind: MessageKind) {
        let text = text.into();
        match kind {
            MessageKind::Error => gloo::console::warn!(format!("[paddock] {}", text)),
            MessageKind::Success => gloo::console::log!(format!("[paddock] {}", text)),
        }
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher.dispatch(MessageAction::Push { text, kind });
        }
    }

    pub fn success(&self, text: impl Into<String>) { self.push(text, MessageKind::Success) }
    pub fn error(&self, text: impl Into<String>) { self.push(text, MessageKind::Error) }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct MessageCenterProps {
    pub children: Children,
}

/// Provides a `Notifier` to its children and renders the `.messages` list.
#[function_component(MessageCenter)]
pub fn message_center(props: &MessageCenterProps) -> Html {
    let queue = use_reducer(MessageQueue::default);
    let notifier = Notifier { dispatcher: Some(queue.dispatcher()) };
    let ttl = use_context::<Session>()
        .map(|s| s.config.message_ttl_ms)
        .unwrap_or(5_000);

    html! {
        <ContextProvider<Notifier> context={notifier}>
            <div class="messages">
                { for queue.items.iter().map(|m| html! {
                    <Toast key={m.id} message={m.clone()} ttl_ms={ttl} dispatcher={queue.dispatcher()} />
                }) }
            </div>
            { for props.children.iter() }
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    message: Message,
    ttl_ms: u32,
    dispatcher: UseReducerDispatcher<MessageQueue>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    {
        let id = props.message.id;
        let dispatcher = props.dispatcher.clone();
        use_effect_with(props.ttl_ms, move |ttl| {
            let timeout = Timeout::new(*ttl, move || dispatcher.dispatch(MessageAction::Dismiss(id)));
            move || drop(timeout)
        });
    }

    html! {
        <div class={classes!("message", props.message.kind.css())}>{ &props.message.text }</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_message_is_first() {
        let mut q = MessageQueue::default();
        q.apply(MessageAction::Push { text: "a".into(), kind: MessageKind::Success });
        q.apply(MessageAction::Push { text: "b".into(), kind: MessageKind::Error });
        let texts: Vec<&str> = q.items.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "a"]);
    }

    #[test]
    fn dismiss_removes_only_that_message() {
        let mut q = MessageQueue::default();
        for t in ["a", "b", "c"] {
            q.apply(MessageAction::Push { text: t.into(), kind: MessageKind::Success });
        }
        let middle = q.items[1].id;
        q.apply(MessageAction::Dismiss(middle));
        assert_eq!(q.items.len(), 2);
        assert!(q.items.iter().all(|m| m.id != middle));
        q.apply(MessageAction::Dismiss(999));
        assert_eq!(q.items.len(), 2);
    }
}
