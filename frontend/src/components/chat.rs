use log::{debug, error};
use web_sys::{Element, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::api::{self, ChatResponse, NetworkFailure};

pub const PLACEHOLDER_TEXT: &str = "…thinking";
pub const NETWORK_ERROR_TEXT: &str = "Network error (see console).";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    pub pending: bool,
}

impl ChatMessage {
    fn user(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::User, text: text.into(), pending: false }
    }

    fn assistant(text: impl Into<String>) -> Self {
        Self { speaker: Speaker::Assistant, text: text.into(), pending: false }
    }

    fn placeholder() -> Self {
        Self { speaker: Speaker::Assistant, text: PLACEHOLDER_TEXT.to_string(), pending: true }
    }
}

/// Append-only conversation as shown in the chat window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Starts a send cycle. Returns the text to send, or `None` when the
    /// input is blank.
    pub fn submit(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::user(text));
        self.messages.push(ChatMessage::placeholder());
        Some(text.to_string())
    }

    /// Finishes a send cycle. A decoded response drops the last message,
    /// which is the placeholder of the most recent send. A transport
    /// failure leaves it in place and appends after it.
    pub fn resolve(&mut self, outcome: Result<ChatResponse, NetworkFailure>) {
        match outcome {
            Ok(response) => {
                self.messages.pop();
                let text = match api::reported_error(&response.error) {
                    Some(error) => format!("Error: {}", error),
                    None => response.reply.unwrap_or_default(),
                };
                self.messages.push(ChatMessage::assistant(text));
            }
            Err(NetworkFailure) => self.messages.push(ChatMessage::assistant(NETWORK_ERROR_TEXT)),
        }
    }
}

pub enum ChatWidgetMsg {
    SetInput(String),
    Send,
    Resolved(Result<ChatResponse, NetworkFailure>),
}

pub struct ChatWidget {
    log: ChatLog,
    input: String,
    window_ref: NodeRef,
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            log: ChatLog::default(),
            input: String::new(),
            window_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::SetInput(input) => {
                self.input = input;
                true
            }
            ChatWidgetMsg::Send => {
                let Some(message) = self.log.submit(&self.input) else {
                    return false;
                };
                self.input.clear();
                debug!("Sending chat message");
                ctx.link().send_future(async move {
                    match api::send_chat(message).await {
                        Ok(response) => ChatWidgetMsg::Resolved(Ok(response)),
                        Err(e) => {
                            error!("Chat request failed: {}", e);
                            ChatWidgetMsg::Resolved(Err(NetworkFailure))
                        }
                    }
                });
                true
            }
            ChatWidgetMsg::Resolved(outcome) => {
                self.log.resolve(outcome);
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(window) = self.window_ref.cast::<Element>() {
            window.set_scroll_top(window.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(ChatWidgetMsg::Send)
        });

        html! {
            <div class="chat-widget">
                <div id="chat-window" class="chat-window" ref={self.window_ref.clone()}>
                    { for self.log.messages().iter().map(render_message) }
                </div>
                <div class="chat-controls">
                    <input
                        id="chat-in"
                        type="text"
                        placeholder="Ask me about my work…"
                        value={self.input.clone()}
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            ChatWidgetMsg::SetInput(input.value())
                        })}
                        {onkeydown}
                    />
                    <button id="chat-send" onclick={ctx.link().callback(|_| ChatWidgetMsg::Send)}>
                        { "Send" }
                    </button>
                </div>
            </div>
        }
    }
}

fn render_message(message: &ChatMessage) -> Html {
    let (class, who) = match message.speaker {
        Speaker::User => ("user", "You"),
        Speaker::Assistant => ("bot", "Assistant"),
    };
    html! {
        <div class={classes!("chat-message", class, message.pending.then_some("pending"))}>
            <strong>{ format!("{}:", who) }</strong>
            <div>{ &message.text }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> Result<ChatResponse, NetworkFailure> {
        Ok(serde_json::from_str(json).unwrap())
    }

    fn texts(log: &ChatLog) -> Vec<(Speaker, &str, bool)> {
        log.messages().iter().map(|m| (m.speaker, m.text.as_str(), m.pending)).collect()
    }

    #[test]
    fn blank_input_does_nothing() {
        let mut log = ChatLog::default();
        assert_eq!(log.submit("   "), None);
        assert_eq!(log.submit(""), None);
        assert!(log.messages().is_empty());
    }

    #[test]
    fn send_shows_user_message_then_placeholder() {
        let mut log = ChatLog::default();
        assert_eq!(log.submit("  hello "), Some("hello".to_string()));
        assert_eq!(
            texts(&log),
            vec![(Speaker::User, "hello", false), (Speaker::Assistant, PLACEHOLDER_TEXT, true)]
        );
    }

    #[test]
    fn reply_replaces_placeholder() {
        let mut log = ChatLog::default();
        log.submit("hello");
        log.resolve(reply(r#"{"reply":"hi"}"#));
        assert_eq!(
            texts(&log),
            vec![(Speaker::User, "hello", false), (Speaker::Assistant, "hi", false)]
        );
    }

    #[test]
    fn server_error_replaces_placeholder() {
        let mut log = ChatLog::default();
        log.submit("hello");
        log.resolve(reply(r#"{"error":"rate limited"}"#));
        assert_eq!(
            texts(&log),
            vec![(Speaker::User, "hello", false), (Speaker::Assistant, "Error: rate limited", false)]
        );
        assert!(log.messages().iter().all(|m| !m.pending));
    }

    #[test]
    fn network_failure_keeps_placeholder() {
        let mut log = ChatLog::default();
        log.submit("hello");
        log.resolve(Err(NetworkFailure));
        assert_eq!(
            texts(&log),
            vec![
                (Speaker::User, "hello", false),
                (Speaker::Assistant, PLACEHOLDER_TEXT, true),
                (Speaker::Assistant, NETWORK_ERROR_TEXT, false),
            ]
        );
    }

    #[test]
    fn each_send_cycle_is_independent() {
        let mut log = ChatLog::default();
        log.submit("first");
        log.resolve(reply(r#"{"reply":"one"}"#));
        log.submit("second");
        log.resolve(reply(r#"{"reply":"two"}"#));
        assert_eq!(
            texts(&log),
            vec![
                (Speaker::User, "first", false),
                (Speaker::Assistant, "one", false),
                (Speaker::User, "second", false),
                (Speaker::Assistant, "two", false),
            ]
        );
    }

    #[test]
    fn overlapping_sends_pop_whatever_is_last() {
        let mut log = ChatLog::default();
        log.submit("a");
        log.submit("b");
        log.resolve(reply(r#"{"reply":"ra"}"#));
        log.resolve(reply(r#"{"reply":"rb"}"#));
        assert_eq!(
            texts(&log),
            vec![
                (Speaker::User, "a", false),
                (Speaker::Assistant, PLACEHOLDER_TEXT, true),
                (Speaker::User, "b", false),
                (Speaker::Assistant, "rb", false),
            ]
        );
    }
}
