//! Floating assistant chat.

use dioxus::prelude::*;
use secureid_core::panels::{compose_reply, ChatSession, Sender};
use tracing::Instrument;

use crate::services::Services;

const SCROLL_ANCHOR_JS: &str =
    "document.getElementById('chat-scroll-anchor')?.scrollIntoView({behavior: 'smooth'})";

fn bubble_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "chat-bubble chat-bubble-user",
        Sender::Bot => "chat-bubble chat-bubble-bot",
    }
}

#[component]
pub fn ChatBot(on_close: EventHandler<()>) -> Element {
    let services = use_context::<Services>();
    let mut session = use_signal(ChatSession::new);

    // Keep the newest message in view
    use_effect(move || {
        let _count = session.read().messages().len();
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            let _ = document::eval(SCROLL_ANCHOR_JS).await;
        });
    });

    let send = move || {
        let Some(text) = session.write().begin_send() else {
            return;
        };
        let services = services.clone();
        let span = services.session.clone();
        spawn(
            async move {
                let reply = compose_reply(
                    services.scheduler.as_ref(),
                    &services.config.timings,
                    &text,
                )
                .await;
                session.write().deliver_reply(reply);
            }
            .instrument(span),
        );
    };

    let current = session.read().clone();

    rsx! {
        div { class: "chat-panel",
            div { class: "chat-header",
                span { class: "chat-title", "SecureID Assistant" }
                button {
                    class: "chat-close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }

            div { class: "chat-messages",
                for (idx, msg) in current.messages().iter().enumerate() {
                    div { key: "{idx}", class: bubble_class(msg.sender), "{msg.text}" }
                }
                if current.is_typing() {
                    div { class: "chat-bubble chat-bubble-bot typing-indicator",
                        span { class: "typing-dot" }
                        span { class: "typing-dot" }
                        span { class: "typing-dot" }
                    }
                }
                div { id: "chat-scroll-anchor" }
            }

            div { class: "chat-input-row",
                input {
                    class: "chat-input",
                    r#type: "text",
                    placeholder: "Ask about SecureID...",
                    value: "{current.draft}",
                    oninput: move |evt| session.write().draft = evt.value(),
                    onkeydown: {
                        let mut send = send.clone();
                        move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter && !evt.modifiers().shift() {
                                evt.prevent_default();
                                send();
                            }
                        }
                    },
                }
                button {
                    class: "chat-send",
                    disabled: current.draft.trim().is_empty(),
                    onclick: {
                        let mut send = send.clone();
                        move |_| send()
                    },
                    "Send"
                }
            }
        }
    }
}
