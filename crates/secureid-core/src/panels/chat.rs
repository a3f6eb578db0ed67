//! Assistant chat session.

use tracing::instrument;

use crate::assistant::{classify, GREETING};
use crate::clock::Scheduler;
use crate::config::Timings;

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// Chat widget state
///
/// The message list is append-only; it starts with the greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    /// Text in the input box.
    pub draft: String,
    pending_replies: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
            draft: String::new(),
            pending_replies: 0,
        }
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the typing indicator should show.
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    /// Post the draft as a user message.
    ///
    /// Returns the posted text for [`compose_reply`], or `None` if the
    /// draft is blank.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        self.messages.push(ChatMessage::user(text.clone()));
        self.pending_replies += 1;
        Some(text)
    }

    /// Append a bot reply for an earlier [`ChatSession::begin_send`].
    pub fn deliver_reply(&mut self, reply: &str) {
        self.messages.push(ChatMessage::bot(reply));
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }
}

/// Wait the reply delay, then pick the canned reply for `message`.
#[instrument(skip_all)]
pub async fn compose_reply(
    scheduler: &dyn Scheduler,
    timings: &Timings,
    message: &str,
) -> &'static str {
    scheduler.sleep(timings.bot_reply()).await;
    let topic = classify(message);
    tracing::debug!(?topic, "Assistant replying");
    topic.reply()
}
