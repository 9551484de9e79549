//! Chat transcript controller.
//!
//! Owns the ordered message list and the single outstanding request. The
//! transcript and the busy flag live together in a `watch` channel: the
//! single-flight check-and-set happens under the channel lock, and every
//! change wakes subscribers so they can re-render.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use super::Connectivity;
use super::assistant::Assistant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self { role: Role::Ai, text: text.into() }
    }
}

/// What subscribers see after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranscriptView {
    pub messages: Vec<Message>,
    pub busy: bool,
}

/// Why a submission was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    Empty,
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Ignored(Ignored),
    /// The ai message appended for this submission.
    Answered(Message),
}

pub struct ChatController {
    assistant: Arc<Assistant>,
    connectivity: Connectivity,
    state: watch::Sender<TranscriptView>,
}

impl ChatController {
    /// New controller whose transcript opens with the greeting.
    pub fn new(assistant: Arc<Assistant>, connectivity: Connectivity) -> Self {
        let greeting = Message::ai(assistant.fallbacks().greeting());
        Self::with_messages(assistant, connectivity, vec![greeting])
    }

    pub fn with_messages(
        assistant: Arc<Assistant>,
        connectivity: Connectivity,
        messages: Vec<Message>,
    ) -> Self {
        let (state, _) = watch::channel(TranscriptView { messages, busy: false });
        Self { assistant, connectivity, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<TranscriptView> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> TranscriptView {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().busy
    }

    /// Submit a visitor question.
    ///
    /// Empty input and input arriving while a request is in flight are
    /// dropped without touching the transcript.
    pub async fn submit(&self, text: &str) -> Submission {
        let text = text.trim();
        if text.is_empty() {
            return Submission::Ignored(Ignored::Empty);
        }

        let accepted = self.state.send_if_modified(|view| {
            if view.busy {
                return false;
            }
            view.messages.push(Message::user(text));
            view.busy = true;
            true
        });
        if !accepted {
            debug!("submission dropped: request already in flight");
            return Submission::Ignored(Ignored::Busy);
        }

        let guard = BusyGuard { state: &self.state, armed: true };
        let reply = self.assistant.reply(text, self.connectivity.is_online()).await;
        let message = Message::ai(reply.text);
        guard.finish(message.clone());
        Submission::Answered(message)
    }
}

/// Clears `busy` if the pending submit is dropped before it finishes.
struct BusyGuard<'a> {
    state: &'a watch::Sender<TranscriptView>,
    armed: bool,
}

impl BusyGuard<'_> {
    fn finish(mut self, message: Message) {
        self.armed = false;
        self.state.send_modify(|view| {
            view.messages.push(message);
            view.busy = false;
        });
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.state.send_modify(|view| view.busy = false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::classifier::Fallbacks;
    use crate::llm::LlmProvider;
    use crate::llm::providers::scripted::ScriptedProvider;
    use crate::persona::PersonaBuilder;

    fn controller(script: &ScriptedProvider) -> ChatController {
        let assistant = Assistant::new(
            LlmProvider::Scripted(script.clone()),
            PersonaBuilder::new("persona").build(),
            0.1,
            Fallbacks::site(),
        );
        ChatController::new(Arc::new(assistant), Connectivity::online())
    }

    #[test]
    fn starts_with_greeting() {
        let c = controller(&ScriptedProvider::new());
        let view = c.snapshot();
        assert_eq!(view.messages, vec![Message::ai(Fallbacks::site().greeting())]);
        assert!(!view.busy);
    }

    #[tokio::test]
    async fn answered_submission_appends_pair() {
        let script = ScriptedProvider::new();
        script.push_reply("Hello.");
        let c = controller(&script);

        let outcome = c.submit("  hi  ").await;
        assert_eq!(outcome, Submission::Answered(Message::ai("Hello.")));

        let view = c.snapshot();
        assert_eq!(&view.messages[1..], &[Message::user("hi"), Message::ai("Hello.")]);
        assert!(!view.busy);
    }

    #[tokio::test]
    async fn whitespace_is_ignored() {
        let script = ScriptedProvider::new();
        let c = controller(&script);
        assert_eq!(c.submit(" \t\n").await, Submission::Ignored(Ignored::Empty));
        assert_eq!(c.snapshot().messages.len(), 1);
        assert_eq!(script.calls(), 0);
    }

    #[tokio::test]
    async fn every_change_notifies_subscribers() {
        let script = ScriptedProvider::new();
        script.push_reply("ok");
        let c = controller(&script);
        let mut rx = c.subscribe();
        rx.borrow_and_update();

        c.submit("q").await;
        assert!(rx.has_changed().unwrap());
        let view = rx.borrow_and_update().clone();
        assert_eq!(view.messages.last(), Some(&Message::ai("ok")));
    }

    #[tokio::test]
    async fn dropped_submit_releases_busy() {
        let gate = Arc::new(tokio::sync::Notify::new());
        let script = ScriptedProvider::gated(gate);
        script.push_reply("never");
        let c = controller(&script);

        {
            let pending = c.submit("q");
            tokio::pin!(pending);
            // Poll once so the request is in flight, then abandon it.
            let polled = futures_poll_once(pending.as_mut()).await;
            assert!(polled.is_none());
            assert!(c.is_busy());
        }
        assert!(!c.is_busy());
        assert_eq!(c.snapshot().messages.last(), Some(&Message::user("q")));
    }

    async fn futures_poll_once<F: std::future::Future + Unpin>(fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            out = fut => Some(out),
            _ = std::future::ready(()) => None,
        }
    }
}
