//! Scripted provider: replays a queue of canned outcomes.
//!
//! Drives the chat pipeline through every failure kind without a network:
//! tests and demos queue replies or errors, can hold each call on a
//! [`Notify`] to keep a request in flight, and read the call count back.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use crate::llm::{GenerateRequest, LlmResponse, ProviderError};

#[derive(Debug, Default)]
struct Script {
    outcomes: Mutex<VecDeque<Result<String, ProviderError>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

/// Cloning shares the script, so a test can keep a handle after handing the
/// provider to the pipeline.
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    script: Arc<Script>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`new`](Self::new), but every call waits for a `notify_one` on
    /// `gate` before answering.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            script: Arc::new(Script { gate: Some(gate), ..Script::default() }),
        }
    }

    /// Queue a successful reply.
    pub fn push_reply(&self, text: impl Into<String>) -> &Self {
        self.lock_outcomes().push_back(Ok(text.into()));
        self
    }

    /// Queue a failure.
    pub fn push_error(&self, err: ProviderError) -> &Self {
        self.lock_outcomes().push_back(Err(err));
        self
    }

    /// Number of `generate` calls received so far.
    pub fn calls(&self) -> usize {
        self.script.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.script
            .prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn ping(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    pub async fn generate(&self, request: &GenerateRequest<'_>) -> Result<LlmResponse, ProviderError> {
        self.script.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.script.prompts.lock() {
            prompts.push(request.prompt.to_string());
        }
        if let Some(gate) = &self.script.gate {
            gate.notified().await;
        }
        match self.lock_outcomes().pop_front() {
            Some(outcome) => outcome.map(|text| LlmResponse { text }),
            None => Err(ProviderError::Request("script exhausted".into())),
        }
    }

    fn lock_outcomes(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String, ProviderError>>> {
        // A poisoned lock only means another test thread panicked mid-push.
        self.script
            .outcomes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
