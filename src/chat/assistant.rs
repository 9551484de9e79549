//! Outbound request builder.
//!
//! Packages a visitor question with the persona and the fixed temperature,
//! sends it through the provider once, and turns every outcome into the
//! text that goes into the transcript.

use tracing::{debug, info, warn};

use crate::llm::{GenerateRequest, LlmProvider, ProviderError};
use crate::persona::Persona;

use super::classifier::{FailureKind, Fallbacks};

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Model text, returned as-is.
    Model,
    /// The service answered with no text.
    EmptyFallback,
    /// A classified failure.
    Failure(FailureKind),
}

/// The text to append as the ai message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub source: ReplySource,
}

#[derive(Debug, Clone)]
pub struct Assistant {
    provider: LlmProvider,
    persona: Persona,
    temperature: f32,
    fallbacks: Fallbacks,
}

impl Assistant {
    pub fn new(provider: LlmProvider, persona: Persona, temperature: f32, fallbacks: Fallbacks) -> Self {
        Self { provider, persona, temperature, fallbacks }
    }

    pub fn provider(&self) -> &LlmProvider {
        &self.provider
    }

    pub fn fallbacks(&self) -> &Fallbacks {
        &self.fallbacks
    }

    /// Send `question` once. No retry, no timeout beyond the provider's own.
    pub async fn ask(&self, question: &str) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            system_instruction: self.persona.system_instruction(),
            prompt: question,
            temperature: self.temperature,
        };
        self.provider.generate(&request).await.map(|r| r.text)
    }

    /// Full pipeline: offline check, request, empty-reply fallback and error
    /// classification. Never fails.
    pub async fn reply(&self, question: &str, online: bool) -> Reply {
        if !online {
            info!("offline: chat request not attempted");
            return self.failure(FailureKind::Offline);
        }

        match self.ask(question).await {
            Ok(text) if text.trim().is_empty() => {
                debug!(provider = self.provider.name(), "empty reply: using fallback");
                Reply { text: self.fallbacks.empty_reply(), source: ReplySource::EmptyFallback }
            }
            Ok(text) => Reply { text, source: ReplySource::Model },
            Err(e) => {
                let (kind, text) = self.fallbacks.for_error(&e);
                warn!(provider = self.provider.name(), error = %e, ?kind, "chat request failed");
                Reply { text, source: ReplySource::Failure(kind) }
            }
        }
    }

    fn failure(&self, kind: FailureKind) -> Reply {
        Reply { text: self.fallbacks.message(kind), source: ReplySource::Failure(kind) }
    }
}
