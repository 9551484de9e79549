//! LLM provider abstraction.
//!
//! `LlmProvider` is an enum over concrete provider implementations.
//! Add a new variant + module in `providers/` for each additional backend.
//!
//! Provider instances are shared immutable capabilities: clone them freely.
//! The contract is "text in, text out": a [`GenerateRequest`] carries the
//! system instruction, the user prompt and the sampling temperature, and the
//! provider answers with the raw reply text. Failures are reported as a
//! [`ProviderError`] whose variant names the failure kind, so callers never
//! have to re-derive it from message wording.

pub mod providers;

use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    /// No response was obtained (connect, DNS, timeout, reset).
    #[error("network error: {0}")]
    Network(String),
    /// The service refused the call because of volume or quota.
    #[error("rate limited (429): {0}")]
    RateLimited(String),
    /// The service answered but declined the prompt or the reply.
    #[error("blocked by safety filter: {0}")]
    SafetyBlocked(String),
    /// Credential missing, malformed or rejected.
    #[error("unauthorized (api key): {0}")]
    Unauthorized(String),
    /// Anything the provider could not put in a narrower bucket.
    #[error("provider request failed: {0}")]
    Request(String),
}

// ── Request / response ────────────────────────────────────────────────────────

/// One "generate text reply" call.
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    pub system_instruction: &'a str,
    pub prompt: &'a str,
    pub temperature: f32,
}

/// Raw reply from a provider. `text` is empty when the service returned no text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LlmResponse {
    pub text: String,
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
///
/// Enum dispatch avoids `dyn` trait objects and the `async-trait` dependency.
/// Adding a backend = new module + new variant + new match arms.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Dummy(providers::dummy::DummyProvider),
    Gemini(providers::gemini::GeminiProvider),
    /// Test double; only built with the `testing` feature.
    #[cfg(any(test, feature = "testing"))]
    Scripted(providers::scripted::ScriptedProvider),
}

impl LlmProvider {
    /// Short name used in logs and `/api/health`.
    pub fn name(&self) -> &'static str {
        match self {
            LlmProvider::Dummy(_) => "dummy",
            LlmProvider::Gemini(_) => "gemini",
            #[cfg(any(test, feature = "testing"))]
            LlmProvider::Scripted(_) => "scripted",
        }
    }

    /// Send one request and return the provider's text reply. Single attempt.
    pub async fn generate(&self, request: &GenerateRequest<'_>) -> Result<LlmResponse, ProviderError> {
        match self {
            LlmProvider::Dummy(p) => p.generate(request).await,
            LlmProvider::Gemini(p) => p.generate(request).await,
            #[cfg(any(test, feature = "testing"))]
            LlmProvider::Scripted(p) => p.generate(request).await,
        }
    }

    /// Reachability probe used by the connectivity monitor.
    pub async fn ping(&self) -> Result<(), ProviderError> {
        match self {
            LlmProvider::Dummy(_) => Ok(()),
            LlmProvider::Gemini(p) => p.ping().await,
            #[cfg(any(test, feature = "testing"))]
            LlmProvider::Scripted(p) => p.ping(),
        }
    }
}
