//! Google Gemini provider (`models/{model}:generateContent`).
//!
//! Exposes `generate(&GenerateRequest) -> LlmResponse` like the rest of the
//! `LlmProvider` abstraction. All Gemini wire types are private to this
//! module. HTTP statuses, error envelopes and prompt feedback are mapped to
//! the structured [`ProviderError`] kinds here, at the transport boundary.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace, warn};

use crate::llm::{GenerateRequest, LlmResponse, ProviderError};

/// Finish reasons that mean the reply was withheld by a content filter.
const SAFETY_FINISH_REASONS: &[&str] = &["SAFETY", "PROHIBITED_CONTENT", "BLOCKLIST", "SPII"];

// ── Public provider ───────────────────────────────────────────────────────────

/// Adapter for the Gemini `generateContent` REST endpoint.
///
/// Constructed once at startup, then cheaply cloned because `reqwest::Client`
/// is an `Arc` internally.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    probe_client: Client,
    api_base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    /// Build a provider from config values and an optional API key.
    ///
    /// `timeout_seconds = None` leaves requests unbounded; the service and the
    /// network stack decide how long a call may take.
    pub fn new(
        api_base_url: String,
        model: String,
        timeout_seconds: Option<u64>,
        api_key: Option<String>,
    ) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::Request(format!("failed to build HTTP client: {e}")))?;
        let probe_client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| ProviderError::Request(format!("failed to build probe client: {e}")))?;

        Ok(Self {
            client,
            probe_client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base_url, self.model)
    }

    /// Lightweight reachability probe.
    ///
    /// Any HTTP response (including 4xx) means the service is reachable. Only
    /// a transport-level failure counts as unreachable.
    pub async fn ping(&self) -> Result<(), ProviderError> {
        self.probe_client
            .head(format!("{}/models", self.api_base_url))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| ProviderError::Network(format!("unreachable: {e}")))
    }

    /// One round-trip: no retries, no history.
    pub async fn generate(&self, request: &GenerateRequest<'_>) -> Result<LlmResponse, ProviderError> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("gemini request attempted without an API key");
            return Err(ProviderError::Unauthorized(
                "no API key configured (set GEMINI_API_KEY)".into(),
            ));
        };

        let payload = GenerateContentRequest {
            system_instruction: WireContent {
                role: None,
                parts: vec![WirePart { text: request.system_instruction }],
            },
            contents: vec![WireContent {
                role: Some("user"),
                parts: vec![WirePart { text: request.prompt }],
            }],
            generation_config: GenerationConfig { temperature: request.temperature },
        };

        debug!(
            model = %self.model,
            temperature = request.temperature,
            prompt_len = request.prompt.len(),
            "sending gemini request"
        );
        if tracing::enabled!(tracing::Level::TRACE) {
            let json = serde_json::to_string_pretty(&payload)
                .unwrap_or_else(|e| format!("<serialization failed: {e}>"));
            trace!(payload = %json, "full gemini request payload");
        }

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(url = %self.api_base_url, error = %e, timeout = e.is_timeout(), "gemini request failed (transport)");
                ProviderError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            let err = error_from_status(status, &body);
            error!(%status, error = %err, "gemini returned HTTP error");
            return Err(err);
        }

        let parsed = response.json::<GenerateContentResponse>().await.map_err(|e| {
            error!(error = %e, "failed to deserialize gemini response");
            ProviderError::Request(format!("failed to parse response body: {e}"))
        })?;

        let text = extract_text(parsed)?;
        debug!(reply_len = text.len(), "received gemini response");
        Ok(LlmResponse { text })
    }
}

// ── Private wire types ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: WireContent<'a>,
    contents: Vec<WireContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<WirePart<'a>>,
}

#[derive(Debug, Serialize)]
struct WirePart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

// Google API error envelope.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Concatenate the first candidate's text parts.
///
/// A blocked prompt, or a candidate stopped by a safety finish reason with no
/// text, is a `SafetyBlocked` error. No candidates at all is an empty reply.
fn extract_text(response: GenerateContentResponse) -> Result<String, ProviderError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ProviderError::SafetyBlocked(format!("prompt blocked: {reason}")));
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Ok(String::new());
    };

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        if let Some(reason) = candidate
            .finish_reason
            .filter(|r| SAFETY_FINISH_REASONS.contains(&r.as_str()))
        {
            return Err(ProviderError::SafetyBlocked(format!("reply withheld: {reason}")));
        }
    }

    Ok(text)
}

/// Map a non-2xx response to a structured error kind.
fn error_from_status(status: StatusCode, body: &str) -> ProviderError {
    let (message, api_status) = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(env) => (env.error.message, env.error.status.unwrap_or_default()),
        Err(_) => (body.trim().to_string(), String::new()),
    };
    let detail = format!("HTTP {status}: {message}");

    if status == StatusCode::TOO_MANY_REQUESTS || api_status == "RESOURCE_EXHAUSTED" {
        ProviderError::RateLimited(detail)
    } else if status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || api_status == "UNAUTHENTICATED"
        || api_status == "PERMISSION_DENIED"
        || message.contains("API key")
    {
        ProviderError::Unauthorized(detail)
    } else {
        ProviderError::Request(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn request_serializes_in_gemini_shape() {
        let payload = GenerateContentRequest {
            system_instruction: WireContent { role: None, parts: vec![WirePart { text: "sys" }] },
            contents: vec![WireContent { role: Some("user"), parts: vec![WirePart { text: "hi" }] }],
            generation_config: GenerationConfig { temperature: 0.5 },
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["systemInstruction"]["parts"][0]["text"], "sys");
        assert!(v["systemInstruction"].get("role").is_none());
        assert_eq!(v["contents"][0]["role"], "user");
        assert_eq!(v["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(v["generationConfig"]["temperature"], 0.5);
    }

    #[test]
    fn extracts_and_joins_parts() {
        let r = parse(r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"there"}]},"finishReason":"STOP"}]}"#);
        assert_eq!(extract_text(r).unwrap(), "Hello there");
    }

    #[test]
    fn no_candidates_is_empty_reply() {
        assert_eq!(extract_text(parse("{}")).unwrap(), "");
    }

    #[test]
    fn blocked_prompt_is_safety_error() {
        let r = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        assert!(matches!(extract_text(r), Err(ProviderError::SafetyBlocked(_))));
    }

    #[test]
    fn safety_finish_without_text_is_safety_error() {
        let r = parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        assert!(matches!(extract_text(r), Err(ProviderError::SafetyBlocked(_))));
    }

    #[test]
    fn max_tokens_finish_without_text_is_empty_reply() {
        let r = parse(r#"{"candidates":[{"finishReason":"MAX_TOKENS"}]}"#);
        assert_eq!(extract_text(r).unwrap(), "");
    }

    #[test]
    fn status_429_is_rate_limited() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert!(matches!(
            error_from_status(StatusCode::TOO_MANY_REQUESTS, body),
            ProviderError::RateLimited(_)
        ));
    }

    #[test]
    fn invalid_key_is_unauthorized() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        assert!(matches!(
            error_from_status(StatusCode::BAD_REQUEST, body),
            ProviderError::Unauthorized(_)
        ));
        assert!(matches!(error_from_status(StatusCode::FORBIDDEN, ""), ProviderError::Unauthorized(_)));
    }

    #[test]
    fn other_status_keeps_message() {
        let err = error_from_status(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded");
        match err {
            ProviderError::Request(msg) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("upstream exploded"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_key_fails_before_sending() {
        let p = GeminiProvider::new("http://127.0.0.1:9".into(), "m".into(), Some(1), None).unwrap();
        let req = GenerateRequest { system_instruction: "s", prompt: "p", temperature: 0.1 };
        assert!(matches!(p.generate(&req).await, Err(ProviderError::Unauthorized(_))));
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let p = GeminiProvider::new("https://example.test/v1beta/".into(), "gemini-x".into(), None, None).unwrap();
        assert_eq!(p.endpoint(), "https://example.test/v1beta/models/gemini-x:generateContent");
    }
}
