//! Failure classification and fallback copy.
//!
//! Every chat failure becomes one of six [`FailureKind`]s, and every kind
//! has a fixed user-facing message that embeds the contact email. Nothing
//! here retries; classification only picks the words.

use serde::Serialize;

use crate::content::{CHAT_COPY, ChatCopy, Contact, PROFILE};
use crate::llm::ProviderError;

/// Failure kinds in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No connectivity; the request was never issued.
    Offline,
    Network,
    RateLimited,
    SafetyFiltered,
    Unauthorized,
    Unavailable,
}

/// Substring indicators, checked in order against the lower-cased message.
const MESSAGE_RULES: &[(FailureKind, &[&str])] = &[
    (FailureKind::Network, &["network", "fetch", "connect", "timed out", "dns"]),
    (FailureKind::RateLimited, &["429", "quota", "rate limit", "resource_exhausted"]),
    (FailureKind::SafetyFiltered, &["safety", "blocked"]),
    (
        FailureKind::Unauthorized,
        &["api key", "api_key", "401", "403", "permission", "unauthori", "unauthenticated"],
    ),
];

/// Classify a provider error.
///
/// Structured kinds win. Errors the provider could not narrow down fall back
/// to [`classify_message`] on their rendered text.
pub fn classify(err: &ProviderError) -> FailureKind {
    match err {
        ProviderError::Network(_) => FailureKind::Network,
        ProviderError::RateLimited(_) => FailureKind::RateLimited,
        ProviderError::SafetyBlocked(_) => FailureKind::SafetyFiltered,
        ProviderError::Unauthorized(_) => FailureKind::Unauthorized,
        ProviderError::Request(_) | ProviderError::UnknownProvider(_) => {
            classify_message(&err.to_string())
        }
    }
}

/// Case-insensitive, first-match-wins classification of an error message.
pub fn classify_message(message: &str) -> FailureKind {
    let lower = message.to_lowercase();
    MESSAGE_RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| lower.contains(n)))
        .map(|(kind, _)| *kind)
        .unwrap_or(FailureKind::Unavailable)
}

/// Renders [`ChatCopy`] templates with the contact emails filled in.
#[derive(Debug, Clone)]
pub struct Fallbacks {
    copy: ChatCopy,
    email: String,
    secondary_email: String,
}

impl Fallbacks {
    pub fn new(copy: ChatCopy, contact: &Contact) -> Self {
        Self {
            copy,
            email: contact.primary_email.to_string(),
            secondary_email: contact.secondary_email.to_string(),
        }
    }

    /// Copy and contact details as shipped.
    pub fn site() -> Self {
        Self::new(CHAT_COPY.clone(), &PROFILE.contact)
    }

    pub fn message(&self, kind: FailureKind) -> String {
        let template = match kind {
            FailureKind::Offline => self.copy.offline,
            FailureKind::Network => self.copy.unreachable,
            FailureKind::RateLimited => self.copy.rate_limited,
            FailureKind::SafetyFiltered => self.copy.filtered,
            FailureKind::Unauthorized => self.copy.access_error,
            FailureKind::Unavailable => self.copy.unavailable,
        };
        self.render(template)
    }

    /// Classify `err` and render the matching copy.
    pub fn for_error(&self, err: &ProviderError) -> (FailureKind, String) {
        let kind = classify(err);
        (kind, self.message(kind))
    }

    /// Shown when the service answered with no text.
    pub fn empty_reply(&self) -> String {
        self.render(self.copy.empty_reply)
    }

    pub fn greeting(&self) -> &str {
        self.copy.greeting
    }

    pub fn copy(&self) -> &ChatCopy {
        &self.copy
    }

    fn render(&self, template: &str) -> String {
        template
            .replace("{secondary_email}", &self.secondary_email)
            .replace("{email}", &self.email)
    }
}
