//! LLM provider implementations.
//!
//! `build(config, api_key)` is the factory: called at startup.
//! Adding a new backend = new module + new match arm.

pub mod dummy;
pub mod gemini;
#[cfg(any(test, feature = "testing"))]
pub mod scripted;

use crate::config::LlmConfig;
use crate::llm::{LlmProvider, ProviderError};

/// Construct a `LlmProvider` from config and an optional API key.
///
/// `api_key` is sourced from the environment (never TOML). A missing key is
/// not an error here: Gemini reports it per request as `Unauthorized`.
pub fn build(config: &LlmConfig, api_key: Option<String>) -> Result<LlmProvider, ProviderError> {
    match config.provider.as_str() {
        "dummy" => Ok(LlmProvider::Dummy(dummy::DummyProvider)),
        "gemini" => {
            let g = &config.gemini;
            let p = gemini::GeminiProvider::new(
                g.api_base_url.clone(),
                g.model.clone(),
                g.timeout_seconds,
                api_key,
            )?;
            Ok(LlmProvider::Gemini(p))
        }
        _ => Err(ProviderError::UnknownProvider(config.provider.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn builds_dummy() {
        let cfg = Config::test_default();
        let p = build(&cfg.llm, None).unwrap();
        assert_eq!(p.name(), "dummy");
    }

    #[test]
    fn builds_gemini_without_key() {
        let mut cfg = Config::test_default();
        cfg.llm.provider = "gemini".into();
        let p = build(&cfg.llm, None).unwrap();
        assert_eq!(p.name(), "gemini");
    }

    #[test]
    fn unknown_provider_errors() {
        let mut cfg = Config::test_default();
        cfg.llm.provider = "openai".into();
        let err = build(&cfg.llm, None).unwrap_err();
        assert!(matches!(err, ProviderError::UnknownProvider(name) if name == "openai"));
    }
}
