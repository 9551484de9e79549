//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies `FOLIO_BIND` and `FOLIO_LOG_LEVEL` env overrides. The LLM
//! credential comes from `GEMINI_API_KEY` (or `API_KEY`) and never from TOML.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::AppError;
use crate::logger;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address the site listens on.
    pub bind: String,
}

/// Gemini provider configuration, populated from `[llm.gemini]`.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API root; `/models/{model}:generateContent` is appended per request.
    pub api_base_url: String,
    pub model: String,
    /// Per-request HTTP timeout. `None` leaves the call unbounded.
    pub timeout_seconds: Option<u64>,
}

/// LLM subsystem configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Active provider (`"gemini"` or `"dummy"`). Maps to `default` in `[llm]`.
    pub provider: String,
    pub gemini: GeminiConfig,
}

/// Chat pipeline configuration.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Sampling temperature sent with every request.
    pub temperature: f32,
    /// Persona template; the compiled-in template is used when the file is missing.
    pub persona_file: PathBuf,
    /// Seconds between connectivity probes. `0` disables probing.
    pub probe_interval_seconds: u64,
}

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub chat: ChatConfig,
    /// `None` when no key is set; requests then fail with the auth fallback.
    pub llm_api_key: Option<String>,
}

/// Raw TOML shape: `serde` target before resolution.
#[derive(Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    site: RawSite,
    #[serde(default)]
    chat: RawChat,
    #[serde(default)]
    llm: RawLlm,
}

#[derive(Deserialize)]
struct RawSite {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default = "default_bind")]
    bind: String,
}

impl Default for RawSite {
    fn default() -> Self {
        Self { log_level: default_log_level(), bind: default_bind() }
    }
}

#[derive(Deserialize)]
struct RawChat {
    #[serde(default = "default_temperature")]
    temperature: f32,
    #[serde(default = "default_persona_file")]
    persona_file: String,
    #[serde(default = "default_probe_interval")]
    probe_interval_seconds: u64,
}

impl Default for RawChat {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            persona_file: default_persona_file(),
            probe_interval_seconds: default_probe_interval(),
        }
    }
}

#[derive(Deserialize)]
struct RawLlm {
    #[serde(rename = "default", default = "default_llm_provider")]
    provider: String,
    #[serde(default)]
    gemini: RawGeminiConfig,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self { provider: default_llm_provider(), gemini: RawGeminiConfig::default() }
    }
}

#[derive(Deserialize)]
struct RawGeminiConfig {
    #[serde(default = "default_gemini_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_gemini_model")]
    model: String,
    #[serde(default)]
    timeout_seconds: Option<u64>,
}

impl Default for RawGeminiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_gemini_api_base_url(),
            model: default_gemini_model(),
            timeout_seconds: None,
        }
    }
}

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

fn default_log_level() -> String { "info".to_string() }
fn default_bind() -> String { "127.0.0.1:8080".to_string() }
fn default_temperature() -> f32 { 0.1 }
fn default_persona_file() -> String { "config/prompts/persona.md".to_string() }
fn default_probe_interval() -> u64 { 30 }
fn default_llm_provider() -> String { "gemini".to_string() }
fn default_gemini_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}
fn default_gemini_model() -> String { "gemini-3-flash-preview".to_string() }

/// Load config from `path` (default `config/default.toml`), then apply
/// env-var overrides.
pub fn load(path: Option<&str>) -> Result<Config, AppError> {
    let bind_override = env::var("FOLIO_BIND").ok();
    let log_level_override = env::var("FOLIO_LOG_LEVEL").ok();
    load_from(
        Path::new(path.unwrap_or(DEFAULT_CONFIG_PATH)),
        bind_override.as_deref(),
        log_level_override.as_deref(),
    )
}

/// Internal loader: accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    bind_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    if !(0.0..=2.0).contains(&parsed.chat.temperature) {
        return Err(AppError::Config(format!(
            "chat.temperature must be within 0.0..=2.0, got {}",
            parsed.chat.temperature
        )));
    }

    let log_level = log_level_override.unwrap_or(&parsed.site.log_level).to_string();
    // Full EnvFilter directives are checked by the logger itself.
    if !log_level.contains([',', '=']) {
        logger::parse_level(&log_level)
            .map_err(|e| AppError::Config(format!("site.log_level: {e}")))?;
    }

    Ok(Config {
        log_level,
        server: ServerConfig {
            bind: bind_override.unwrap_or(&parsed.site.bind).to_string(),
        },
        llm: LlmConfig {
            provider: parsed.llm.provider,
            gemini: GeminiConfig {
                api_base_url: parsed.llm.gemini.api_base_url,
                model: parsed.llm.gemini.model,
                timeout_seconds: parsed.llm.gemini.timeout_seconds.filter(|s| *s > 0),
            },
        },
        chat: ChatConfig {
            temperature: parsed.chat.temperature,
            persona_file: PathBuf::from(parsed.chat.persona_file),
            probe_interval_seconds: parsed.chat.probe_interval_seconds,
        },
        llm_api_key: api_key_from_env(),
    })
}

/// `GEMINI_API_KEY` first, then the generic `API_KEY`. Blank values count as unset.
fn api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "API_KEY"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

// ── test helpers ──────────────────────────────────────────────────────────────

/// Safe `Config` for unit tests: dummy LLM, no API key, no probing.
#[cfg(test)]
impl Config {
    pub fn test_default() -> Self {
        Self {
            log_level: "info".into(),
            server: ServerConfig { bind: "127.0.0.1:0".into() },
            llm: LlmConfig {
                provider: "dummy".into(),
                gemini: GeminiConfig {
                    api_base_url: "http://localhost:0/v1beta".into(),
                    model: "test-model".into(),
                    timeout_seconds: Some(1),
                },
            },
            chat: ChatConfig {
                temperature: 0.1,
                persona_file: PathBuf::from("/nonexistent/persona.md"),
                probe_interval_seconds: 0,
            },
            llm_api_key: None,
        }
    }
}
