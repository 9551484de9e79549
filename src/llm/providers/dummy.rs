//! Dummy LLM provider: echoes the prompt back prefixed with `[echo]`.
//! Lets the site and console run end to end without an API key.

use crate::llm::{GenerateRequest, LlmResponse, ProviderError};

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn generate(&self, request: &GenerateRequest<'_>) -> Result<LlmResponse, ProviderError> {
        Ok(LlmResponse { text: format!("[echo] {}", request.prompt) })
    }
}
