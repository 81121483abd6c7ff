use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("gateway returned HTTP {status}")]
    Status { status: u16 },
    #[error("empty completion")]
    EmptyResponse,
}

impl LlmError {
    /// Transport failures, bad statuses and empty completions may succeed on a second try
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::MissingApiKey)
    }
}

/// Interface for a stateless language model
/// Stateless means the LLM doesn't store memory, system prompts, or user messages
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Run one chat completion and return the full response text
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        system: Option<&str>,
    ) -> Result<String, LlmError>;

    /// Whether calls can succeed at all (e.g. a credential is present)
    fn is_configured(&self) -> bool {
        true
    }
}
