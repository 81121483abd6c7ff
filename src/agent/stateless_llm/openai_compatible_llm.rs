use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::stateless_llm_interface::{ChatMessage, LlmError, StatelessLLMInterface};
use crate::config_manager::OpenAICompatibleConfig;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// OpenAI compatible LLM implementation
/// Talks to the chat-completions endpoint of the configured gateway
pub struct OpenAICompatibleLLM {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
    referer: String,
    title: String,
}

impl OpenAICompatibleLLM {
    pub fn new(config: &OpenAICompatibleConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));

        info!(
            "Initialized OpenAICompatibleLLM: model={}, endpoint={}",
            config.model, endpoint
        );
        Ok(Self {
            client,
            endpoint,
            model: config.model.clone(),
            api_key: config.llm_api_key.trim().to_string(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            referer: config.referer.clone(),
            title: config.title.clone(),
        })
    }
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        system: Option<&str>,
    ) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let mut service_messages = Vec::with_capacity(messages.len() + 1);
        if let Some(sys) = system {
            service_messages.push(ChatMessage::system(sys));
        }
        service_messages.extend(messages);

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: service_messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
            });
        }

        let body: ChatCompletionResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if content.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        debug!("Completion received: {} chars", content.len());
        Ok(content)
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
