use serde::{Deserialize, Serialize};

/// Configuration for the OpenAI-compatible chat-completion gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAICompatibleConfig {
    #[serde(rename = "base_url")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(rename = "llm_api_key")]
    #[serde(default)]
    pub llm_api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(rename = "max_tokens")]
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Per-attempt transport timeout
    #[serde(rename = "timeout_secs")]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sent as `HTTP-Referer` for gateway attribution
    #[serde(default = "default_referer")]
    pub referer: String,

    /// Sent as `X-Title` for gateway attribution
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "mistralai/mistral-small-3.2-24b-instruct:free".to_string()
}

fn default_max_tokens() -> u32 {
    200
}

fn default_temperature() -> f32 {
    0.8
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_referer() -> String {
    "https://ad-jargon-translator.vercel.app".to_string()
}

fn default_title() -> String {
    "Ad Agency Jargon Translator".to_string()
}

impl OpenAICompatibleConfig {
    pub fn has_api_key(&self) -> bool {
        !self.llm_api_key.trim().is_empty()
    }
}

impl Default for OpenAICompatibleConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            llm_api_key: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
            referer: default_referer(),
            title: default_title(),
        }
    }
}
