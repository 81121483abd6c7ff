use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config_manager::pipeline::{RateLimitConfig, RetryConfig, InputValidationConfig};
use crate::config_manager::stateless_llm::OpenAICompatibleConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::utils::{is_unresolved_placeholder, read_config_text};

/// Environment variable consulted when the config file carries no API key
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Main configuration for the application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(rename = "llm_config")]
    #[serde(default)]
    pub llm_config: OpenAICompatibleConfig,

    #[serde(rename = "rate_limit_config")]
    #[serde(default)]
    pub rate_limit_config: RateLimitConfig,

    #[serde(rename = "retry_config")]
    #[serde(default)]
    pub retry_config: RetryConfig,

    #[serde(rename = "validation_config")]
    #[serde(default)]
    pub validation_config: InputValidationConfig,
}

impl Config {
    /// Load configuration from a YAML or JSON file, picked by extension
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = read_config_text(path)?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> anyhow::Result<Self> {
        let path_lower = path.to_lowercase();
        let config: Config = if path_lower.ends_with(".json") {
            serde_json::from_str(content)?
        } else {
            serde_yaml::from_str(content)?
        };
        Ok(config)
    }

    /// Try the known config locations in order, falling back to built-in defaults
    pub fn discover() -> anyhow::Result<Self> {
        let config_paths: Vec<String> = vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("conf.yaml".to_string()),
            Some("conf.json".to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut config = None;
        for path in &config_paths {
            if !std::path::Path::new(path).exists() {
                debug!("No config file at {}", path);
                continue;
            }
            config = Some(Self::load(path)?);
            info!("Loaded configuration from: {}", path);
            break;
        }

        let mut config = config.unwrap_or_else(|| {
            warn!("No config file found (tried {:?}), using defaults", config_paths);
            Config::default()
        });
        config.resolve_api_key(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// Fill the API key from the environment when the file left it empty or unresolved
    pub fn resolve_api_key(&mut self, env_value: Option<String>) {
        let key = &self.llm_config.llm_api_key;
        if key.trim().is_empty() || is_unresolved_placeholder(key) {
            self.llm_config.llm_api_key = env_value.unwrap_or_default();
        }
    }
}
