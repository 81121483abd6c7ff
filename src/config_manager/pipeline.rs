use serde::{Deserialize, Serialize};

/// Fixed-window rate limiting for the translate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    #[serde(rename = "max_requests")]
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    #[serde(rename = "window_ms")]
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,

    /// Chance per check of sweeping expired entries
    #[serde(rename = "cleanup_probability")]
    #[serde(default = "default_cleanup_probability")]
    pub cleanup_probability: f64,
}

fn default_max_requests() -> u32 {
    10
}

fn default_window_ms() -> u64 {
    60 * 1000
}

fn default_cleanup_probability() -> f64 {
    0.01
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_ms: default_window_ms(),
            cleanup_probability: default_cleanup_probability(),
        }
    }
}

/// Bounded retry of the AI call: fixed delay, no backoff
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(rename = "max_attempts")]
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(rename = "delay_ms")]
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

fn default_max_attempts() -> u32 {
    2
}

fn default_delay_ms() -> u64 {
    1000
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            delay_ms: default_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationProfile {
    #[default]
    Default,
    Strict,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InputValidationConfig {
    #[serde(default)]
    pub profile: ValidationProfile,
}
