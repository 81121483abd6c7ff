//! Wire types for the translate endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationMethod {
    Ai,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub success: bool,
    pub translated_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<TranslationMethod>,
}

impl TranslationResult {
    pub fn translated(text: String, method: TranslationMethod) -> Self {
        Self {
            success: true,
            translated_text: text,
            error: None,
            method: Some(method),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            translated_text: String::new(),
            error: Some(error.into()),
            method: None,
        }
    }
}
