use axum::http::StatusCode;
use thiserror::Error;

use crate::agent::stateless_llm::LlmError;
use crate::validation::ValidationError;

/// Every way a translate request can end other than success
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request body has no usable text field")]
    MalformedRequest,
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },
    /// Absorbed by the fallback transformer; never returned to a caller
    #[error("AI translation unavailable after {attempts} attempt(s): {source}")]
    AiUnavailable {
        attempts: u32,
        #[source]
        source: LlmError,
    },
    #[error("service error: {0}")]
    ServiceError(String),
}

impl TranslateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedRequest | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::AiUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::ServiceError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short, non-sensitive text for the response body
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedRequest => "Text is required".to_string(),
            Self::InvalidInput(e) => e.to_string(),
            Self::RateLimited { .. } => "Too many requests. Please try again later.".to_string(),
            Self::AiUnavailable { .. } | Self::ServiceError(_) => {
                "Failed to translate text".to_string()
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedRequest => "malformed_request",
            Self::InvalidInput(_) => "invalid_input",
            Self::RateLimited { .. } => "rate_limited",
            Self::AiUnavailable { .. } => "ai_unavailable",
            Self::ServiceError(_) => "service_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_hides_detail() {
        let err = TranslateError::ServiceError("connection reset by peer at 0xdeadbeef".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "Failed to translate text");
    }

    #[test]
    fn invalid_input_carries_validator_message() {
        let err = TranslateError::from(ValidationError::TooLong { max: 1000 });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "Input must not exceed 1000 characters");
    }
}
