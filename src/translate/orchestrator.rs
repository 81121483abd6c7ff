use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::error::TranslateError;
use super::interface::{TranslationMethod, TranslationRequest, TranslationResult};
use super::prompt::{build_prompt, strip_wrapping_quotes};
use super::retry::RetryPolicy;
use crate::agent::stateless_llm::{ChatMessage, LlmError, OpenAICompatibleLLM, StatelessLLMInterface};
use crate::config_manager::Config;
use crate::jargon::fallback_translation;
use crate::rate_limiter::{client_identifier, RateLimitDecision, RateLimiter};
use crate::validation::InputValidator;

/// Terminal state of one translate request, ready to be rendered as HTTP
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    pub status: StatusCode,
    pub result: TranslationResult,
    pub rate_limit: Option<RateLimitDecision>,
    pub retry_after_secs: Option<u64>,
}

/// Sequences rate limiting, validation, the AI call and the fallback
pub struct TranslationOrchestrator {
    validator: InputValidator,
    rate_limiter: RateLimiter,
    llm: Arc<dyn StatelessLLMInterface>,
    retry: RetryPolicy,
    max_body_bytes: usize,
}

impl TranslationOrchestrator {
    pub fn new(
        validator: InputValidator,
        rate_limiter: RateLimiter,
        llm: Arc<dyn StatelessLLMInterface>,
        retry: RetryPolicy,
        max_body_bytes: usize,
    ) -> Self {
        Self {
            validator,
            rate_limiter,
            llm,
            retry,
            max_body_bytes,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let llm = OpenAICompatibleLLM::new(&config.llm_config)?;
        if !config.llm_config.has_api_key() {
            warn!("No LLM API key configured; every request will use the fallback translator");
        }

        Ok(Self::new(
            InputValidator::for_profile(config.validation_config.profile),
            RateLimiter::in_memory(&config.rate_limit_config),
            Arc::new(llm),
            RetryPolicy::from(&config.retry_config),
            config.system_config.max_body_bytes,
        ))
    }

    pub fn llm_configured(&self) -> bool {
        self.llm.is_configured()
    }

    pub async fn handle(&self, headers: &HeaderMap, body: Body) -> TranslationOutcome {
        let client_id = client_identifier(headers);
        let request_id = Uuid::new_v4();
        let span = info_span!("translate", %request_id, client = %client_id);

        async {
            let decision = self.rate_limiter.check(&client_id);
            let result = self.translate(&decision, body).await;
            Self::finish(result, decision)
        }
        .instrument(span)
        .await
    }

    async fn translate(
        &self,
        decision: &RateLimitDecision,
        body: Body,
    ) -> Result<TranslationResult, TranslateError> {
        if !decision.allowed {
            return Err(TranslateError::RateLimited {
                retry_after_secs: decision.retry_after_secs(self.rate_limiter.now()),
            });
        }

        let bytes = to_bytes(body, self.max_body_bytes)
            .await
            .map_err(|e| TranslateError::ServiceError(format!("reading body: {}", e)))?;
        let text = parse_text(&bytes)?;
        let sanitized = self.validator.validate(&text)?;
        debug!("Sanitized input: {:?}", sanitized);

        match self.translate_with_ai(&sanitized).await {
            Ok(translated) => Ok(TranslationResult::translated(translated, TranslationMethod::Ai)),
            Err(e) => {
                warn!("{}; using fallback translation", e);
                Ok(TranslationResult::translated(
                    fallback_translation(&sanitized),
                    TranslationMethod::Fallback,
                ))
            }
        }
    }

    async fn translate_with_ai(&self, text: &str) -> Result<String, TranslateError> {
        let prompt = build_prompt(text);
        let llm = &self.llm;

        self.retry
            .run(
                |attempt| {
                    let messages = vec![ChatMessage::user(prompt.clone())];
                    async move {
                        debug!("AI attempt {}", attempt);
                        let reply = llm.chat_completion(messages, None).await?;
                        let cleaned = strip_wrapping_quotes(&reply);
                        if cleaned.is_empty() {
                            return Err(LlmError::EmptyResponse);
                        }
                        Ok::<String, LlmError>(cleaned)
                    }
                },
                LlmError::is_retryable,
            )
            .await
            .map_err(|(attempts, source)| TranslateError::AiUnavailable { attempts, source })
    }

    fn finish(
        result: Result<TranslationResult, TranslateError>,
        decision: RateLimitDecision,
    ) -> TranslationOutcome {
        match result {
            Ok(result) => {
                info!("Translated via {:?}", result.method);
                TranslationOutcome {
                    status: StatusCode::OK,
                    result,
                    rate_limit: Some(decision),
                    retry_after_secs: None,
                }
            }
            Err(e) => {
                match &e {
                    TranslateError::ServiceError(_) | TranslateError::AiUnavailable { .. } => {
                        error!("Translation failed: {}", e)
                    }
                    TranslateError::InvalidInput(invalid) => {
                        info!(kind = e.kind(), reason = invalid.reason(), "Request rejected: {}", e)
                    }
                    _ => info!(kind = e.kind(), "Request rejected: {}", e),
                }
                let retry_after_secs = match &e {
                    TranslateError::RateLimited { retry_after_secs } => Some(*retry_after_secs),
                    _ => None,
                };
                TranslationOutcome {
                    status: e.status_code(),
                    result: TranslationResult::failed(e.user_message()),
                    rate_limit: Some(decision),
                    retry_after_secs,
                }
            }
        }
    }
}

/// Pull a non-blank `text` string out of a JSON object body
fn parse_text(bytes: &[u8]) -> Result<String, TranslateError> {
    let request: TranslationRequest =
        serde_json::from_slice(bytes).map_err(|_| TranslateError::MalformedRequest)?;
    if request.text.trim().is_empty() {
        return Err(TranslateError::MalformedRequest);
    }
    Ok(request.text)
}
