use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;
use crate::translate::TranslationOutcome;

const RATE_LIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
const RATE_LIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
const RATE_LIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");

/// Handle a translate request
///
/// The raw body is handed over untouched so that rate limiting happens
/// before any parsing.
pub async fn translate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> TranslationOutcome {
    state.orchestrator.handle(&headers, body).await
}

impl IntoResponse for TranslationOutcome {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.result)).into_response();
        let headers = response.headers_mut();

        if let Some(decision) = self.rate_limit {
            headers.insert(RATE_LIMIT_LIMIT, HeaderValue::from(decision.limit));
            headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from(decision.remaining));
            headers.insert(RATE_LIMIT_RESET, HeaderValue::from(decision.reset_at.timestamp()));
        }
        if let Some(secs) = self.retry_after_secs {
            headers.insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }

        response
    }
}
