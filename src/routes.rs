use axum::{
    extract::State,
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::jargon::EXAMPLE_PHRASES;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Translation
        .route("/translate", post(handlers::translate))
        .route("/api/translate", post(handlers::translate))

        // Health check
        .route("/api/health", get(health_check))

        .route("/api/examples", get(examples))
}

/// Full application: routes, CORS and request tracing
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "ai_configured": state.orchestrator.llm_configured(),
        "model": state.config.llm_config.model
    }))
}

async fn examples() -> Json<Value> {
    Json(json!({ "examples": EXAMPLE_PHRASES }))
}
