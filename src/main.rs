mod agent;
mod config_manager;
mod handlers;
mod jargon;
mod rate_limiter;
mod routes;
mod state;
mod translate;
mod validation;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config_manager::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG overrides the default filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("jargon_backend=debug,tower_http=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::discover()?;
    let addr = config.system_config.socket_addr()?;

    let app_state = AppState::new(config)?;
    info!(
        "AI translation {}",
        if app_state.orchestrator.llm_configured() { "enabled" } else { "disabled, using fallback only" }
    );

    let app = routes::build_app(app_state);

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
