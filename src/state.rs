use std::sync::Arc;

use crate::config_manager::Config;
use crate::translate::TranslationOrchestrator;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub orchestrator: Arc<TranslationOrchestrator>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let orchestrator = TranslationOrchestrator::from_config(&config)?;
        Ok(Self::with_orchestrator(config, orchestrator))
    }

    pub fn with_orchestrator(config: Config, orchestrator: TranslationOrchestrator) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
        }
    }
}
