pub mod error;
pub mod interface;
pub mod orchestrator;
pub mod prompt;
pub mod retry;

pub use orchestrator::{TranslationOrchestrator, TranslationOutcome};
