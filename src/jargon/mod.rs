pub mod phrase_bank;
pub mod transformer;

pub use phrase_bank::EXAMPLE_PHRASES;
pub use transformer::fallback_translation;
