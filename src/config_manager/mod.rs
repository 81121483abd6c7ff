pub mod main;
pub mod pipeline;
pub mod stateless_llm;
pub mod system;
pub mod utils;

pub use main::*;
pub use pipeline::*;
pub use stateless_llm::*;
